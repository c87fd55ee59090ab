//! # queuecalc
//!
//! Library half of the queuecalc binary: everything between the pure
//! engine in `queuecalc-core` and the outside world.
//!
//! - `api` - axum router, handlers and JSON request/response types
//! - `config` - layered `AppConfig` (defaults, TOML file, environment)
//! - `presenter` - number trimming, time units, formula reference text
//! - `error` - `AppError`

pub mod api;
pub mod config;
pub mod error;
pub mod presenter;

pub use config::AppConfig;
pub use error::AppError;
