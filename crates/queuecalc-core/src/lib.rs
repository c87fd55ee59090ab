//! # queuecalc-core
//!
//! The steady-state queueing engine for queuecalc - THE LOGIC.
//!
//! Given an arrival rate λ, a per-server service rate μ and a server count c,
//! this crate checks that the birth–death queue is stable and computes its
//! steady-state metrics: utilization, P0, the Erlang-C waiting probability
//! and the mean queue length, system size, waiting time and sojourn time.
//!
//! ## Layers
//!
//! ```text
//! calculator   compute_mm1 / compute_mmc / compute
//!     │
//!     ├── stability   check_* / stable_* predicates
//!     ├── erlang      overflow-safe Erlang-C recurrence
//!     └── metrics     Wq, W, Lq, L via Little's law
//! ```
//!
//! ## Architectural Constraints
//!
//! - Pure functions: no I/O, no async, no global state
//! - Deterministic: identical inputs give bit-identical outputs
//! - Formatting and display are left to the caller
//!
//! ## Example
//!
//! ```
//! use queuecalc_core::compute_mmc;
//!
//! let result = compute_mmc(2.0, 2.0, 2).expect("stable queue");
//! assert_eq!(result.utilization, 0.5);
//! assert!(result.pw > 0.0 && result.pw < 1.0);
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod calculator;
pub mod erlang;
pub mod metrics;
pub mod primitives;
pub mod stability;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{
    ErlangState, ErrorKind, LoadState, MetricsResult, Model, ProbabilityState, QueueError,
    QueueParameters, WaitingMetrics,
};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use calculator::{compute, compute_mm1, compute_mmc};
pub use erlang::erlang_c;
pub use metrics::waiting_metrics;
pub use stability::{
    check_mm1, check_mmc, check_rates, parse_number, server_count_from_real, stable_mm1,
    stable_mmc,
};
