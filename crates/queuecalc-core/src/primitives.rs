//! # Engine Primitives
//!
//! Compiled-in constants for the queueing engine.
//! They are immutable at runtime and shared by every computation.

/// Server count used when the caller does not supply one.
///
/// A single server makes the M/M/c computation collapse to M/M/1.
pub const DEFAULT_SERVERS: u32 = 1;

/// Upper bound on the server count accepted by the stability checks.
///
/// The Erlang recursion is linear in `c`; this keeps every request
/// computationally bounded.
pub const MAX_SERVERS: u32 = 100_000;

/// Magnitude at which the running recurrence term is rescaled.
///
/// Far enough below `f64::MAX` (~1.8e308) that one more multiplication by
/// `a / n < c / n` plus the tail division by `1 - rho` cannot overflow.
pub const RESCALE_THRESHOLD: f64 = 1e280;
