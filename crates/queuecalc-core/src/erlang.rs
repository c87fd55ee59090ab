//! # Erlang Module
//!
//! Evaluation of the Erlang-C formula for an M/M/c queue.
//!
//! ## Recurrence
//!
//! The unnormalised state probabilities are `p(n) = aⁿ / n!`. Both `aⁿ` and
//! `n!` overflow long before their ratio does, so only the running ratio is
//! carried:
//!
//! ```text
//! p(0) = 1
//! p(n) = p(n-1) · a / n          n = 1..c
//! S    = Σ_{n=0}^{c-1} p(n)
//! T    = p(c) / (1 - ρ)
//! P0   = 1 / (S + T)
//! Pw   = T / (S + T)
//! ```
//!
//! ## Rescaling
//!
//! For large offered loads `p(n)` itself can exceed `f64::MAX` (it peaks
//! near `n = a` at roughly `eᵃ`). Whenever the running term passes
//! [`RESCALE_THRESHOLD`] both the term and the partial sum are divided by the
//! threshold and the factor is remembered in log space. `Pw` is a ratio of
//! rescaled quantities and is unaffected; `P0` picks the factor back up with
//! one `exp`.

use crate::primitives::RESCALE_THRESHOLD;
use crate::stability::stable_mmc;
use crate::types::{ErlangState, LoadState, ProbabilityState, QueueParameters};

/// Scaled partial sums of the state-probability series.
#[derive(Debug, Clone, Copy, PartialEq)]
struct StateSeries {
    /// Σ_{n<c} p(n), divided by `e^log_scale`.
    head: f64,
    /// p(c), divided by `e^log_scale`.
    last: f64,
    /// Natural log of the factor removed from `head` and `last`.
    log_scale: f64,
}

/// Run the forward recurrence up to `servers`.
fn state_series(offered_load: f64, servers: u32) -> StateSeries {
    let mut term = 1.0_f64;
    let mut head = 0.0_f64;
    let mut log_scale = 0.0_f64;

    for n in 1..=servers {
        head += term;
        term *= offered_load / f64::from(n);

        if term > RESCALE_THRESHOLD {
            term /= RESCALE_THRESHOLD;
            head /= RESCALE_THRESHOLD;
            log_scale += RESCALE_THRESHOLD.ln();
            tracing::trace!(n, log_scale, "Rescaled Erlang recurrence");
        }
    }

    StateSeries {
        head,
        last: term,
        log_scale,
    }
}

/// 1 - ρ, evaluated as (c·μ - λ) / (c·μ).
///
/// Strictly positive whenever λ < c·μ in floating point, even when λ/(c·μ)
/// itself rounds to 1. If c·μ overflows, falls back to (c - a) / c, which
/// stays finite because a < c.
fn headroom(params: &QueueParameters, load: &LoadState) -> f64 {
    let capacity = params.capacity();
    if capacity.is_finite() {
        (capacity - params.arrival_rate) / capacity
    } else {
        let servers = f64::from(params.servers);
        (servers - load.offered_load) / servers
    }
}

/// Compute offered load, utilization, P0 and Pw.
///
/// The parameters must satisfy [`stable_mmc`]; callers go through
/// [`crate::calculator`] which validates first. Debug builds assert it.
#[must_use]
pub fn erlang_c(params: &QueueParameters) -> ErlangState {
    debug_assert!(
        stable_mmc(params.arrival_rate, params.service_rate, params.servers),
        "erlang_c called with unstable parameters: {params:?}"
    );

    let load = LoadState::from_parameters(params);
    let series = state_series(load.offered_load, params.servers);

    let tail = series.last / headroom(params, &load);
    let total = series.head + tail;

    let p0 = (-series.log_scale).exp() / total;
    let pw = tail / total;

    ErlangState {
        load,
        probabilities: ProbabilityState { p0, pw },
    }
}

// =============================================================================
// TESTS
// =============================================================================
