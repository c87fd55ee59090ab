//! # Metrics Module
//!
//! Mean waiting times and populations derived from the Erlang-C state.
//!
//! ```text
//! Wq = Pw / (c·μ - λ)
//! W  = Wq + 1/μ
//! Lq = λ · Wq
//! L  = λ · W
//! ```
//!
//! The last two are Little's law and hold regardless of how `Pw` was
//! obtained.

use crate::types::{ErlangState, QueueParameters, WaitingMetrics};

/// Derive Wq, W, Lq and L.
#[must_use]
pub fn waiting_metrics(params: &QueueParameters, erlang: &ErlangState) -> WaitingMetrics {
    let lambda = params.arrival_rate;
    let spare_capacity = params.capacity() - lambda;

    let wq = erlang.probabilities.pw / spare_capacity;
    let w = wq + 1.0 / params.service_rate;

    WaitingMetrics {
        wq,
        w,
        lq: lambda * wq,
        l: lambda * w,
    }
}
