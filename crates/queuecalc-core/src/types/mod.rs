//! # Core Type Definitions
//!
//! This module contains all core types for the queueing engine:
//! - Input parameters (`QueueParameters`)
//! - Model tag (`Model`)
//! - Intermediate states (`LoadState`, `ProbabilityState`, `ErlangState`)
//! - Outputs (`WaitingMetrics`, `MetricsResult`)
//! - Error types (`QueueError`, `ErrorKind`)
//!
//! ## Value Semantics
//!
//! Every record here is `Copy` and immutable after construction. A record is
//! built fresh for each computation and carries no hidden state. Only
//! `QueueError` owns heap data (the offending input text).

use crate::primitives::DEFAULT_SERVERS;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// INPUT PARAMETERS
// =============================================================================

/// The three numbers that fully determine a birth–death queue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueParameters {
    /// Mean arrival rate λ.
    pub arrival_rate: f64,
    /// Mean service rate μ of one server.
    pub service_rate: f64,
    /// Number of identical parallel servers c.
    pub servers: u32,
}

impl QueueParameters {
    /// Parameters of a single-server queue.
    #[must_use]
    pub const fn mm1(arrival_rate: f64, service_rate: f64) -> Self {
        Self {
            arrival_rate,
            service_rate,
            servers: DEFAULT_SERVERS,
        }
    }

    /// Parameters of a `servers`-server queue.
    #[must_use]
    pub const fn mmc(arrival_rate: f64, service_rate: f64, servers: u32) -> Self {
        Self {
            arrival_rate,
            service_rate,
            servers,
        }
    }

    /// Total service capacity c·μ.
    #[must_use]
    pub fn capacity(&self) -> f64 {
        f64::from(self.servers) * self.service_rate
    }
}

// =============================================================================
// MODEL TAG
// =============================================================================

/// Which queue variant a result was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Model {
    #[serde(rename = "M/M/1")]
    MM1,
    #[serde(rename = "M/M/c")]
    MMC,
}

impl Model {
    /// Kendall notation for this model.
    #[must_use]
    pub const fn notation(&self) -> &'static str {
        match self {
            Self::MM1 => "M/M/1",
            Self::MMC => "M/M/c",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

// =============================================================================
// INTERMEDIATE STATES
// =============================================================================

/// Offered load and per-server utilization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadState {
    /// a = λ/μ, in erlangs.
    pub offered_load: f64,
    /// ρ = a/c.
    pub utilization: f64,
}

impl LoadState {
    /// Derive the load of a queue.
    ///
    /// ρ is taken as λ/(c·μ) directly rather than as `a / c`, so it carries a
    /// single rounding.
    #[must_use]
    pub fn from_parameters(params: &QueueParameters) -> Self {
        Self {
            offered_load: params.arrival_rate / params.service_rate,
            utilization: params.arrival_rate / params.capacity(),
        }
    }

    /// Whether the queue reaches a steady state (ρ < 1).
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.utilization < 1.0
    }
}

/// Empty-system and waiting probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityState {
    /// P0: probability that the system holds no customer.
    pub p0: f64,
    /// Pw: probability that an arrival has to wait (Erlang C).
    pub pw: f64,
}

/// Output of the Erlang-C evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErlangState {
    pub load: LoadState,
    pub probabilities: ProbabilityState,
}

// =============================================================================
// OUTPUTS
// =============================================================================

/// Mean waiting times and populations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaitingMetrics {
    /// Wq: mean time spent waiting in the queue.
    pub wq: f64,
    /// W: mean time spent in the system.
    pub w: f64,
    /// Lq: mean number of customers waiting.
    pub lq: f64,
    /// L: mean number of customers in the system.
    pub l: f64,
}

/// Full result of one computation request.
///
/// Serialised field names follow queueing notation (`rho`, `L`, `Wq`, ...).
/// Non-finite values serialise as `null` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    pub model: Model,
    #[serde(rename = "c")]
    pub servers: u32,
    #[serde(rename = "rho")]
    pub utilization: f64,
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "Lq")]
    pub lq: f64,
    #[serde(rename = "W")]
    pub w: f64,
    #[serde(rename = "Wq")]
    pub wq: f64,
    #[serde(rename = "P0")]
    pub p0: f64,
    #[serde(rename = "Pw")]
    pub pw: f64,
}

impl MetricsResult {
    /// Assemble a result from the engine and calculator outputs.
    #[must_use]
    pub fn assemble(
        model: Model,
        servers: u32,
        erlang: &ErlangState,
        metrics: &WaitingMetrics,
    ) -> Self {
        Self {
            model,
            servers,
            utilization: erlang.load.utilization,
            l: metrics.l,
            lq: metrics.lq,
            w: metrics.w,
            wq: metrics.wq,
            p0: erlang.probabilities.p0,
            pw: erlang.probabilities.pw,
        }
    }

    /// True when every numeric field is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.utilization,
            self.l,
            self.lq,
            self.w,
            self.wq,
            self.p0,
            self.pw,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Coarse classification of a [`QueueError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or non-numeric input, or a rate outside its domain.
    InvalidInput,
    /// The queue has no steady state, or the server count is not usable.
    InstabilityViolation,
}

/// Errors raised while validating a computation request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueueError {
    /// A required parameter was not supplied.
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    /// A parameter could not be read as a number.
    #[error("Parameter {name} is not a number: {input:?}")]
    NotANumber { name: &'static str, input: String },

    /// A parameter was NaN or infinite.
    #[error("Parameter {name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// λ < 0.
    #[error("Arrival rate λ must be non-negative, got {0}")]
    NegativeArrivalRate(f64),

    /// μ ≤ 0.
    #[error("Service rate μ must be positive, got {0}")]
    NonPositiveServiceRate(f64),

    /// c is not an integer ≥ 1.
    #[error("Server count c must be a positive integer, got {0}")]
    InvalidServerCount(f64),

    /// c is above the supported maximum.
    #[error("Server count {requested} exceeds maximum {max}")]
    TooManyServers { requested: f64, max: u32 },

    /// λ ≥ μ for a single-server queue.
    #[error("M/M/1 stability condition violated: λ < μ required (λ = {lambda}, μ = {mu})")]
    UnstableSingleServer { lambda: f64, mu: f64 },

    /// λ ≥ c·μ for a multi-server queue.
    #[error(
        "M/M/c stability condition violated: λ < c·μ required (λ = {lambda}, c·μ = {capacity})"
    )]
    UnstableMultiServer { lambda: f64, capacity: f64 },
}

impl QueueError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingParameter(_)
            | Self::NotANumber { .. }
            | Self::NonFinite { .. }
            | Self::NegativeArrivalRate(_)
            | Self::NonPositiveServiceRate(_) => ErrorKind::InvalidInput,
            Self::InvalidServerCount(_)
            | Self::TooManyServers { .. }
            | Self::UnstableSingleServer { .. }
            | Self::UnstableMultiServer { .. } => ErrorKind::InstabilityViolation,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mm1_parameters_use_one_server() {
        let params = QueueParameters::mm1(2.0, 3.0);
        assert_eq!(params.servers, 1);
        assert_eq!(params.capacity(), 3.0);
    }

    #[test]
    fn capacity_scales_with_servers() {
        let params = QueueParameters::mmc(5.0, 2.0, 3);
        assert_eq!(params.capacity(), 6.0);
    }

    #[test]
    fn load_state_from_parameters() {
        let load = LoadState::from_parameters(&QueueParameters::mmc(2.0, 2.0, 2));
        assert_eq!(load.offered_load, 1.0);
        assert_eq!(load.utilization, 0.5);
        assert!(load.is_stable());
    }

    #[test]
    fn saturated_load_is_unstable() {
        let load = LoadState::from_parameters(&QueueParameters::mmc(4.0, 2.0, 2));
        assert!(!load.is_stable());
    }

    #[test]
    fn model_notation() {
        assert_eq!(Model::MM1.to_string(), "M/M/1");
        assert_eq!(Model::MMC.to_string(), "M/M/c");
    }

    #[test]
    fn model_serializes_as_notation() {
        let json = serde_json::to_string(&Model::MMC).expect("serialize");
        assert_eq!(json, "\"M/M/c\"");
    }

    #[test]
    fn error_kinds() {
        assert_eq!(
            QueueError::MissingParameter("lambda").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            QueueError::NonPositiveServiceRate(0.0).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            QueueError::InvalidServerCount(2.5).kind(),
            ErrorKind::InstabilityViolation
        );
        assert_eq!(
            QueueError::UnstableSingleServer {
                lambda: 3.0,
                mu: 3.0
            }
            .kind(),
            ErrorKind::InstabilityViolation
        );
    }

    #[test]
    fn not_a_number_is_invalid_input() {
        let err = QueueError::NotANumber {
            name: "lambda",
            input: "abc".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "Parameter lambda is not a number: \"abc\"");
    }

    #[test]
    fn unstable_error_names_condition() {
        let err = QueueError::UnstableMultiServer {
            lambda: 5.0,
            capacity: 4.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("λ < c·μ"));
        assert!(msg.contains("c·μ = 4"));
    }

    #[test]
    fn result_field_names() {
        let result = MetricsResult {
            model: Model::MM1,
            servers: 1,
            utilization: 0.5,
            l: 1.0,
            lq: 0.5,
            w: 1.0,
            wq: 0.5,
            p0: 0.5,
            pw: 0.5,
        };
        let json = serde_json::to_value(result).expect("serialize");
        for key in ["model", "c", "rho", "L", "Lq", "W", "Wq", "P0", "Pw"] {
            assert!(json.get(key).is_some(), "missing field {key}");
        }
        assert_eq!(json["model"], "M/M/1");
    }

    #[test]
    fn non_finite_field_detected() {
        let mut result = MetricsResult {
            model: Model::MM1,
            servers: 1,
            utilization: 0.5,
            l: 1.0,
            lq: 0.5,
            w: 1.0,
            wq: 0.5,
            p0: 0.5,
            pw: 0.5,
        };
        assert!(result.is_finite());
        result.wq = f64::INFINITY;
        assert!(!result.is_finite());
    }
}
