//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use queuecalc_core::{
    ErrorKind, MetricsResult, Model, QueueError, QueueParameters, parse_number,
    primitives::DEFAULT_SERVERS, server_count_from_real,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// COMPUTE REQUEST
// =============================================================================

/// A number as sent by a form: either a JSON number or its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Resolve to an `f64`, parsing text if needed.
    pub fn resolve(&self, name: &'static str) -> Result<f64, QueueError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => parse_number(name, text),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Body of `POST /mm1` and `POST /mmc`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComputeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lambda: Option<NumericInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mu: Option<NumericInput>,
    /// Server count; defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<NumericInput>,
}

impl ComputeRequest {
    /// Request for an M/M/1 queue.
    pub fn mm1(lambda: f64, mu: f64) -> Self {
        Self {
            lambda: Some(lambda.into()),
            mu: Some(mu.into()),
            servers: None,
        }
    }

    /// Request for an M/M/c queue.
    pub fn mmc(lambda: f64, mu: f64, servers: f64) -> Self {
        Self {
            lambda: Some(lambda.into()),
            mu: Some(mu.into()),
            servers: Some(servers.into()),
        }
    }

    /// Convert to engine parameters, validating presence and shape.
    ///
    /// Stability itself is left to the engine. For `Model::MM1` a server
    /// count other than 1 is rejected.
    pub fn to_parameters(&self, model: Model) -> Result<QueueParameters, QueueError> {
        let lambda = required(self.lambda.as_ref(), "lambda")?;
        let mu = required(self.mu.as_ref(), "mu")?;

        let servers = match &self.servers {
            Some(input) => server_count_from_real(input.resolve("servers")?)?,
            None => DEFAULT_SERVERS,
        };

        match model {
            Model::MM1 if servers != 1 => Err(QueueError::InvalidServerCount(f64::from(servers))),
            Model::MM1 => Ok(QueueParameters::mm1(lambda, mu)),
            Model::MMC => Ok(QueueParameters::mmc(lambda, mu, servers)),
        }
    }
}

fn required(input: Option<&NumericInput>, name: &'static str) -> Result<f64, QueueError> {
    input
        .ok_or(QueueError::MissingParameter(name))?
        .resolve(name)
}

// =============================================================================
// COMPUTE RESPONSE
// =============================================================================

/// Result record returned by the compute endpoints and `--json-mode`.
///
/// `ok: true` carries `result`; `ok: false` carries `reason` and `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<MetricsResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

impl ComputeResponse {
    pub fn success(result: MetricsResult) -> Self {
        Self {
            ok: true,
            result: Some(result),
            reason: None,
            kind: None,
        }
    }

    pub fn failure(error: &QueueError) -> Self {
        Self {
            ok: false,
            result: None,
            reason: Some(error.to_string()),
            kind: Some(error.kind()),
        }
    }

    /// Failure for a request body that could not be read at all.
    pub fn invalid_body(reason: String) -> Self {
        Self {
            ok: false,
            result: None,
            reason: Some(reason),
            kind: Some(ErrorKind::InvalidInput),
        }
    }
}

impl From<Result<MetricsResult, QueueError>> for ComputeResponse {
    fn from(outcome: Result<MetricsResult, QueueError>) -> Self {
        match outcome {
            Ok(result) => Self::success(result),
            Err(e) => Self::failure(&e),
        }
    }
}

// =============================================================================
// FORMULAE RESPONSE
// =============================================================================

/// Formula reference for one model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaeResponse {
    pub model: Model,
    pub lines: Vec<String>,
}

impl FormulaeResponse {
    pub fn for_model(model: Model) -> Self {
        Self {
            model,
            lines: crate::presenter::formulae(model)
                .iter()
                .map(|l| (*l).to_string())
                .collect(),
        }
    }
}
