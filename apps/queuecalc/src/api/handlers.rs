//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::types::{ComputeRequest, ComputeResponse, FormulaeResponse, HealthResponse};
use crate::presenter::parse_model;
use axum::{
    Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use queuecalc_core::{ErrorKind, Model, QueueError, compute};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// COMPUTE HANDLERS
// =============================================================================

/// Compute M/M/1 metrics.
pub async fn mm1_handler(
    request: Result<Json<ComputeRequest>, JsonRejection>,
) -> impl IntoResponse {
    match request {
        Ok(Json(request)) => run_compute(&request, Model::MM1),
        Err(rejection) => reject_body(&rejection, Model::MM1),
    }
}

/// Compute M/M/c metrics.
pub async fn mmc_handler(
    request: Result<Json<ComputeRequest>, JsonRejection>,
) -> impl IntoResponse {
    match request {
        Ok(Json(request)) => run_compute(&request, Model::MMC),
        Err(rejection) => reject_body(&rejection, Model::MMC),
    }
}

/// Status code for a rejected request.
///
/// Malformed input is a 400; a well-formed but unstable queue is a 422.
pub fn status_for(error: &QueueError) -> StatusCode {
    match error.kind() {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::InstabilityViolation => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn run_compute(request: &ComputeRequest, model: Model) -> (StatusCode, Json<ComputeResponse>) {
    let outcome = request
        .to_parameters(model)
        .and_then(|params| compute(&params, model));

    match outcome {
        Ok(result) => (StatusCode::OK, Json(ComputeResponse::success(result))),
        Err(e) => {
            tracing::info!(model = %model, error = %e, "Rejected compute request");
            (status_for(&e), Json(ComputeResponse::failure(&e)))
        }
    }
}

/// A body that is not a JSON `ComputeRequest` is invalid input, not a 422.
fn reject_body(rejection: &JsonRejection, model: Model) -> (StatusCode, Json<ComputeResponse>) {
    let status = match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::BAD_REQUEST,
    };
    let reason = rejection.body_text();
    tracing::info!(model = %model, error = %reason, "Rejected malformed compute request");
    (status, Json(ComputeResponse::invalid_body(reason)))
}

// =============================================================================
// FORMULAE HANDLER
// =============================================================================

/// Formula reference for `mm1` or `mmc`.
pub async fn formulae_handler(
    Path(model): Path<String>,
) -> Result<Json<FormulaeResponse>, (StatusCode, String)> {
    parse_model(&model)
        .map(|m| Json(FormulaeResponse::for_model(m)))
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Unknown model: {}", model)))
}
