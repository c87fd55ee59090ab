//! # queuecalc HTTP API Module
//!
//! This module implements the HTTP JSON API using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /mm1` - M/M/1 metrics for `{ lambda, mu }`
//! - `POST /mmc` - M/M/c metrics for `{ lambda, mu, servers }`
//! - `GET /formulae/{model}` - Formula reference (`mm1` or `mmc`)
//!
//! ## Security Configuration
//!
//! - `server.cors_origins` / `QUEUECALC_CORS_ORIGINS`: comma-separated
//!   origins, or `*` for all (default: localhost only)
//! - `server.rate_limit` / `QUEUECALC_RATE_LIMIT`: requests per second
//!   (default: 100, 0 to disable)
//! - `QUEUECALC_API_KEY`: if set, requires Bearer token authentication

mod auth;
mod handlers;
mod middleware;
mod types;

pub use auth::{API_KEY_ENV, get_api_key_from_env, keys_match};
pub use handlers::{
    formulae_handler, health_handler, mm1_handler, mmc_handler, status_for,
};
pub use middleware::{GlobalRateLimiter, create_rate_limiter};
pub use types::{ComputeRequest, ComputeResponse, FormulaeResponse, HealthResponse, NumericInput};

use crate::config::ServerConfig;
use crate::error::AppError;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Request bodies are a handful of numbers.
const MAX_BODY_BYTES: usize = 16 * 1024;

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer from `server.cors_origins`.
///
/// - `*`: any origin
/// - unset: localhost only
/// - otherwise: the comma-separated list, falling back to localhost when
///   none of the entries parse
fn build_cors_layer(origins: Option<&str>) -> CorsLayer {
    match origins {
        Some("*") => {
            tracing::warn!("CORS: Allowing ALL origins. Do not use this in production");
            CorsLayer::permissive()
        }
        Some(list) => {
            let allowed: Vec<HeaderValue> = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|s| match s.parse::<HeaderValue>() {
                    Ok(hv) => {
                        tracing::info!("CORS: Allowing origin: {}", s);
                        Some(hv)
                    }
                    Err(e) => {
                        tracing::warn!("CORS: Invalid origin '{}': {}", s, e);
                        None
                    }
                })
                .collect();

            if allowed.is_empty() {
                tracing::warn!("CORS: No valid origins configured, defaulting to localhost only");
                build_localhost_cors()
            } else {
                restricted_cors(allowed)
            }
        }
        None => {
            tracing::info!("CORS: No origins configured, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

fn restricted_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Localhost on the usual dev ports.
fn build_localhost_cors() -> CorsLayer {
    let origins = [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect();

    restricted_cors(origins)
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate limiting - if enabled
/// 5. Authentication - if `QUEUECALC_API_KEY` is set
pub fn create_router(config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/mm1", post(handlers::mm1_handler))
        .route("/mmc", post(handlers::mmc_handler))
        .route("/formulae/{model}", get(handlers::formulae_handler));

    if get_api_key_from_env().is_some() {
        tracing::info!("API key authentication enabled");
        router = router.layer(axum_middleware::from_fn(auth::api_key_auth_middleware));
    } else {
        tracing::warn!(
            "API key authentication DISABLED - set {} to require a bearer token",
            API_KEY_ENV
        );
    }

    match create_rate_limiter(config.rate_limit) {
        Some(limiter) => {
            tracing::info!("Rate limiting enabled: {} requests/second", config.rate_limit);
            router = router.layer(axum_middleware::from_fn_with_state(
                limiter,
                middleware::rate_limit_middleware,
            ));
        }
        None => tracing::info!("Rate limiting disabled"),
    }

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(build_cors_layer(config.cors_origins.as_deref()))
            .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES)),
    )
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Bind and serve until the process is stopped.
pub async fn run_server(config: &ServerConfig) -> Result<(), AppError> {
    let router = create_router(config);
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Io(format!("Bind failed on {}: {}", addr, e)))?;

    tracing::info!("queuecalc HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Io(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
