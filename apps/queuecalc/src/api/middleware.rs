//! # Middleware Module
//!
//! Request rate limiting for the queuecalc HTTP API.
//!
//! The limit comes from `server.rate_limit` in [`crate::config::ServerConfig`]
//! (or `QUEUECALC_RATE_LIMIT`); 0 disables the limiter entirely.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Process-wide limiter shared by every route.
pub type GlobalRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Build a limiter allowing `requests_per_second`.
///
/// Returns `None` when the limit is 0.
pub fn create_rate_limiter(requests_per_second: u32) -> Option<GlobalRateLimiter> {
    let rps = NonZeroU32::new(requests_per_second)?;
    Some(Arc::new(RateLimiter::direct(Quota::per_second(rps))))
}

/// Reject with 429 once the shared quota is spent.
pub async fn rate_limit_middleware(
    State(limiter): State<GlobalRateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, &'static str)> {
    if limiter.check().is_ok() {
        return Ok(next.run(request).await);
    }
    tracing::warn!(path = %request.uri().path(), "Rate limit exceeded");
    Err((StatusCode::TOO_MANY_REQUESTS, "Too Many Requests"))
}

// =============================================================================
// TESTS
// =============================================================================
