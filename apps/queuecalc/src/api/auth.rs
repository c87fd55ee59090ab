//! # Authentication Module
//!
//! Optional bearer-token authentication for the queuecalc HTTP API.
//!
//! ## Configuration
//!
//! - `QUEUECALC_API_KEY`: if set and non-empty, every route except `/health`
//!   requires `Authorization: Bearer <key>`. A bare key without the `Bearer`
//!   scheme is rejected.
//!
//! The key is read from the environment only; it never lives in the config
//! file.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "QUEUECALC_API_KEY";

/// Get the API key from the environment, `None` when unset or empty.
pub fn get_api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())
}

/// Compare two keys in time independent of where they differ.
///
/// Both sides are padded to the same length before `ct_eq`, so the length
/// of the expected key is not observable either.
pub fn keys_match(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();

    let len = provided.len().max(expected.len());
    let mut lhs = vec![0u8; len];
    let mut rhs = vec![0u8; len];
    lhs[..provided.len()].copy_from_slice(provided);
    rhs[..expected.len()].copy_from_slice(expected);

    let same_bytes: bool = lhs.ct_eq(&rhs).into();
    same_bytes && provided.len() == expected.len()
}

/// Reject requests without the configured bearer token.
pub async fn api_key_auth_middleware(
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, &'static str)> {
    let Some(expected) = get_api_key_from_env() else {
        return Ok(next.run(request).await);
    };

    if request.uri().path() == "/health" {
        return Ok(next.run(request).await);
    }

    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.strip_prefix("Bearer "));

    match provided {
        Some(Some(key)) if keys_match(key, &expected) => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!(
                event = "auth_failure",
                reason = "invalid_api_key",
                "Authentication failed: invalid API key"
            );
            Err((StatusCode::UNAUTHORIZED, "Unauthorized"))
        }
        None => {
            tracing::warn!(
                event = "auth_failure",
                reason = "missing_authorization_header",
                "Missing Authorization header"
            );
            Err((StatusCode::UNAUTHORIZED, "Unauthorized"))
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
    fn identical_keys_match() {
        assert!(keys_match("s3cret", "s3cret"));
    }

    #[test]
    fn different_keys_do_not_match() {
        assert!(!keys_match("s3cret", "s3creT"));
        assert!(!keys_match("", "s3cret"));
    }

    #[test]
    fn prefix_is_not_a_match() {
        // Zero padding must not let a prefix pass.
        assert!(!keys_match("s3c", "s3c\0"));
        assert!(!keys_match("s3cret", "s3cretextra"));
    }
}
