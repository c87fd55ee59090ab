//! # Stability Module
//!
//! Well-posedness checks run before any metric is computed.
//!
//! A birth–death queue has a steady state only when arrivals are slower than
//! the total service capacity: λ < μ for M/M/1 and λ < c·μ for M/M/c.
//! The `check_*` functions report which condition failed; the `stable_*`
//! predicates are their boolean form.

use crate::primitives::MAX_SERVERS;
use crate::types::QueueError;

/// Reject NaN and infinities.
fn require_finite(name: &'static str, value: f64) -> Result<f64, QueueError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QueueError::NonFinite { name, value })
    }
}

/// Read a parameter supplied as text.
///
/// Surrounding whitespace is ignored. Blank input counts as missing.
/// "inf" and "NaN" parse but are refused as `NonFinite`.
pub fn parse_number(name: &'static str, input: &str) -> Result<f64, QueueError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QueueError::MissingParameter(name));
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| QueueError::NotANumber {
            name,
            input: input.to_string(),
        })?;
    require_finite(name, value)
}

/// Validate the rate pair shared by both models: λ ≥ 0 and μ > 0.
pub fn check_rates(lambda: f64, mu: f64) -> Result<(), QueueError> {
    let lambda = require_finite("lambda", lambda)?;
    let mu = require_finite("mu", mu)?;

    if mu <= 0.0 {
        return Err(QueueError::NonPositiveServiceRate(mu));
    }
    if lambda < 0.0 {
        return Err(QueueError::NegativeArrivalRate(lambda));
    }
    Ok(())
}

/// Validate an M/M/1 queue.
pub fn check_mm1(lambda: f64, mu: f64) -> Result<(), QueueError> {
    check_rates(lambda, mu)?;
    if lambda >= mu {
        return Err(QueueError::UnstableSingleServer { lambda, mu });
    }
    Ok(())
}

/// Validate an M/M/c queue.
pub fn check_mmc(lambda: f64, mu: f64, servers: u32) -> Result<(), QueueError> {
    check_rates(lambda, mu)?;
    if servers == 0 {
        return Err(QueueError::InvalidServerCount(0.0));
    }
    if servers > MAX_SERVERS {
        return Err(QueueError::TooManyServers {
            requested: f64::from(servers),
            max: MAX_SERVERS,
        });
    }

    let capacity = f64::from(servers) * mu;
    if lambda >= capacity {
        return Err(QueueError::UnstableMultiServer { lambda, capacity });
    }
    Ok(())
}

/// True iff μ > 0, λ ≥ 0 and λ < μ.
#[must_use]
pub fn stable_mm1(lambda: f64, mu: f64) -> bool {
    check_mm1(lambda, mu).is_ok()
}

/// True iff μ > 0, λ ≥ 0, 1 ≤ c ≤ `MAX_SERVERS` and λ < c·μ.
#[must_use]
pub fn stable_mmc(lambda: f64, mu: f64, servers: u32) -> bool {
    check_mmc(lambda, mu, servers).is_ok()
}

/// Convert a caller-supplied real into a server count.
///
/// Boundaries that receive `c` as an untyped number (JSON, CLI text) use this
/// so that `2.5`, `0`, `-1` and `NaN` all fail the same way.
pub fn server_count_from_real(servers: f64) -> Result<u32, QueueError> {
    if !servers.is_finite() || servers.fract() != 0.0 || servers < 1.0 {
        return Err(QueueError::InvalidServerCount(servers));
    }
    if servers > f64::from(MAX_SERVERS) {
        return Err(QueueError::TooManyServers {
            requested: servers,
            max: MAX_SERVERS,
        });
    }
    Ok(servers as u32)
}

// =============================================================================
// TESTS
// =============================================================================
