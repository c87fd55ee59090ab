//! # Calculator Module
//!
//! The entry points external collaborators use.
//!
//! Each operation validates its input, evaluates the Erlang-C state and
//! derives the waiting metrics. M/M/1 is the `c = 1` case of the same path;
//! only the model tag differs.

use crate::erlang::erlang_c;
use crate::metrics::waiting_metrics;
use crate::stability::{check_mm1, check_mmc};
use crate::types::{MetricsResult, Model, QueueError, QueueParameters};

/// Steady-state metrics of an M/M/1 queue.
pub fn compute_mm1(lambda: f64, mu: f64) -> Result<MetricsResult, QueueError> {
    check_mm1(lambda, mu)?;
    Ok(evaluate(&QueueParameters::mm1(lambda, mu), Model::MM1))
}

/// Steady-state metrics of an M/M/c queue.
pub fn compute_mmc(lambda: f64, mu: f64, servers: u32) -> Result<MetricsResult, QueueError> {
    check_mmc(lambda, mu, servers)?;
    Ok(evaluate(&QueueParameters::mmc(lambda, mu, servers), Model::MMC))
}

/// Compute metrics for prepared parameters under the given model tag.
///
/// `Model::MM1` additionally requires `params.servers == 1`.
pub fn compute(params: &QueueParameters, model: Model) -> Result<MetricsResult, QueueError> {
    match model {
        Model::MM1 if params.servers != 1 => Err(QueueError::InvalidServerCount(f64::from(
            params.servers,
        ))),
        Model::MM1 => compute_mm1(params.arrival_rate, params.service_rate),
        Model::MMC => compute_mmc(params.arrival_rate, params.service_rate, params.servers),
    }
}

/// Shared path for already-validated parameters.
fn evaluate(params: &QueueParameters, model: Model) -> MetricsResult {
    let erlang = erlang_c(params);
    let metrics = waiting_metrics(params, &erlang);

    tracing::debug!(
        model = %model,
        servers = params.servers,
        rho = erlang.load.utilization,
        pw = erlang.probabilities.pw,
        "Computed queue metrics"
    );

    MetricsResult::assemble(model, params.servers, &erlang, &metrics)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;

    #[test]
    fn mm1_scenario() {
        let r = compute_mm1(2.0, 3.0).expect("stable");
        assert_eq!(r.model, Model::MM1);
        assert_eq!(r.servers, 1);
        assert!((r.utilization - 2.0 / 3.0).abs() < 1e-12);
        assert!((r.l - 2.0).abs() < 1e-12);
        assert!((r.wq - 2.0 / 3.0).abs() < 1e-12);
        assert!((r.p0 - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn mmc_scenario() {
        let r = compute_mmc(2.0, 2.0, 2).expect("stable");
        assert_eq!(r.model, Model::MMC);
        assert_eq!(r.servers, 2);
        assert!((r.utilization - 0.5).abs() < 1e-12);
        assert!(r.p0 > 0.0 && r.p0 < 1.0);
        assert!(r.pw >= 0.0 && r.pw < 1.0);
    }

    #[test]
    fn mm1_rejects_equal_rates() {
        let err = compute_mm1(3.0, 3.0).expect_err("unstable");
        assert_eq!(err.kind(), ErrorKind::InstabilityViolation);
    }

    #[test]
    fn mmc_rejects_overload() {
        let err = compute_mmc(5.0, 2.0, 2).expect_err("unstable");
        assert!(matches!(err, QueueError::UnstableMultiServer { .. }));
    }

    #[test]
    fn mmc_with_one_server_matches_mm1() {
        let a = compute_mm1(1.7, 2.3).expect("stable");
        let b = compute_mmc(1.7, 2.3, 1).expect("stable");
        assert_eq!(b.model, Model::MMC);
        assert!((a.l - b.l).abs() < 1e-12);
        assert!((a.wq - b.wq).abs() < 1e-12);
        assert!((a.p0 - b.p0).abs() < 1e-12);
        assert!((a.pw - b.pw).abs() < 1e-12);
    }

    #[test]
    fn compute_dispatches_by_model() {
        let params = QueueParameters::mmc(3.0, 2.0, 2);
        let r = compute(&params, Model::MMC).expect("stable");
        assert_eq!(r.servers, 2);

        let err = compute(&params, Model::MM1).expect_err("mm1 needs one server");
        assert!(matches!(err, QueueError::InvalidServerCount(_)));

        let r = compute(&QueueParameters::mm1(1.0, 2.0), Model::MM1).expect("stable");
        assert_eq!(r.model, Model::MM1);
    }

    #[test]
    fn invalid_input_is_reported_before_stability() {
        let err = compute_mm1(f64::NAN, 1.0).expect_err("nan");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
