//! # Property-Based Tests
//!
//! Queueing identities that must hold for every stable input.

use proptest::prelude::*;
use queuecalc_core::{compute_mm1, compute_mmc, stable_mm1, stable_mmc};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Service rates spanning several orders of magnitude.
fn service_rate() -> impl Strategy<Value = f64> {
    0.01f64..1000.0
}

/// Utilization strictly inside (0, 1).
fn utilization() -> impl Strategy<Value = f64> {
    0.001f64..0.999
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// M/M/1 closed forms: ρ = λ/μ, P0 = 1 - ρ, Pw = ρ and the classical
    /// L, Lq, W, Wq.
    #[test]
    fn mm1_matches_closed_forms(mu in service_rate(), rho in utilization()) {
        let lambda = rho * mu;
        prop_assume!(lambda < mu);
        let r = compute_mm1(lambda, mu).expect("stable");
        let rho = lambda / mu;

        prop_assert!(close(r.utilization, rho));
        prop_assert!(close(r.p0, 1.0 - rho));
        prop_assert!(close(r.pw, rho));
        prop_assert!(close(r.l, rho / (1.0 - rho)));
        prop_assert!(close(r.lq, rho * rho / (1.0 - rho)));
        prop_assert!(close(r.w, 1.0 / (mu - lambda)));
        prop_assert!(close(r.wq, rho / (mu - lambda)));
    }

    /// Little's law holds for every valid result.
    #[test]
    fn littles_law(mu in service_rate(), rho in utilization(), servers in 1u32..300) {
        let lambda = rho * f64::from(servers) * mu;
        prop_assume!(stable_mmc(lambda, mu, servers));
        let r = compute_mmc(lambda, mu, servers).expect("stable");

        prop_assert!(close(r.l, lambda * r.w));
        prop_assert!(close(r.lq, lambda * r.wq));
        prop_assert!(close(r.w, r.wq + 1.0 / mu));
    }

    /// The one-server M/M/c computation is the M/M/1 computation.
    #[test]
    fn single_server_mmc_equals_mm1(mu in service_rate(), rho in utilization()) {
        let lambda = rho * mu;
        prop_assume!(stable_mm1(lambda, mu));
        let a = compute_mm1(lambda, mu).expect("stable");
        let b = compute_mmc(lambda, mu, 1).expect("stable");

        prop_assert_eq!(a.servers, b.servers);
        prop_assert!(close(a.utilization, b.utilization));
        prop_assert!(close(a.p0, b.p0));
        prop_assert!(close(a.pw, b.pw));
        prop_assert!(close(a.l, b.l));
        prop_assert!(close(a.lq, b.lq));
        prop_assert!(close(a.w, b.w));
        prop_assert!(close(a.wq, b.wq));
    }

    /// Raising λ toward c·μ strictly raises ρ, Pw, Wq, W, Lq and L.
    #[test]
    fn metrics_increase_with_arrival_rate(
        mu in 0.1f64..100.0,
        servers in 1u32..100,
        lo in 0.05f64..0.9,
        step in 0.01f64..0.09,
    ) {
        let capacity = f64::from(servers) * mu;
        let a = compute_mmc(lo * capacity, mu, servers).expect("stable");
        let b = compute_mmc((lo + step) * capacity, mu, servers).expect("stable");

        prop_assert!(b.utilization > a.utilization);
        prop_assert!(b.pw > a.pw);
        prop_assert!(b.wq > a.wq);
        prop_assert!(b.w > a.w);
        prop_assert!(b.lq > a.lq);
        prop_assert!(b.l > a.l);
    }

    /// 0 < P0 < 1 and 0 ≤ Pw < 1 whenever λ > 0.
    #[test]
    fn probabilities_in_bounds(
        mu in service_rate(),
        rho in 0.001f64..0.95,
        servers in 1u32..200,
    ) {
        let lambda = rho * f64::from(servers) * mu;
        prop_assume!(stable_mmc(lambda, mu, servers));
        let r = compute_mmc(lambda, mu, servers).expect("stable");

        prop_assert!(r.p0 > 0.0 && r.p0 < 1.0, "p0 = {}", r.p0);
        prop_assert!(r.pw >= 0.0 && r.pw < 1.0, "pw = {}", r.pw);
        prop_assert!(r.is_finite());
    }

    /// Arrival rates at or above capacity are always rejected.
    #[test]
    fn overload_rejected(mu in service_rate(), excess in 1.0f64..10.0, servers in 1u32..50) {
        let lambda = excess * f64::from(servers) * mu;
        prop_assert!(compute_mmc(lambda, mu, servers).is_err());
        if servers == 1 {
            prop_assert!(compute_mm1(lambda, mu).is_err());
        }
    }

    /// Same input produces a bit-identical result.
    #[test]
    fn determinism(mu in service_rate(), rho in utilization(), servers in 1u32..500) {
        let lambda = rho * f64::from(servers) * mu;
        prop_assume!(stable_mmc(lambda, mu, servers));

        let first = compute_mmc(lambda, mu, servers).expect("stable");
        let second = compute_mmc(lambda, mu, servers).expect("stable");
        prop_assert_eq!(first, second);
    }

    /// Large server counts never produce NaN or infinity for P0 and Pw.
    #[test]
    fn large_server_counts_stay_finite(servers in 100u32..2000, rho in 0.5f64..0.999) {
        let lambda = rho * f64::from(servers);
        prop_assume!(stable_mmc(lambda, 1.0, servers));
        let r = compute_mmc(lambda, 1.0, servers).expect("stable");

        prop_assert!(r.p0.is_finite());
        prop_assert!(r.pw.is_finite());
        prop_assert!(r.wq.is_finite() && r.l.is_finite());
    }
}
