//! # Erlang Benchmarks
//!
//! Performance benchmarks for the queueing engine.
//!
//! Run with: `cargo bench -p queuecalc-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use queuecalc_core::{QueueParameters, compute_mm1, compute_mmc, erlang_c};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_mm1(c: &mut Criterion) {
    c.bench_function("compute_mm1", |b| {
        b.iter(|| compute_mm1(black_box(2.0), black_box(3.0)))
    });
}

fn bench_erlang_c(c: &mut Criterion) {
    let mut group = c.benchmark_group("erlang_c");

    for servers in [1_u32, 10, 100, 1000, 10_000].iter() {
        let params = QueueParameters::mmc(f64::from(*servers) * 0.9, 1.0, *servers);
        group.bench_with_input(BenchmarkId::from_parameter(servers), &params, |b, params| {
            b.iter(|| erlang_c(black_box(params)))
        });
    }

    group.finish();
}

fn bench_compute_mmc(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_mmc");

    for servers in [2_u32, 50, 500].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(servers),
            servers,
            |b, &servers| {
                b.iter(|| compute_mmc(black_box(f64::from(servers) * 0.8), 1.0, servers))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_mm1, bench_erlang_c, bench_compute_mmc);
criterion_main!(benches);
