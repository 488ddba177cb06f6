//! Criterion benchmarks for the packopt search drivers.
//!
//! Uses synthetic instances to measure pure search overhead: the
//! exhaustive-neighborhood hill climbing, single-sample SA, and the GA
//! loop scale very differently with item count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use packopt::ga::{GaConfig, GaRunner};
use packopt::hc::{HcConfig, HcRunner};
use packopt::ops::init;
use packopt::problem::{Instance, Item};
use packopt::random::create_rng;
use packopt::sa::{SaConfig, SaRunner};

fn synthetic_instance(n: usize) -> Instance {
    let items = (0..n)
        .map(|i| Item::new(format!("i{i}"), (i as u64 * 7 % 9) + 1))
        .collect();
    Instance::new(10, items)
}

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");
    for n in [8, 12, 16] {
        let instance = synthetic_instance(n);
        let mut rng = create_rng(42);
        let state = init::worst(&instance, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| packopt::ops::neighborhood::neighbors(black_box(&instance), &state));
        });
    }
    group.finish();
}

fn bench_steepest_ascent(c: &mut Criterion) {
    let instance = synthetic_instance(12);
    let mut rng = create_rng(42);
    let initial = init::worst(&instance, &mut rng);
    let config = HcConfig::default().with_max_iterations(50);

    c.bench_function("hc_steepest_12_items", |b| {
        b.iter(|| HcRunner::steepest_ascent(black_box(&instance), &initial, &config));
    });
}

fn bench_sa(c: &mut Criterion) {
    let instance = synthetic_instance(30);
    let mut rng = create_rng(42);
    let initial = init::worst(&instance, &mut rng);
    let config = SaConfig::default().with_max_iterations(2000).with_seed(42);

    c.bench_function("sa_30_items", |b| {
        b.iter(|| SaRunner::run(black_box(&instance), &initial, &config));
    });
}

fn bench_ga(c: &mut Criterion) {
    let instance = synthetic_instance(30);
    let config = GaConfig::default()
        .with_population_size(30)
        .with_generations(20)
        .with_seed(42);

    c.bench_function("ga_30_items", |b| {
        b.iter(|| GaRunner::run(black_box(&instance), &config));
    });
}

criterion_group!(
    benches,
    bench_neighbors,
    bench_steepest_ascent,
    bench_sa,
    bench_ga
);
criterion_main!(benches);
