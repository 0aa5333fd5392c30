// -------------------------------------------------------------------------
// SCPN Plasma Source -- Sampler Benchmark
// Sampling pass vs full source build at several sample sizes, per-channel
// vs mixture emission.
// -------------------------------------------------------------------------

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use plasma_source::fuel::FuelComposition;
use plasma_source::reactivity::sadler_van_belle_dt;
use plasma_source::spectrum::tt_distribution;
use plasma_source::tokamak::TokamakSource;
use plasma_types::config::{EmissionMode, TokamakConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn make_source(sample_size: usize, emission: EmissionMode) -> TokamakSource {
    let mut cfg = TokamakConfig::iter_like();
    cfg.sampling.sample_size = sample_size;
    cfg.sampling.emission = emission;
    TokamakSource::from_config(&cfg).expect("ITER-like config is valid")
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokamak_sample_vs_build");

    for &n in &[1_000usize, 10_000usize] {
        let source = make_source(n, EmissionMode::PerChannel);

        group.bench_with_input(BenchmarkId::new("sample", n), &source, |b, src| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(src.sample(&mut rng).expect("sampling failed").len()))
        });

        group.bench_with_input(BenchmarkId::new("build_per_channel", n), &source, |b, src| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(src.build(&mut rng).expect("build failed").len()))
        });
    }

    let mixture = make_source(1_000, EmissionMode::Mixture);
    group.bench_function("build_mixture/1000", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(mixture.build(&mut rng).expect("build failed").len()))
    });

    group.finish();
}

fn bench_physics(c: &mut Criterion) {
    c.bench_function("sadler_van_belle_dt", |b| {
        b.iter(|| sadler_van_belle_dt(black_box(20.0)))
    });

    c.bench_function("tt_distribution_50", |b| {
        b.iter(|| tt_distribution(black_box(20.0), 50))
    });

    let fuel = FuelComposition::equimolar_dt();
    c.bench_function("fuel_reactions", |b| b.iter(|| black_box(fuel.reactions())));
}

criterion_group!(benches, bench_sampling, bench_physics);
criterion_main!(benches);
