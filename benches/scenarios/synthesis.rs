//! Benchmarks for complete synthesis calls.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use esweep::{synthesize, SweepConfig};

use crate::SAMPLE_RATES;

pub fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/synthesis");
    group.sample_size(20);

    for &rate in SAMPLE_RATES {
        let label = rate as u32;

        // === SINGLE SWEEP ===
        // One second, full band, no repetitions
        let single = SweepConfig::new(1.0)
            .frequency_range(20.0, rate / 2.0)
            .sample_rate(rate);
        group.bench_with_input(BenchmarkId::new("single", label), &single, |b, config| {
            b.iter(|| synthesize(black_box(config)))
        });

        // === ROOM MEASUREMENT ===
        // Four 2 s sweeps with 2 s gaps - a typical averaging run
        let averaged = SweepConfig::new(2.0)
            .frequency_range(20.0, 20_000.0)
            .sample_rate(rate)
            .repetitions(4);
        group.bench_with_input(BenchmarkId::new("averaged", label), &averaged, |b, config| {
            b.iter(|| synthesize(black_box(config)))
        });
    }

    group.finish();
}
