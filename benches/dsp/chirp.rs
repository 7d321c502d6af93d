//! Benchmarks for phase integration and tail trimming.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use esweep::dsp::{chirp, trim};

use crate::SAMPLE_RATES;

pub fn bench_chirp(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/chirp");

    for &rate in SAMPLE_RATES {
        let label = rate as u32;

        // Frequency curve + trapezoidal integration - one powf per sample
        group.bench_with_input(BenchmarkId::new("phase", label), &rate, |b, &rate| {
            b.iter(|| chirp::sweep_phase(black_box(20.0), black_box(rate / 2.0), 1.0, rate))
        });

        // Reverse scan for the last wrapped-phase peak
        let phase = chirp::sweep_phase(20.0, rate / 2.0, 1.0, rate);
        group.bench_with_input(BenchmarkId::new("trim", label), &rate, |b, _| {
            b.iter(|| {
                let mut p = phase.clone();
                trim::trim_phase_tail(black_box(&mut p))
            })
        });

        // sin() over the whole phase
        group.bench_with_input(BenchmarkId::new("render", label), &rate, |b, _| {
            b.iter(|| chirp::render(black_box(&phase)))
        });
    }

    group.finish();
}
