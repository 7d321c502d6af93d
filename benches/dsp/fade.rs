//! Benchmarks for the Hann fade-out.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use esweep::dsp::window;

pub fn bench_fade(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/fade");
    let mut buffer = vec![0.5f64; 96_001];

    // 10 ms, 100 ms (default) and 500 ms fades at 96 kHz
    for &fade in &[960usize, 9_600, 48_000] {
        group.bench_with_input(BenchmarkId::new("apply", fade), &fade, |b, &fade| {
            b.iter(|| window::apply_fade_out(black_box(&mut buffer), fade, 96_001))
        });
    }

    group.finish();
}
