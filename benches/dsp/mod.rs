//! Benchmarks for individual pipeline stages.

mod chirp;
mod fade;

pub use chirp::bench_chirp;
pub use fade::bench_fade;
