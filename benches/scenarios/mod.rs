//! Real-world scenario benchmarks.
//!
//! These model typical room-measurement stimuli from trimmed single sweeps
//! to long multi-repetition composites.

mod synthesis;

pub use synthesis::bench_synthesis;
