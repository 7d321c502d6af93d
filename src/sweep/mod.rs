//! Exponential sweep synthesis pipeline.
//!
//! `SweepConfig` → frequency curve → phase → tail trim → fade-out → tiling.
//! Every call is a pure function of its configuration: same input, same bits.

/// Sweep parameters, defaults and validation.
pub mod config;
/// Placement of sweep copies into the composite signal.
pub mod tiler;

pub use config::{FrequencyRange, ResolvedSweep, SweepConfig};
pub use tiler::Tiling;

use crate::dsp::{chirp, trim, window};
use crate::error::SweepResult;

/// Output of one synthesis call.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    /// All repetitions laid out with silence between them.
    pub composite: Vec<f64>,
    /// One trimmed and faded sweep.
    pub single: Vec<f64>,
    /// Repetitions actually placed (echoes the resolved default).
    pub repetition_count: u32,
    /// Silence between copies in seconds (echoes the resolved default).
    pub inter_sweep_interval: f64,
    /// Sample rate of both signals in Hz.
    pub sample_rate: f64,
    /// First sample of each copy inside `composite`.
    pub offsets: Vec<usize>,
}

/// Resolve `config` and synthesize the single and composite sweeps.
pub fn synthesize(config: &SweepConfig) -> SweepResult<Synthesis> {
    let sweep = config.resolve()?;
    synthesize_resolved(&sweep)
}

/// Synthesize from an already validated request.
pub fn synthesize_resolved(sweep: &ResolvedSweep) -> SweepResult<Synthesis> {
    // A hand-built request skips resolve(), so bound it before the single sweep
    tiler::composite_len(sweep)?;
    let single = single_sweep(sweep)?;
    let Tiling { samples, offsets } = tiler::tile(&single, sweep)?;

    log::info!(
        "synthesized {:.3} s sweep {}-{} Hz at {} Hz: {} x {} samples in {} samples",
        sweep.sweep_duration,
        sweep.frequency_range.low,
        sweep.frequency_range.high,
        sweep.sample_rate,
        sweep.repetition_count,
        single.len(),
        samples.len()
    );

    Ok(Synthesis {
        composite: samples,
        single,
        repetition_count: sweep.repetition_count,
        inter_sweep_interval: sweep.inter_sweep_interval,
        sample_rate: sweep.sample_rate,
        offsets,
    })
}

/// One sweep: integrated phase, trimmed at the last zero crossing, faded out.
pub fn single_sweep(sweep: &ResolvedSweep) -> SweepResult<Vec<f64>> {
    let range = sweep.frequency_range;
    let mut phase = chirp::sweep_phase(
        range.low,
        range.high,
        sweep.sweep_duration,
        sweep.sample_rate,
    );
    trim::trim_phase_tail(&mut phase)?;

    let mut samples = chirp::render(&phase);
    window::apply_fade_out(&mut samples, sweep.fade_samples(), sweep.sweep_samples())?;
    Ok(samples)
}
