//! Repetition tiling of the single sweep into the composite signal.
//!
//! ```text
//!   lag   sweep 1    interval    sweep 2    interval/2
//!  |---|==========|-----------|==========|-----|
//!  0   ^offset 1              ^offset 2        ^len
//! ```
//!
//! The first copy starts after half an interval of silence, so every copy sits
//! in the middle of its own `sweep_duration + interval` slot.

use super::config::ResolvedSweep;
use crate::dsp::sample_count;
use crate::error::{SweepError, SweepResult};
use crate::MAX_COMPOSITE_SAMPLES;

/// Composite buffer with the sample offset of every placed copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Tiling {
    pub samples: Vec<f64>,
    pub offsets: Vec<usize>,
}

/// Composite length, `floor(period · repetitions · sample_rate) + 1`.
///
/// Checked against [`MAX_COMPOSITE_SAMPLES`] before anything is allocated.
pub fn composite_len(sweep: &ResolvedSweep) -> SweepResult<usize> {
    let requested = sweep.composite_duration() * sweep.sample_rate + 1.0;
    if !requested.is_finite() || requested > MAX_COMPOSITE_SAMPLES as f64 {
        return Err(SweepError::BufferTooLarge {
            requested,
            limit: MAX_COMPOSITE_SAMPLES,
        });
    }
    Ok(sample_count(sweep.composite_duration(), sweep.sample_rate) + 1)
}

/// First sample of each repetition, in order.
pub fn placement_offsets(sweep: &ResolvedSweep) -> Vec<usize> {
    (0..sweep.repetition_count)
        .map(|i| {
            let start = sweep.initial_lag() + sweep.period() * i as f64;
            sample_count(start, sweep.sample_rate)
        })
        .collect()
}

/// Write `repetition_count` copies of `single` into a zeroed composite buffer.
///
/// A copy that would run past the end of the buffer is an error; nothing is
/// clipped.
pub fn tile(single: &[f64], sweep: &ResolvedSweep) -> SweepResult<Tiling> {
    let capacity = composite_len(sweep)?;
    let offsets = placement_offsets(sweep);

    for (i, &offset) in offsets.iter().enumerate() {
        if offset + single.len() > capacity {
            return Err(SweepError::CopyOutOfRange {
                repetition: i as u32 + 1,
                offset,
                len: single.len(),
                capacity,
            });
        }
    }

    let mut samples = vec![0.0; capacity];
    for &offset in &offsets {
        samples[offset..offset + single.len()].copy_from_slice(single);
    }

    log::debug!(
        "tiled {} copies of {} samples into {capacity} samples at {offsets:?}",
        offsets.len(),
        single.len()
    );
    Ok(Tiling { samples, offsets })
}
