//! Phase-continuity trimming at the end of a sweep.
//!
//! The geometric sweep almost never ends exactly on a zero crossing. Cutting it
//! mid-cycle leaves a step in the waveform, heard as a click once the signal is
//! muted. We instead find the last point where `phase mod π` peaks (the sine is
//! about to cross zero) and force every later phase value to zero, so the
//! trailing samples are exactly `sin(0) = 0`.
//!
//! ```text
//!  phase mod π
//!   π ┤   ╱│   ╱│   ╱│  ╱
//!     │  ╱ │  ╱ │  ╱ │ ╱
//!     │ ╱  │ ╱  │ ╱  │╱        ← last peak = cutoff
//!   0 ┤╱   │╱   │╱   ╵──────   (phase forced to 0 after it)
//! ```

use std::f64::consts::PI;

use crate::error::{SweepError, SweepResult};

/// Index of the last local peak of `phase mod π`, if there is one.
///
/// A peak at `p` means the wrapped phase rose into `p` and falls right after
/// it. The search runs backwards from the tail.
pub fn find_phase_cutoff(phase: &[f64]) -> Option<usize> {
    if phase.len() < 3 {
        return None;
    }

    let wrapped = |k: usize| phase[k].rem_euclid(PI);
    (1..phase.len() - 1)
        .rev()
        .find(|&p| wrapped(p) - wrapped(p - 1) > 0.0 && wrapped(p + 1) - wrapped(p) < 0.0)
}

/// Zero every phase value after the last wrapped-phase peak.
///
/// Returns the cutoff index. Fails when the phase has no peak at all, which
/// happens when the sweep is too short to complete half a cycle of its lowest
/// frequency.
pub fn trim_phase_tail(phase: &mut [f64]) -> SweepResult<usize> {
    let cutoff = find_phase_cutoff(phase).ok_or(SweepError::NoPhaseCutoff { len: phase.len() })?;
    phase[cutoff + 1..].fill(0.0);
    log::debug!(
        "phase trimmed after sample {cutoff} ({} trailing samples zeroed)",
        phase.len() - cutoff - 1
    );
    Ok(cutoff)
}
