//! Fade-out window for the sweep tail.

use std::f64::consts::PI;

use crate::error::{SweepError, SweepResult};

/// Symmetric Hann window of `len` points, zero at both ends.
pub fn hann(len: usize) -> Vec<f64> {
    if len == 1 {
        return vec![1.0];
    }
    let denom = len.saturating_sub(1) as f64;
    (0..len)
        .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f64 / denom).cos()))
        .collect()
}

/// Descending half of a Hann window of length `2 * fade_samples`.
///
/// Starts just below 1.0 and ends at exactly 0.0.
pub fn fade_out_curve(fade_samples: usize) -> Vec<f64> {
    let mut window = hann(2 * fade_samples);
    window.drain(..fade_samples);
    window
}

/// Taper `samples[end - fade_samples..end]` down to zero.
///
/// The last sample of the range is multiplied by exactly zero. A zero-length
/// fade leaves the signal untouched.
pub fn apply_fade_out(samples: &mut [f64], fade_samples: usize, end: usize) -> SweepResult<()> {
    if end > samples.len() {
        return Err(SweepError::invalid_param(
            "fade_end",
            format!("end index {end} is past the signal length {}", samples.len()),
        ));
    }
    if fade_samples >= end {
        return Err(SweepError::FadeTooLong {
            fade_samples,
            sweep_samples: end,
        });
    }
    if fade_samples == 0 {
        return Ok(());
    }

    let curve = fade_out_curve(fade_samples);
    for (sample, gain) in samples[end - fade_samples..end].iter_mut().zip(curve) {
        *sample *= gain;
    }
    log::debug!("faded out {fade_samples} samples ending at {end}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn hann_is_symmetric_bell() {
        let w = hann(9);
        assert_eq!(w[0], 0.0);
        assert!((w[4] - 1.0).abs() < 1e-12);
        for i in 0..9 {
            assert!((w[i] - w[8 - i]).abs() < 1e-12);
        }
    }

    #[test]
    fn fade_curve_descends_to_zero() {
        let curve = fade_out_curve(64);
        assert_eq!(curve.len(), 64);
        assert!(curve[0] > 0.99);
        assert!(curve.windows(2).all(|w| w[1] < w[0]));
        assert!(curve[63].abs() < 1e-15);
    }

    #[test]
    fn fade_touches_only_the_tail() {
        let mut samples = vec![1.0; 100];
        apply_fade_out(&mut samples, 10, 100).unwrap();

        assert!(samples[..90].iter().all(|&s| s == 1.0));
        assert!(samples[90..].windows(2).all(|w| w[1] < w[0]));
        assert!(samples[99].abs() < 1e-15);
    }

    #[test]
    fn fade_can_end_before_signal_end() {
        let mut samples = vec![1.0; 20];
        apply_fade_out(&mut samples, 4, 10).unwrap();
        assert!(samples[..6].iter().all(|&s| s == 1.0));
        assert!(samples[9].abs() < 1e-15);
        assert!(samples[10..].iter().all(|&s| s == 1.0));
    }

    #[test]
    fn zero_fade_is_identity() {
        let mut samples = vec![0.5; 8];
        apply_fade_out(&mut samples, 0, 8).unwrap();
        assert_eq!(samples, vec![0.5; 8]);
    }

    #[test]
    fn fade_longer_than_signal_fails() {
        let mut samples = vec![1.0; 8];
        let err = apply_fade_out(&mut samples, 8, 8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(apply_fade_out(&mut samples, 2, 9).is_err());
    }
}
