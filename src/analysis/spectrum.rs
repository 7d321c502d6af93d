//! One-sided magnitude spectrum of a finite signal.

use rustfft::{num_complex::Complex, FftPlanner};

/// Lowest level reported by [`Spectrum::log_log_points`], in dB.
pub const DB_FLOOR: f64 = -200.0;

/// Magnitude per FFT bin from DC up to Nyquist.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Bin centre frequencies in Hz.
    pub frequencies: Vec<f64>,
    /// Linear magnitudes `|X[k]|`.
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    /// `(log10(Hz), dB)` pairs for a log-log chart. DC is dropped.
    pub fn log_log_points(&self) -> Vec<(f64, f64)> {
        self.frequencies
            .iter()
            .zip(&self.magnitudes)
            .skip(1)
            .map(|(&f, &m)| {
                let db = if m > 0.0 { 20.0 * m.log10() } else { DB_FLOOR };
                (f.log10(), db.max(DB_FLOOR))
            })
            .collect()
    }

    /// Frequency of the loudest bin.
    pub fn peak_frequency(&self) -> Option<f64> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| self.frequencies[i])
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }
}

/// FFT the whole signal and keep bins `0..=N/2`.
pub fn magnitude_spectrum(samples: &[f64], sample_rate: f64) -> Spectrum {
    let n = samples.len();
    if n == 0 {
        return Spectrum {
            frequencies: Vec::new(),
            magnitudes: Vec::new(),
        };
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);

    let mut buffer: Vec<Complex<f64>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
    fft.process(&mut buffer);

    let bins = n / 2 + 1;
    let frequencies = (0..bins).map(|k| k as f64 * sample_rate / n as f64).collect();
    let magnitudes = buffer[..bins].iter().map(|c| c.norm()).collect();

    Spectrum {
        frequencies,
        magnitudes,
    }
}
