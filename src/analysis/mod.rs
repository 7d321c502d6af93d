//! Signal views for plotting: time axis and magnitude spectrum.

pub mod spectrum;

pub use spectrum::{magnitude_spectrum, Spectrum};

/// Time in seconds of each of `len` samples.
pub fn time_axis(len: usize, sample_rate: f64) -> Vec<f64> {
    (0..len).map(|k| k as f64 / sample_rate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_axis_spacing() {
        let t = time_axis(5, 4.0);
        assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
