use std::f64::consts::PI;

use super::sample_count;

/*
Exponential Sine Sweep
======================

An exponential (logarithmic) sweep is a sine wave whose frequency rises by a
constant RATIO per unit of time rather than a constant number of Hz. Every
octave gets the same amount of time, so every octave gets the same energy.
That is what makes it the stimulus of choice for impulse-response measurement:
harmonic distortion products land at predictable negative delays after
deconvolution and can be windowed away.

Vocabulary
----------

  f_low, f_high   Band edges in Hz. The sweep starts at f_low and arrives at
                  f_high exactly at t = duration.

  duration        Sweep length in seconds (T).

  instantaneous   The frequency the sweep "is at" for one sample instant.
  frequency

  phase           Running integral of angular frequency (2π·f). The output
                  sample is sin(phase).


The Frequency Curve
-------------------

    f(t) = f_low · (f_high / f_low)^(t / T)

      f
  f_high ┤                         ╭
         │                      ╭──╯
         │                  ╭───╯
         │           ╭──────╯
   f_low ┤───────────╯
         └──────────────────────────→ t
         0                          T

On a log-frequency axis this is a straight line.


The Math: Frequency to Phase
----------------------------

Phase is the integral of 2π·f over time. We integrate the sampled curve with
the trapezoidal rule, one sample step (1/fs) at a time:

    phase[0] = 0
    phase[k] = phase[k-1] + 2π · (f[k] + f[k-1]) / (2 · fs)

Because f > 0 everywhere the phase is strictly increasing. Integrating the
sampled curve (instead of using the closed form) keeps the result consistent
with exactly the frequencies we sampled, and keeps the phase continuous.

Everything here works in f64: a ten second sweep to 24 kHz accumulates a
phase of several hundred thousand radians, far beyond what f32 can hold to
sub-sample precision.
*/

/// Sample instants `k / sample_rate` for `k` in `0..floor(sample_rate·duration)+1`.
pub fn time_vector(duration: f64, sample_rate: f64) -> Vec<f64> {
    let len = sample_count(duration, sample_rate) + 1;
    (0..len).map(|k| k as f64 / sample_rate).collect()
}

/// Geometric frequency ramp from `f_low` at t = 0 to `f_high` at t = `duration`.
pub fn instantaneous_frequency(times: &[f64], f_low: f64, f_high: f64, duration: f64) -> Vec<f64> {
    let ratio = f_high / f_low;
    times
        .iter()
        .map(|&t| f_low * ratio.powf(t / duration))
        .collect()
}

/// Trapezoidal integral of `2π·frequency`, starting at zero.
pub fn integrate_phase(frequency: &[f64], sample_rate: f64) -> Vec<f64> {
    let mut phase = Vec::with_capacity(frequency.len());
    if frequency.is_empty() {
        return phase;
    }

    let mut acc = 0.0;
    phase.push(acc);
    for pair in frequency.windows(2) {
        acc += 2.0 * PI * (pair[1] + pair[0]) / (2.0 * sample_rate);
        phase.push(acc);
    }
    phase
}

/// Convenience: instantaneous phase of an exponential sweep.
pub fn sweep_phase(f_low: f64, f_high: f64, duration: f64, sample_rate: f64) -> Vec<f64> {
    let times = time_vector(duration, sample_rate);
    let frequency = instantaneous_frequency(&times, f_low, f_high, duration);
    integrate_phase(&frequency, sample_rate)
}

/// Render `sin(phase)` for every phase value.
pub fn render(phase: &[f64]) -> Vec<f64> {
    phase.iter().map(|p| p.sin()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f64 = 1_000.0;

    #[test]
    fn time_vector_covers_both_ends() {
        let t = time_vector(0.5, SAMPLE_RATE);
        assert_eq!(t.len(), 501);
        assert_eq!(t[0], 0.0);
        assert!((t[500] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn frequency_hits_band_edges() {
        let t = time_vector(1.0, SAMPLE_RATE);
        let f = instantaneous_frequency(&t, 20.0, 400.0, 1.0);
        assert!((f[0] - 20.0).abs() < 1e-9);
        assert!((f[f.len() - 1] - 400.0).abs() < 1e-9);
        assert!(f.windows(2).all(|w| w[1] > w[0]), "frequency should rise");
    }

    #[test]
    fn frequency_is_geometric() {
        // Halfway through, the sweep sits at the geometric mean of the band
        let t = [0.5];
        let f = instantaneous_frequency(&t, 10.0, 1000.0, 1.0);
        assert!((f[0] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn phase_of_constant_frequency_is_linear() {
        let f = vec![50.0; 11];
        let phase = integrate_phase(&f, SAMPLE_RATE);
        assert_eq!(phase.len(), 11);
        assert_eq!(phase[0], 0.0);
        let step = 2.0 * PI * 50.0 / SAMPLE_RATE;
        for (k, p) in phase.iter().enumerate() {
            assert!((p - step * k as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn sweep_phase_strictly_increases() {
        let phase = sweep_phase(20.0, 400.0, 1.0, SAMPLE_RATE);
        assert!(phase.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn empty_frequency_gives_empty_phase() {
        assert!(integrate_phase(&[], SAMPLE_RATE).is_empty());
    }
}
