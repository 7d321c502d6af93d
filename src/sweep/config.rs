#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::{sample_count, sample_count_ceil};
use crate::error::{SweepError, SweepResult};

/// Default fade-out length in seconds.
pub const DEFAULT_FADE_OUT_TIME: f64 = 0.1;
/// Default sweep band: 20 Hz to 24 kHz.
pub const DEFAULT_FREQUENCY_RANGE: FrequencyRange = FrequencyRange {
    low: 20.0,
    high: 24_000.0,
};
/// Default number of sweep copies in the composite signal.
pub const DEFAULT_REPETITIONS: u32 = 1;

/// Frequency band of the sweep in Hz.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyRange {
    /// Start frequency.
    pub low: f64,
    /// End frequency.
    pub high: f64,
}

impl FrequencyRange {
    /// Band from `low` to `high` Hz; checked by [`SweepConfig::resolve`].
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Lowest sample rate that can represent `high`.
    pub fn nyquist_rate(&self) -> f64 {
        2.0 * self.high
    }
}

impl Default for FrequencyRange {
    fn default() -> Self {
        DEFAULT_FREQUENCY_RANGE
    }
}

/// Sweep request. Unset fields fall back to documented defaults when resolved.
///
/// ```
/// use esweep::sweep::SweepConfig;
///
/// let resolved = SweepConfig::new(2.0)
///     .frequency_range(20.0, 20_000.0)
///     .sample_rate(48_000.0)
///     .repetitions(3)
///     .resolve()
///     .unwrap();
/// assert_eq!(resolved.inter_sweep_interval, 2.0); // defaults to the sweep duration
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Sweep length in seconds.
    pub sweep_duration: f64,
    /// Fade-out length in seconds (default 0.1).
    pub fade_out_time: Option<f64>,
    /// Sweep band (default 20 Hz to 24 kHz).
    pub frequency_range: Option<FrequencyRange>,
    /// Sample rate in Hz (default twice the upper band edge).
    pub sample_rate: Option<f64>,
    /// Number of sweep copies (default 1).
    pub repetition_count: Option<u32>,
    /// Silence between copies in seconds (default `sweep_duration`).
    pub inter_sweep_interval: Option<f64>,
}

impl SweepConfig {
    /// Sweep of `sweep_duration` seconds with every other field defaulted.
    pub fn new(sweep_duration: f64) -> Self {
        Self {
            sweep_duration,
            fade_out_time: None,
            frequency_range: None,
            sample_rate: None,
            repetition_count: None,
            inter_sweep_interval: None,
        }
    }

    /// Fade-out length in seconds.
    pub fn fade_out_time(mut self, seconds: f64) -> Self {
        self.fade_out_time = Some(seconds);
        self
    }

    /// Sweep band in Hz.
    pub fn frequency_range(mut self, low: f64, high: f64) -> Self {
        self.frequency_range = Some(FrequencyRange::new(low, high));
        self
    }

    /// Sample rate in Hz.
    pub fn sample_rate(mut self, hz: f64) -> Self {
        self.sample_rate = Some(hz);
        self
    }

    /// Number of sweep copies in the composite.
    pub fn repetitions(mut self, count: u32) -> Self {
        self.repetition_count = Some(count);
        self
    }

    /// Silence between copies in seconds.
    pub fn inter_sweep_interval(mut self, seconds: f64) -> Self {
        self.inter_sweep_interval = Some(seconds);
        self
    }

    /// Substitute defaults and validate every parameter.
    pub fn resolve(&self) -> SweepResult<ResolvedSweep> {
        let sweep_duration = self.sweep_duration;
        require_finite("sweep_duration", sweep_duration)?;
        if sweep_duration <= 0.0 {
            return Err(SweepError::invalid_param(
                "sweep_duration",
                format!("must be positive, got {sweep_duration}"),
            ));
        }

        let fade_out_time = self.fade_out_time.unwrap_or(DEFAULT_FADE_OUT_TIME);
        require_finite("fade_out_time", fade_out_time)?;
        if fade_out_time < 0.0 {
            return Err(SweepError::invalid_param(
                "fade_out_time",
                format!("must not be negative, got {fade_out_time}"),
            ));
        }

        let range = self.frequency_range.unwrap_or_default();
        require_finite("frequency_range.low", range.low)?;
        require_finite("frequency_range.high", range.high)?;
        if range.low <= 0.0 || range.low >= range.high {
            return Err(SweepError::invalid_param(
                "frequency_range",
                format!("need 0 < low < high, got {} to {}", range.low, range.high),
            ));
        }

        let sample_rate = self.sample_rate.unwrap_or_else(|| range.nyquist_rate());
        require_finite("sample_rate", sample_rate)?;
        if sample_rate < range.nyquist_rate() {
            return Err(SweepError::BelowNyquist {
                sample_rate,
                f_high: range.high,
                nyquist_rate: range.nyquist_rate(),
            });
        }

        let repetition_count = self.repetition_count.unwrap_or(DEFAULT_REPETITIONS);
        if repetition_count == 0 {
            return Err(SweepError::invalid_param(
                "repetition_count",
                "at least one repetition is required",
            ));
        }

        let inter_sweep_interval = self.inter_sweep_interval.unwrap_or(sweep_duration);
        require_finite("inter_sweep_interval", inter_sweep_interval)?;
        if inter_sweep_interval < 0.0 {
            return Err(SweepError::invalid_param(
                "inter_sweep_interval",
                format!("must not be negative, got {inter_sweep_interval}"),
            ));
        }

        let resolved = ResolvedSweep {
            sweep_duration,
            fade_out_time,
            frequency_range: range,
            sample_rate,
            repetition_count,
            inter_sweep_interval,
        };

        // Bounds every buffer synthesis allocates, the single sweep included
        super::tiler::composite_len(&resolved)?;

        let fade_samples = resolved.fade_samples();
        let sweep_samples = resolved.sweep_samples();
        if fade_samples >= sweep_samples {
            return Err(SweepError::FadeTooLong {
                fade_samples,
                sweep_samples,
            });
        }
        if fade_samples > sweep_samples / 2 {
            log::warn!(
                "fade-out covers {fade_samples} of {sweep_samples} sweep samples; \
                 most of the sweep will be attenuated"
            );
        }

        Ok(resolved)
    }
}

fn require_finite(name: &str, value: f64) -> SweepResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SweepError::invalid_param(name, format!("must be finite, got {value}")))
    }
}

/// A validated sweep request with every default filled in.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSweep {
    pub sweep_duration: f64,
    pub fade_out_time: f64,
    pub frequency_range: FrequencyRange,
    pub sample_rate: f64,
    pub repetition_count: u32,
    pub inter_sweep_interval: f64,
}

impl ResolvedSweep {
    /// Samples in one sweep: `floor(sample_rate · sweep_duration) + 1`.
    pub fn sweep_samples(&self) -> usize {
        sample_count(self.sweep_duration, self.sample_rate).saturating_add(1)
    }

    /// Samples covered by the fade-out: `ceil(fade_out_time · sample_rate)`.
    pub fn fade_samples(&self) -> usize {
        sample_count_ceil(self.fade_out_time, self.sample_rate)
    }

    /// Time from the start of one copy to the start of the next.
    pub fn period(&self) -> f64 {
        self.sweep_duration + self.inter_sweep_interval
    }

    /// Silence before the first copy: half the inter-sweep interval.
    pub fn initial_lag(&self) -> f64 {
        self.inter_sweep_interval / 2.0
    }

    /// Total composite duration in seconds, excluding the trailing sample.
    pub fn composite_duration(&self) -> f64 {
        self.period() * self.repetition_count as f64
    }
}
