//! Mono WAV output for synthesized sweeps.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{SweepError, SweepResult};

/// Sample encoding of the written file.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WavFormat {
    /// 16-bit signed PCM.
    Int16,
    /// 24-bit signed PCM.
    #[default]
    Int24,
    /// 32-bit IEEE float.
    Float32,
}

impl WavFormat {
    fn spec(self, sample_rate: u32) -> WavSpec {
        let (bits_per_sample, sample_format) = match self {
            WavFormat::Int16 => (16, SampleFormat::Int),
            WavFormat::Int24 => (24, SampleFormat::Int),
            WavFormat::Float32 => (32, SampleFormat::Float),
        };
        WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample,
            sample_format,
        }
    }
}

/// Largest integer code for a signed PCM sample of `bits` bits.
fn full_scale(bits: u16) -> f64 {
    ((1_i64 << (bits - 1)) - 1) as f64
}

/// Scale a sample in [-1, 1] to an integer PCM code, clamping overs.
fn to_pcm(sample: f64, bits: u16) -> i32 {
    (sample.clamp(-1.0, 1.0) * full_scale(bits)).round() as i32
}

fn wav_sample_rate(sample_rate: f64) -> SweepResult<u32> {
    if sample_rate <= 0.0 || sample_rate.fract() != 0.0 || sample_rate > u32::MAX as f64 {
        return Err(SweepError::invalid_param(
            "sample_rate",
            format!("WAV files need a whole number of Hz, got {sample_rate}"),
        ));
    }
    Ok(sample_rate as u32)
}

/// Write `samples` as a mono WAV file at `path`.
pub fn write_wav(
    path: impl AsRef<Path>,
    samples: &[f64],
    sample_rate: f64,
    format: WavFormat,
) -> SweepResult<()> {
    let path = path.as_ref();
    let spec = format.spec(wav_sample_rate(sample_rate)?);
    let mut writer = WavWriter::create(path, spec)?;

    match format {
        WavFormat::Int16 => {
            for &s in samples {
                writer.write_sample(to_pcm(s, 16) as i16)?;
            }
        }
        WavFormat::Int24 => {
            for &s in samples {
                writer.write_sample(to_pcm(s, 24))?;
            }
        }
        WavFormat::Float32 => {
            for &s in samples {
                writer.write_sample(s as f32)?;
            }
        }
    }

    writer.finalize()?;
    log::info!(
        "wrote {} samples ({format:?}, {} Hz) to {}",
        samples.len(),
        spec.sample_rate,
        path.display()
    );
    Ok(())
}

/// Read a mono WAV file back as samples in [-1, 1] and its sample rate.
pub fn read_wav(path: impl AsRef<Path>) -> SweepResult<(Vec<f64>, u32)> {
    let mut reader = WavReader::open(path.as_ref())?;
    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(SweepError::invalid_param(
            "channels",
            format!("expected a mono file, found {} channels", spec.channels),
        ));
    }

    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let scale = full_scale(spec.bits_per_sample);
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    Ok((samples, spec.sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcm_scaling_clamps() {
        assert_eq!(to_pcm(1.0, 16), i16::MAX as i32);
        assert_eq!(to_pcm(-1.0, 16), -(i16::MAX as i32));
        assert_eq!(to_pcm(2.5, 16), i16::MAX as i32);
        assert_eq!(to_pcm(0.0, 24), 0);
        assert_eq!(to_pcm(1.0, 24), 8_388_607);
    }

    #[test]
    fn fractional_sample_rate_is_rejected() {
        assert!(wav_sample_rate(44_100.5).is_err());
        assert!(wav_sample_rate(0.0).is_err());
        assert_eq!(wav_sample_rate(48_000.0).unwrap(), 48_000);
    }

    #[test]
    fn float_file_keeps_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.wav");
        let samples = vec![0.0, 0.25, -0.5, 1.0];

        write_wav(&path, &samples, 8_000.0, WavFormat::Float32).unwrap();
        let (read, rate) = read_wav(&path).unwrap();

        assert_eq!(rate, 8_000);
        assert_eq!(read, samples);
    }

    #[test]
    fn integer_file_is_within_one_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep16.wav");
        let samples = vec![0.1, -0.3, 0.7];

        write_wav(&path, &samples, 8_000.0, WavFormat::Int16).unwrap();
        let (read, _) = read_wav(&path).unwrap();

        for (a, b) in samples.iter().zip(&read) {
            assert!((a - b).abs() <= 1.0 / full_scale(16));
        }
    }
}
