//! Error types for sweep synthesis and its output collaborators.

use thiserror::Error;

/// Result type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// Coarse classification of a [`SweepError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested configuration cannot be synthesized.
    Configuration,
    /// The synthesized signal has no usable phase cutoff.
    NumericDegeneracy,
    /// A buffer index or size fell outside its allowed range.
    AllocationBounds,
    /// Writing or reading an output file failed.
    Output,
}

/// Errors that can occur while synthesizing or writing a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Sample rate cannot represent the upper band edge.
    #[error(
        "sample rate {sample_rate} Hz is below the Nyquist rate {nyquist_rate} Hz \
         required for an upper frequency of {f_high} Hz"
    )]
    BelowNyquist {
        /// Requested sample rate.
        sample_rate: f64,
        /// Upper edge of the frequency range.
        f_high: f64,
        /// Minimum sample rate (2 × f_high).
        nyquist_rate: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Fade-out window does not fit inside the sweep.
    #[error("fade-out of {fade_samples} samples does not fit in a sweep of {sweep_samples} samples")]
    FadeTooLong {
        /// Samples covered by the fade-out.
        fade_samples: usize,
        /// Samples in the single sweep.
        sweep_samples: usize,
    },

    /// Wrapped phase never peaks, so the tail cannot be cut at a zero crossing.
    #[error("no phase cutoff found in {len} samples; the sweep is too short for its lowest frequency")]
    NoPhaseCutoff {
        /// Length of the phase sequence searched.
        len: usize,
    },

    /// A sweep copy would be written past the end of the composite buffer.
    #[error(
        "repetition {repetition} at offset {offset} needs {len} samples but the \
         composite buffer holds {capacity}"
    )]
    CopyOutOfRange {
        /// One-based repetition index.
        repetition: u32,
        /// First sample of the copy.
        offset: usize,
        /// Samples in the copy.
        len: usize,
        /// Composite buffer length.
        capacity: usize,
    },

    /// Composite buffer would exceed the allocation limit.
    #[error("composite buffer of {requested} samples exceeds the limit of {limit}")]
    BufferTooLarge {
        /// Requested buffer length.
        requested: f64,
        /// Maximum allowed length.
        limit: usize,
    },

    /// WAV encoding error.
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SweepError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SweepError::BelowNyquist { .. }
            | SweepError::InvalidParameter { .. }
            | SweepError::FadeTooLong { .. } => ErrorKind::Configuration,
            SweepError::NoPhaseCutoff { .. } => ErrorKind::NumericDegeneracy,
            SweepError::CopyOutOfRange { .. } | SweepError::BufferTooLarge { .. } => {
                ErrorKind::AllocationBounds
            }
            SweepError::Wav(_) | SweepError::Io(_) => ErrorKind::Output,
        }
    }
}
