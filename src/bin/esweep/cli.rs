//! CLI argument definitions for esweep.
//!
//! All `#[derive(Parser)]` types live here, keeping `main.rs` focused on
//! startup and `app.rs` on dispatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use esweep::{io::WavFormat, sweep::config::DEFAULT_FREQUENCY_RANGE, SweepConfig};

/// esweep - exponential sine-sweep generator for impulse-response measurement
#[derive(Parser)]
#[command(name = "esweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Log per-stage synthesis details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Synthesize a sweep and write it to a WAV file
    Generate {
        #[command(flatten)]
        sweep: SweepArgs,

        /// Output WAV path for the composite signal
        #[arg(short, long, default_value = "sweep.wav")]
        output: PathBuf,

        /// Also write the single sweep to this path
        #[arg(long)]
        single_output: Option<PathBuf>,

        /// Sample encoding of the written files
        #[arg(long, value_enum, default_value_t = FormatArg::Int24)]
        format: FormatArg,
    },

    /// Show the composite waveform and the sweep spectrum in the terminal
    Plot {
        #[command(flatten)]
        sweep: SweepArgs,
    },

    /// Play the composite signal on the default output device
    Play {
        #[command(flatten)]
        sweep: SweepArgs,
    },
}

/// Sweep parameters shared by every command.
#[derive(Args, Debug, Clone)]
pub(crate) struct SweepArgs {
    /// Sweep duration in seconds
    #[arg(short, long)]
    pub duration: f64,

    /// Fade-out length in seconds [default: 0.1]
    #[arg(long)]
    pub fade_out: Option<f64>,

    /// Start frequency in Hz [default: 20]
    #[arg(long)]
    pub f_low: Option<f64>,

    /// End frequency in Hz [default: 24000]
    #[arg(long)]
    pub f_high: Option<f64>,

    /// Sample rate in Hz [default: 2 x end frequency]
    #[arg(short = 'r', long)]
    pub sample_rate: Option<f64>,

    /// Number of sweep repetitions [default: 1]
    #[arg(short = 'n', long)]
    pub repetitions: Option<u32>,

    /// Silence between repetitions in seconds [default: duration]
    #[arg(short, long)]
    pub interval: Option<f64>,
}

impl SweepArgs {
    pub fn to_config(&self) -> SweepConfig {
        let mut config = SweepConfig::new(self.duration);
        config.fade_out_time = self.fade_out;
        if self.f_low.is_some() || self.f_high.is_some() {
            config = config.frequency_range(
                self.f_low.unwrap_or(DEFAULT_FREQUENCY_RANGE.low),
                self.f_high.unwrap_or(DEFAULT_FREQUENCY_RANGE.high),
            );
        }
        config.sample_rate = self.sample_rate;
        config.repetition_count = self.repetitions;
        config.inter_sweep_interval = self.interval;
        config
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum FormatArg {
    /// 16-bit PCM
    Int16,
    /// 24-bit PCM
    Int24,
    /// 32-bit float
    Float32,
}

impl From<FormatArg> for WavFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Int16 => WavFormat::Int16,
            FormatArg::Int24 => WavFormat::Int24,
            FormatArg::Float32 => WavFormat::Float32,
        }
    }
}
