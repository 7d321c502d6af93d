pub mod analysis; // Time axes and spectra for plotting
pub mod dsp;
mod error;
pub mod io;
pub mod sweep; // Sweep configuration, synthesis and tiling

pub use error::{ErrorKind, SweepError, SweepResult};
pub use sweep::{synthesize, SweepConfig, Synthesis};

/// Upper bound on the composite buffer length (2^28 samples, 2 GiB of f64).
pub const MAX_COMPOSITE_SAMPLES: usize = 1 << 28;
