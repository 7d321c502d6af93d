//! Signal-processing primitives behind sweep synthesis.
//!
//! Each stage is a plain function over slices so the pipeline in
//! [`crate::sweep`] can be tested and benchmarked one step at a time.

/// Exponential frequency curve and phase integration.
pub mod chirp;
/// Phase-continuity trimming at the sweep tail.
pub mod trim;
/// Hann fade-out window.
pub mod window;

/// Relative tolerance used to snap `seconds * rate` onto an integer.
///
/// Products like `0.1 * 44_100.0` land a hair below the integer they mean.
const SNAP_TOLERANCE: f64 = 1e-9;

fn snapped(seconds: f64, rate: f64) -> f64 {
    let exact = seconds * rate;
    let nearest = exact.round();
    if (exact - nearest).abs() <= SNAP_TOLERANCE * nearest.abs().max(1.0) {
        nearest
    } else {
        exact
    }
}

/// `floor(seconds * rate)` as a sample count.
pub fn sample_count(seconds: f64, rate: f64) -> usize {
    snapped(seconds, rate).floor().max(0.0) as usize
}

/// `ceil(seconds * rate)` as a sample count.
pub fn sample_count_ceil(seconds: f64, rate: f64) -> usize {
    snapped(seconds, rate).ceil().max(0.0) as usize
}
