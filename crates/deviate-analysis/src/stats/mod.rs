//! Statistics primitives: mean/spread estimation, residuals, z-scores.
//!
//! Pure functions over a sequence of values. None of them allocate.

pub mod residual;
pub mod welford;

pub use residual::{abs_residual, max_abs_residual, z_score};
pub use welford::{estimate_mean_and_std_dev, Statistics};
