//! Critical value providers.
//!
//! A provider maps the current working-set size (and its statistics) to a
//! rejection threshold on the absolute residual scale. The rejector is
//! generic over this trait, so the numeric policy of each test lives here
//! and nowhere else.

pub mod grubbs;
pub mod jackknife;

pub use grubbs::{grubbs_bound, t_quantile, GrubbsCritical};
pub use jackknife::{correction_factor, fisher_quantile, JackknifeCritical, THRESHOLD_FLOOR};

use deviate_core::errors::ScoringError;

use crate::stats::Statistics;

/// Strategy computing the rejection threshold for one rejection step.
pub trait CriticalValueProvider {
    /// Short identifier used in reports and logs.
    fn name(&self) -> &'static str;

    /// Threshold an absolute residual must exceed to be rejected, for a
    /// working set of `working_set_size` values summarized by `stats`.
    fn threshold(&self, working_set_size: usize, stats: &Statistics) -> Result<f64, ScoringError>;
}

/// Reject parameters outside the open unit interval.
pub(crate) fn check_open_unit(name: &'static str, value: f64) -> Result<f64, ScoringError> {
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(ScoringError::InvalidParameter {
            name,
            value,
            message: "must be strictly between 0 and 1",
        })
    }
}
