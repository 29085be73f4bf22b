//! Iterative JackKnife critical values via the Fisher F distribution.
//!
//! The F quantile is obtained from the Beta quantile (`statrs`):
//! if X ~ Beta(d1/2, d2/2) then d2·X / (d1·(1 - X)) ~ F(d1, d2).

use statrs::distribution::{Beta, ContinuousCDF};

use deviate_core::errors::ScoringError;

use super::{check_open_unit, CriticalValueProvider};
use crate::stats::Statistics;

/// Minimum threshold on the residual scale.
pub const THRESHOLD_FLOOR: f64 = 2.0;

/// Iterative JackKnife at target `percentile` with numerator degrees of
/// freedom `dof1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JackknifeCritical {
    percentile: f64,
    dof1: f64,
}

impl JackknifeCritical {
    /// Create a provider; `percentile` must lie in (0, 1) and `dof1` > 0.
    pub fn new(percentile: f64, dof1: f64) -> Result<Self, ScoringError> {
        let percentile = check_open_unit("percentile", percentile)?;
        if !(dof1.is_finite() && dof1 > 0.0) {
            return Err(ScoringError::InvalidParameter {
                name: "dof1",
                value: dof1,
                message: "must be greater than 0",
            });
        }
        Ok(Self { percentile, dof1 })
    }

    pub fn percentile(&self) -> f64 {
        self.percentile
    }

    pub fn dof1(&self) -> f64 {
        self.dof1
    }
}

impl CriticalValueProvider for JackknifeCritical {
    fn name(&self) -> &'static str {
        "jackknife"
    }

    /// `max(C · stddev, 2)` with denominator degrees of freedom `n - 1`.
    fn threshold(&self, working_set_size: usize, stats: &Statistics) -> Result<f64, ScoringError> {
        let undefined = || ScoringError::QuantileUndefined {
            distribution: "Fisher F",
            sample_size: working_set_size,
        };

        if working_set_size < 2 {
            return Err(undefined());
        }

        let dof = (working_set_size - 1) as f64;
        let f = fisher_quantile(self.percentile, self.dof1, dof).ok_or_else(undefined)?;
        let c = correction_factor(f, working_set_size, dof);
        if c.is_nan() {
            return Err(undefined());
        }

        Ok((c * stats.std_dev).max(THRESHOLD_FLOOR))
    }
}

/// Quantile of the F distribution with `dof1` numerator and `dof2`
/// denominator degrees of freedom. `None` for invalid degrees of freedom
/// or a non-finite result.
pub fn fisher_quantile(percentile: f64, dof1: f64, dof2: f64) -> Option<f64> {
    if !(0.0..=1.0).contains(&percentile) {
        return None;
    }
    let beta = Beta::new(dof1 / 2.0, dof2 / 2.0).ok()?;
    let x = beta.inverse_cdf(percentile);
    let f = (dof2 * x) / (dof1 * (1.0 - x));
    f.is_finite().then_some(f)
}

/// C = sqrt((3F / (1 + (3F - 1) / dof)) · (dof / n))
pub fn correction_factor(f: f64, n: usize, dof: f64) -> f64 {
    let numerator = 3.0 * f;
    let denominator = 1.0 + (3.0 * f - 1.0) / dof;
    ((numerator / denominator) * (dof / n as f64)).sqrt()
}
