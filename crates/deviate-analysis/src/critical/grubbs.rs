//! Grubbs' test critical values via the Student's t distribution (`statrs`).

use statrs::distribution::{ContinuousCDF, StudentsT};

use deviate_core::errors::ScoringError;

use super::{check_open_unit, CriticalValueProvider};
use crate::stats::Statistics;

/// Grubbs' test at significance level `alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrubbsCritical {
    alpha: f64,
}

impl GrubbsCritical {
    /// Create a provider; `alpha` must lie in (0, 1).
    pub fn new(alpha: f64) -> Result<Self, ScoringError> {
        Ok(Self {
            alpha: check_open_unit("alpha", alpha)?,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl CriticalValueProvider for GrubbsCritical {
    fn name(&self) -> &'static str {
        "grubbs"
    }

    /// `G · stddev`, where G is the largest studentized residual expected
    /// from a non-outlier at level α.
    fn threshold(&self, working_set_size: usize, stats: &Statistics) -> Result<f64, ScoringError> {
        let g = grubbs_bound(self.alpha, working_set_size)?;
        Ok(g * stats.std_dev)
    }
}

/// Quantile of the standard Student's t distribution with `df` degrees of
/// freedom. `None` when `df` is not positive or the result is not finite.
pub fn t_quantile(confidence: f64, df: f64) -> Option<f64> {
    if !(0.0..=1.0).contains(&confidence) {
        return None;
    }
    let dist = StudentsT::new(0.0, 1.0, df).ok()?;
    let t = dist.inverse_cdf(confidence);
    t.is_finite().then_some(t)
}

/// Grubbs' critical value for a sample of `n` values:
///
/// G = ((n-1) / sqrt(n)) * sqrt(t² / (n - 2 + t²))
/// where t is the t quantile at `1 - α/(2n)` with `n - 2` degrees of freedom.
pub fn grubbs_bound(alpha: f64, n: usize) -> Result<f64, ScoringError> {
    check_open_unit("alpha", alpha)?;
    let undefined = || ScoringError::QuantileUndefined {
        distribution: "Student's t",
        sample_size: n,
    };

    if n < 3 {
        return Err(undefined());
    }

    let n_f = n as f64;
    let t = t_quantile(1.0 - alpha / (2.0 * n_f), n_f - 2.0).ok_or_else(undefined)?;
    let t2 = t * t;
    let g = ((n_f - 1.0) / n_f.sqrt()) * (t2 / (n_f - 2.0 + t2)).sqrt();

    if g.is_nan() {
        return Err(undefined());
    }
    Ok(g)
}
