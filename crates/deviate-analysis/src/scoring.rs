//! Final scoring and the public runners.
//!
//! Rejection only decides which points define the reference distribution;
//! every original value is scored, in original order.

use deviate_core::errors::ScoringError;

use crate::buffer::try_with_capacity;
use crate::critical::{CriticalValueProvider, GrubbsCritical, JackknifeCritical};
use crate::rejection::{reject_outliers, working_set::validate_sample, Rejection};
use crate::stats::{estimate_mean_and_std_dev, z_score, Statistics};

/// Score every value in `values` against `stats`.
///
/// Fails with `NonFiniteStatistics` when the reference distribution
/// overflowed, and with `ZeroSpread` when it has no spread.
pub fn score_against(values: &[f64], stats: &Statistics) -> Result<Vec<f64>, ScoringError> {
    if !stats.is_finite() {
        return Err(ScoringError::NonFiniteStatistics {
            sample_size: stats.count,
        });
    }
    if stats.is_degenerate() {
        return Err(ScoringError::ZeroSpread {
            sample_size: stats.count,
        });
    }

    let mut zscores = try_with_capacity(values.len())?;
    zscores.extend(values.iter().map(|&v| z_score(v, stats.mean, stats.std_dev)));
    Ok(zscores)
}

/// Reject outliers with `provider`, then score the full sample against the
/// survivors. Returns the rejection outcome alongside the z-scores.
pub fn score_with_rejection<P>(
    values: &[f64],
    provider: &P,
) -> Result<(Vec<f64>, Rejection), ScoringError>
where
    P: CriticalValueProvider + ?Sized,
{
    let rejection = reject_outliers(values, provider)?;
    let zscores = score_against(values, &rejection.stats)?;
    Ok((zscores, rejection))
}

/// Z-scores against the survivors of Grubbs-based rejection at level `alpha`.
pub fn run_grubbs(values: &[f64], alpha: f64) -> Result<Vec<f64>, ScoringError> {
    let provider = GrubbsCritical::new(alpha)?;
    score_with_rejection(values, &provider).map(|(zscores, _)| zscores)
}

/// Z-scores against the survivors of Iterative JackKnife rejection.
pub fn run_jackknife(values: &[f64], percentile: f64, dof1: f64) -> Result<Vec<f64>, ScoringError> {
    let provider = JackknifeCritical::new(percentile, dof1)?;
    score_with_rejection(values, &provider).map(|(zscores, _)| zscores)
}

/// Score the whole sample against its own statistics, rejecting nothing.
pub fn score_without_rejection(values: &[f64]) -> Result<(Vec<f64>, Statistics), ScoringError> {
    validate_sample(values)?;
    let stats = estimate_mean_and_std_dev(values);
    let zscores = score_against(values, &stats)?;
    Ok((zscores, stats))
}

/// Plain z-scores over the whole sample; nothing is rejected.
///
/// Fails with `ZeroSpread` when all values are identical or n = 1.
pub fn run_no_outlier(values: &[f64]) -> Result<Vec<f64>, ScoringError> {
    score_without_rejection(values).map(|(zscores, _)| zscores)
}
