//! The shrinking working copy of a sample.

use deviate_core::errors::ScoringError;

use crate::buffer::{try_copy, try_with_capacity};
use crate::stats::{self, Statistics};

/// Mutable copy of a sample that only ever shrinks, one value at a time.
///
/// Each value keeps its original index so removals can be reported
/// against the caller's sample.
#[derive(Debug, Clone)]
pub struct WorkingSet {
    values: Vec<f64>,
    origins: Vec<usize>,
}

impl WorkingSet {
    /// Copy `sample` into a new working set.
    ///
    /// Fails on an empty sample or a non-finite value.
    pub fn from_sample(sample: &[f64]) -> Result<Self, ScoringError> {
        validate_sample(sample)?;

        let values = try_copy(sample)?;
        let mut origins = try_with_capacity(sample.len())?;
        origins.extend(0..sample.len());

        Ok(Self { values, origins })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn statistics(&self) -> Statistics {
        stats::estimate_mean_and_std_dev(&self.values)
    }

    /// Position (within the working set) and size of the largest residual.
    pub fn max_abs_residual(&self, mean: f64) -> Option<(usize, f64)> {
        stats::max_abs_residual(&self.values, mean)
    }

    /// Remove the value at `position`, shifting later values left, and
    /// return its index in the original sample.
    ///
    /// Never removes the last remaining value.
    pub fn remove(&mut self, position: usize) -> usize {
        debug_assert!(self.values.len() > 1, "working set must keep one value");
        self.values.remove(position);
        self.origins.remove(position)
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Reject empty samples and non-finite values.
pub(crate) fn validate_sample(sample: &[f64]) -> Result<(), ScoringError> {
    if sample.is_empty() {
        return Err(ScoringError::EmptySample);
    }
    if let Some((index, &value)) = sample.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ScoringError::NonFiniteValue { index, value });
    }
    Ok(())
}
