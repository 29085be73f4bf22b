//! Iterative rejector shared by every critical value provider.
//!
//! Each scanning step recomputes the working set's statistics and the
//! provider's threshold, then removes the single most extreme point if its
//! absolute residual exceeds the threshold. The loop stops when nothing is
//! removed or one value remains; at most n - 1 removals, each O(n).

pub mod working_set;

pub use working_set::WorkingSet;

use serde::Serialize;

use deviate_core::errors::ScoringError;

use crate::critical::CriticalValueProvider;
use crate::stats::Statistics;

/// State of the rejection loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionState {
    /// A removal happened (or none was attempted yet); scan again.
    Scanning,
    /// No residual exceeded the threshold, or one value remains.
    Converged,
}

/// Outcome of iterative rejection over one sample.
#[derive(Debug, Clone, Serialize)]
pub struct Rejection {
    /// Surviving values, in original relative order.
    pub survivors: Vec<f64>,
    /// Original indices of removed values, in removal order.
    pub removed: Vec<usize>,
    /// Number of scanning steps performed.
    pub iterations: usize,
    /// Statistics over the survivors: the reference distribution.
    pub stats: Statistics,
}

impl Rejection {
    /// True when the sample needed no removal at all.
    pub fn is_clean(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Run iterative rejection over `values` using `provider` for thresholds.
///
/// Fails on an empty sample or a non-finite value before any computation,
/// and propagates the first provider failure, discarding partial state.
pub fn reject_outliers<P>(values: &[f64], provider: &P) -> Result<Rejection, ScoringError>
where
    P: CriticalValueProvider + ?Sized,
{
    let mut working = WorkingSet::from_sample(values)?;
    let mut removed = Vec::new();
    let mut iterations = 0;
    let mut state = RejectionState::Scanning;

    while state == RejectionState::Scanning && working.len() > 1 {
        iterations += 1;
        state = step(&mut working, provider, &mut removed)?;
    }

    let stats = working.statistics();
    Ok(Rejection {
        survivors: working.into_values(),
        removed,
        iterations,
        stats,
    })
}

/// One scanning step: returns the next state.
fn step<P>(
    working: &mut WorkingSet,
    provider: &P,
    removed: &mut Vec<usize>,
) -> Result<RejectionState, ScoringError>
where
    P: CriticalValueProvider + ?Sized,
{
    let stats = working.statistics();
    if !stats.is_finite() {
        return Err(ScoringError::NonFiniteStatistics {
            sample_size: stats.count,
        });
    }
    let threshold = provider.threshold(working.len(), &stats)?;

    match working.max_abs_residual(stats.mean) {
        Some((position, residual)) if residual > threshold => {
            removed.push(working.remove(position));
            Ok(RejectionState::Scanning)
        }
        _ => Ok(RejectionState::Converged),
    }
}
