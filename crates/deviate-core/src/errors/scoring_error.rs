//! Scoring errors raised by the numerical engine.

use super::error_code::{self, DeviateErrorCode};

/// Errors that can occur while rejecting outliers or computing z-scores.
///
/// A failure always aborts the whole call; no partial z-score vector is
/// ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("Empty sample: at least one value is required")]
    EmptySample,

    #[error("Non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("Invalid parameter {name} = {value}: {message}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        message: &'static str,
    },

    #[error("{distribution} quantile is undefined for a working set of {sample_size} values")]
    QuantileUndefined {
        distribution: &'static str,
        sample_size: usize,
    },

    #[error("Standard deviation is zero over {sample_size} values")]
    ZeroSpread { sample_size: usize },

    #[error("Mean or standard deviation overflowed over {sample_size} values")]
    NonFiniteStatistics { sample_size: usize },

    #[error("Failed to allocate a working buffer of {requested} values")]
    AllocationFailed { requested: usize },
}

impl ScoringError {
    /// True for failures caused by the sample itself.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptySample | Self::NonFiniteValue { .. })
    }

    /// True for failures caused by an out-of-range method parameter.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// True when a distribution inverse or the working statistics are undefined.
    pub fn is_computation_failure(&self) -> bool {
        matches!(
            self,
            Self::QuantileUndefined { .. }
                | Self::ZeroSpread { .. }
                | Self::NonFiniteStatistics { .. }
        )
    }
}

impl DeviateErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptySample | Self::NonFiniteValue { .. } => error_code::INVALID_INPUT,
            Self::InvalidParameter { .. } => error_code::INVALID_PARAMETER,
            Self::QuantileUndefined { .. }
            | Self::ZeroSpread { .. }
            | Self::NonFiniteStatistics { .. } => error_code::COMPUTATION_FAILURE,
            Self::AllocationFailed { .. } => error_code::RESOURCE_EXHAUSTION,
        }
    }
}
