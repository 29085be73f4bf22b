//! Top-level error for a scoring session.

use super::error_code::DeviateErrorCode;
use super::{ConfigError, InputError, ScoringError};

/// Errors that can occur while running a full scoring session.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum DeviateError {
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DeviateErrorCode for DeviateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scoring(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
