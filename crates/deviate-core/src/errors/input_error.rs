//! Input marshalling errors.

use super::error_code::{self, DeviateErrorCode};

/// Errors that can occur while flattening a host collection into a sample.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Value at position {position} is not numeric: {found}")]
    NotNumeric { position: usize, found: String },

    #[error("Entry at position {position} is an empty list")]
    EmptyEntry { position: usize },

    #[error("Unsupported input shape: expected an array or object, found {found}")]
    UnsupportedShape { found: String },

    #[error("Malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeviateErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
