//! Error handling for Deviate.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod deviate_error;
pub mod error_code;
pub mod input_error;
pub mod scoring_error;

pub use config_error::ConfigError;
pub use deviate_error::DeviateError;
pub use error_code::DeviateErrorCode;
pub use input_error::InputError;
pub use scoring_error::ScoringError;
