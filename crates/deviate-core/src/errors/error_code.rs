//! DeviateErrorCode trait for host-binding conversion.

/// Trait for converting Deviate errors to stable error code strings.
/// Every error enum implements this so a binding layer can translate a
/// failure without matching on variants.
pub trait DeviateErrorCode {
    /// Returns the error code string (e.g., "INVALID_PARAMETER").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host error string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the host boundary.
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const COMPUTATION_FAILURE: &str = "COMPUTATION_FAILURE";
pub const RESOURCE_EXHAUSTION: &str = "RESOURCE_EXHAUSTION";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
