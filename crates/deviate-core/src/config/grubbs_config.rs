//! Grubbs' test configuration.

use serde::{Deserialize, Serialize};

/// Default significance level for Grubbs' test.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Configuration for Grubbs-based rejection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GrubbsConfig {
    /// Significance level α, open interval (0, 1). Default: 0.05.
    pub alpha: Option<f64>,
}

impl GrubbsConfig {
    /// Returns the effective significance level, defaulting to 0.05.
    pub fn effective_alpha(&self) -> f64 {
        self.alpha.unwrap_or(DEFAULT_ALPHA)
    }
}
