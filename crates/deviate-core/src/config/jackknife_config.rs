//! Iterative JackKnife configuration.

use serde::{Deserialize, Serialize};

/// Default target percentile of the F distribution.
pub const DEFAULT_PERCENTILE: f64 = 0.95;

/// Default numerator degrees of freedom.
pub const DEFAULT_DOF1: f64 = 3.0;

/// Configuration for JackKnife-based rejection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JackknifeConfig {
    /// Target percentile, open interval (0, 1). Default: 0.95.
    pub percentile: Option<f64>,
    /// Numerator degrees of freedom, > 0. Default: 3.0.
    pub dof1: Option<f64>,
}

impl JackknifeConfig {
    /// Returns the effective percentile, defaulting to 0.95.
    pub fn effective_percentile(&self) -> f64 {
        self.percentile.unwrap_or(DEFAULT_PERCENTILE)
    }

    /// Returns the effective numerator degrees of freedom, defaulting to 3.0.
    pub fn effective_dof1(&self) -> f64 {
        self.dof1.unwrap_or(DEFAULT_DOF1)
    }
}
