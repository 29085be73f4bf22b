//! Top-level Deviate configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GrubbsConfig, JackknifeConfig, OutputConfig};
use crate::errors::ConfigError;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "deviate.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`DEVIATE_*`)
/// 3. Project config (`deviate.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeviateConfig {
    pub grubbs: GrubbsConfig,
    pub jackknife: JackknifeConfig,
    pub output: OutputConfig,
}

/// Override arguments that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub alpha: Option<f64>,
    pub percentile: Option<f64>,
    pub dof1: Option<f64>,
    pub use_list: Option<bool>,
    pub use_id: Option<bool>,
}

impl DeviateConfig {
    /// Load configuration with layered resolution.
    ///
    /// A missing `deviate.toml` is not an error; compiled defaults apply.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3 (lowest priority): project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            ::tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: DeviateConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &DeviateConfig) -> Result<(), ConfigError> {
        if let Some(alpha) = config.grubbs.alpha {
            if !open_unit_interval(alpha) {
                return Err(ConfigError::ValidationFailed {
                    field: "grubbs.alpha".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(percentile) = config.jackknife.percentile {
            if !open_unit_interval(percentile) {
                return Err(ConfigError::ValidationFailed {
                    field: "jackknife.percentile".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(dof1) = config.jackknife.dof1 {
            if !(dof1.is_finite() && dof1 > 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "jackknife.dof1".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut DeviateConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DeviateConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut DeviateConfig, other: &DeviateConfig) {
        if other.grubbs.alpha.is_some() {
            base.grubbs.alpha = other.grubbs.alpha;
        }
        if other.jackknife.percentile.is_some() {
            base.jackknife.percentile = other.jackknife.percentile;
        }
        if other.jackknife.dof1.is_some() {
            base.jackknife.dof1 = other.jackknife.dof1;
        }
        if other.output.use_list.is_some() {
            base.output.use_list = other.output.use_list;
        }
        if other.output.use_id.is_some() {
            base.output.use_id = other.output.use_id;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `DEVIATE_GRUBBS_ALPHA`, `DEVIATE_JACKKNIFE_DOF1`, etc.
    fn apply_env_overrides(config: &mut DeviateConfig) {
        if let Some(v) = env_parse::<f64>("DEVIATE_GRUBBS_ALPHA") {
            config.grubbs.alpha = Some(v);
        }
        if let Some(v) = env_parse::<f64>("DEVIATE_JACKKNIFE_PERCENTILE") {
            config.jackknife.percentile = Some(v);
        }
        if let Some(v) = env_parse::<f64>("DEVIATE_JACKKNIFE_DOF1") {
            config.jackknife.dof1 = Some(v);
        }
        if let Some(v) = env_parse::<bool>("DEVIATE_OUTPUT_USE_LIST") {
            config.output.use_list = Some(v);
        }
        if let Some(v) = env_parse::<bool>("DEVIATE_OUTPUT_USE_ID") {
            config.output.use_id = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut DeviateConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.alpha {
            config.grubbs.alpha = Some(v);
        }
        if let Some(v) = overrides.percentile {
            config.jackknife.percentile = Some(v);
        }
        if let Some(v) = overrides.dof1 {
            config.jackknife.dof1 = Some(v);
        }
        if let Some(v) = overrides.use_list {
            config.output.use_list = Some(v);
        }
        if let Some(v) = overrides.use_id {
            config.output.use_id = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn open_unit_interval(v: f64) -> bool {
    v > 0.0 && v < 1.0
}

/// Read and parse an environment variable; unparseable values are ignored.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let val = std::env::var(key).ok()?;
    let parsed = val.trim().parse::<T>().ok();
    if parsed.is_none() {
        ::tracing::warn!(key, value = %val, "ignoring unparseable environment override");
    }
    parsed
}
