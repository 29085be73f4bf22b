//! Configuration system for Deviate.
//! TOML-based, 3-layer resolution: overrides > env > project > defaults.

pub mod deviate_config;
pub mod grubbs_config;
pub mod jackknife_config;
pub mod output_config;

pub use deviate_config::{ConfigOverrides, DeviateConfig};
pub use grubbs_config::GrubbsConfig;
pub use jackknife_config::JackknifeConfig;
pub use output_config::OutputConfig;
