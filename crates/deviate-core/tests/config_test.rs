//! Tests for the Deviate configuration system.

use std::sync::Mutex;

use deviate_core::config::{ConfigOverrides, DeviateConfig};
use deviate_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all DEVIATE_ env vars to prevent cross-test contamination.
fn clear_deviate_env_vars() {
    for key in [
        "DEVIATE_GRUBBS_ALPHA",
        "DEVIATE_JACKKNIFE_PERCENTILE",
        "DEVIATE_JACKKNIFE_DOF1",
        "DEVIATE_OUTPUT_USE_LIST",
        "DEVIATE_OUTPUT_USE_ID",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_deviate_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("deviate.toml"),
        r#"
[grubbs]
alpha = 0.01

[jackknife]
percentile = 0.9
dof1 = 4.0
"#,
    )
    .unwrap();

    // Env overrides the project file for percentile.
    std::env::set_var("DEVIATE_JACKKNIFE_PERCENTILE", "0.99");

    // Overrides beat everything for dof1.
    let overrides = ConfigOverrides {
        dof1: Some(2.5),
        ..Default::default()
    };

    let config = DeviateConfig::load(dir.path(), Some(&overrides)).unwrap();
    assert_eq!(config.grubbs.alpha, Some(0.01));
    assert_eq!(config.jackknife.percentile, Some(0.99));
    assert_eq!(config.jackknife.dof1, Some(2.5));

    clear_deviate_env_vars();
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_deviate_env_vars();

    let dir = tempdir();
    let config = DeviateConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.grubbs.effective_alpha(), 0.05);
    assert_eq!(config.jackknife.effective_percentile(), 0.95);
    assert_eq!(config.jackknife.effective_dof1(), 3.0);
    assert!(config.output.effective_use_list());
    assert!(!config.output.effective_use_id());
}

#[test]
fn test_unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_deviate_env_vars();

    std::env::set_var("DEVIATE_GRUBBS_ALPHA", "not-a-number");
    std::env::set_var("DEVIATE_OUTPUT_USE_ID", "true");
    let dir = tempdir();
    let config = DeviateConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.grubbs.alpha, None);
    assert_eq!(config.output.use_id, Some(true));

    clear_deviate_env_vars();
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_deviate_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("deviate.toml"), "[grubbs\nalpha = ").unwrap();
    let err = DeviateConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_out_of_range_values() {
    let err = DeviateConfig::from_toml("[grubbs]\nalpha = 1.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "grubbs.alpha"));

    let err = DeviateConfig::from_toml("[jackknife]\npercentile = 1.5\n").unwrap_err();
    assert!(
        matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "jackknife.percentile")
    );

    let err = DeviateConfig::from_toml("[jackknife]\ndof1 = 0.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "jackknife.dof1"));
}

#[test]
fn test_override_validation_applies_after_merge() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_deviate_env_vars();

    let dir = tempdir();
    let overrides = ConfigOverrides {
        alpha: Some(0.0),
        ..Default::default()
    };
    let err = DeviateConfig::load(dir.path(), Some(&overrides)).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_unknown_keys_ignored() {
    let config = DeviateConfig::from_toml(
        r#"
[grubbs]
alpha = 0.1
future_option = "x"

[something_else]
value = 3
"#,
    )
    .unwrap();
    assert_eq!(config.grubbs.alpha, Some(0.1));
}

#[test]
fn test_toml_round_trip() {
    let config = DeviateConfig::from_toml("[jackknife]\npercentile = 0.9\n[output]\nuse_list = false\n")
        .unwrap();
    let text = config.to_toml().unwrap();
    let reparsed = DeviateConfig::from_toml(&text).unwrap();
    assert_eq!(reparsed.jackknife.percentile, Some(0.9));
    assert_eq!(reparsed.output.use_list, Some(false));
    assert_eq!(reparsed.grubbs.alpha, None);
}
