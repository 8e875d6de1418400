//! Unit tests for configuration validation.

use hanoi_motion::config::{validate_config, HanoiConfig};
use hanoi_motion::error::{ConfigError, Error};

fn parse(toml_str: &str) -> HanoiConfig {
    toml::from_str(toml_str).expect("Failed to parse TOML")
}

/// Test validation of the default configuration.
#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&HanoiConfig::default()).is_ok());
}

/// Test validation fails for a zero disk height.
#[test]
fn test_zero_disk_height() {
    let config = parse(
        r#"
[geometry]
disk_height = 0.0
"#,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidDiskHeight(_)))
    ));
}

/// Test validation fails for a negative lift clearance.
#[test]
fn test_negative_lift_clearance() {
    let config = parse(
        r#"
[geometry]
lift_clearance = -5.0
"#,
    );

    assert!(validate_config(&config).is_err());
}

/// Test validation fails for a non-positive width step.
#[test]
fn test_zero_width_step() {
    let config = parse(
        r#"
[disks]
width_step = 0.0
"#,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidWidthStep(_)))
    ));
}

/// Test that disk count and speed are not validated (they are clamped).
#[test]
fn test_count_and_speed_are_clamped_not_rejected() {
    let config = parse(
        r#"
[disks]
count = 0

[playback]
speed = -1.0
"#,
    );

    assert!(validate_config(&config).is_ok());
    assert_eq!(config.effective_disk_count(), 0);
}

/// Test error messages are readable.
#[test]
fn test_error_display() {
    let err = Error::Config(ConfigError::InvalidTickInterval(0));
    assert_eq!(
        err.to_string(),
        "Configuration error: Invalid tick interval: 0 ms. Must be > 0"
    );
}
