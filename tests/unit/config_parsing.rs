//! Unit tests for TOML configuration parsing.

use hanoi_motion::config::{load_config, parse_config, HanoiConfig};
use hanoi_motion::error::{ConfigError, Error};

/// Test parsing a full configuration from TOML.
#[test]
fn test_parse_full_config() {
    let toml_str = r#"
[geometry]
peg_centers = [100.0, 300.0, 500.0]
top = 50.0
bottom = 250.0
lift_clearance = 40.0
disk_height = 25.0

[disks]
count = 5
initial_width = 180.0
width_step = 20.0
min_width = 30.0

[playback]
base_speed_px_per_sec = 600.0
speed = 1.5
tick_interval_ms = 20
finish_delay_ms = 5000
"#;

    let config: HanoiConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.geometry.peg_centers[2].0, 500.0);
    assert_eq!(config.geometry.lift_y(), 10.0);
    assert_eq!(config.geometry.rest_y(2), 200.0);
    assert_eq!(config.disks.count, 5);
    assert_eq!(config.playback.base_speed.0, 600.0);
    assert_eq!(config.playback.pixel_speed(config.playback.speed).0, 900.0);
    assert_eq!(config.playback.finish_delay_secs(), 5);
}

/// Test that missing tables fall back to the classic board.
#[test]
fn test_defaults_match_classic_board() {
    let config: HanoiConfig = toml::from_str("").expect("Failed to parse TOML");

    let centers: Vec<f32> = config.geometry.peg_centers.iter().map(|c| c.0).collect();
    assert_eq!(centers, [150.0, 350.0, 550.0]);
    assert_eq!(config.geometry.top.0, 70.0);
    assert_eq!(config.geometry.bottom.0, 235.0);
    assert_eq!(config.disks.initial_width.0, 190.0);
    assert_eq!(config.playback.base_speed.0, 450.0);
    assert_eq!(config.playback.tick_interval_ms, 50);
    assert_eq!(config.playback.finish_delay_ms, 3000);
}

/// Test that a wrongly typed value is a parse error.
#[test]
fn test_wrong_type_rejected() {
    let result = parse_config(
        r#"
[disks]
count = "many"
"#,
    );

    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that a peg list of the wrong length is rejected.
#[test]
fn test_wrong_peg_count_rejected() {
    let result: Result<HanoiConfig, _> = toml::from_str(
        r#"
[geometry]
peg_centers = [100.0, 300.0]
"#,
    );

    assert!(result.is_err(), "Should reject two pegs");
}

/// Test loading from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("hanoi_motion_load_test.toml");
    std::fs::write(&path, "[disks]\ncount = 3\n").expect("Failed to write config");

    let config = load_config(&path).expect("Failed to load config");
    assert_eq!(config.disks.count, 3);
    assert_eq!(config.effective_disk_count(), 3);

    let _ = std::fs::remove_file(&path);
}

/// Test that a missing file is an I/O error.
#[test]
fn test_load_missing_file() {
    let result = load_config("/nonexistent/hanoi.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
