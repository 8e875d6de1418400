//! Configuration validation.

#![allow(clippy::neg_cmp_op_on_partial_ord)]

use crate::error::{ConfigError, Error, Result};

use super::HanoiConfig;

/// Validate a board configuration.
///
/// Checks:
/// - Peg centers are finite
/// - Poles have a positive height and disks a positive pitch
/// - Disk widths and width step are positive
/// - Base speed and tick interval are positive
///
/// Disk count and speed multiplier are not checked here; they are clamped
/// when applied.
pub fn validate_config(config: &HanoiConfig) -> Result<()> {
    validate_geometry(&config.geometry)?;
    validate_disks(&config.disks)?;
    validate_playback(&config.playback)?;
    Ok(())
}

fn validate_geometry(geometry: &super::Geometry) -> Result<()> {
    for (peg, center) in geometry.peg_centers.iter().enumerate() {
        if !center.0.is_finite() {
            return Err(Error::Config(ConfigError::InvalidPegCenter {
                peg: peg as u8,
                value: center.0,
            }));
        }
    }

    // NaN fails this comparison too
    if !(geometry.top.0 < geometry.bottom.0) {
        return Err(Error::Config(ConfigError::InvalidPoleSpan {
            top: geometry.top.0,
            bottom: geometry.bottom.0,
        }));
    }

    if !(geometry.disk_height.0 > 0.0) {
        return Err(Error::Config(ConfigError::InvalidDiskHeight(
            geometry.disk_height.0,
        )));
    }

    if !(geometry.lift_clearance.0 >= 0.0) {
        return Err(Error::Config(ConfigError::InvalidLiftClearance(
            geometry.lift_clearance.0,
        )));
    }

    Ok(())
}

fn validate_disks(disks: &super::DiskConfig) -> Result<()> {
    if !(disks.initial_width.0 > 0.0) {
        return Err(Error::Config(ConfigError::InvalidDiskWidth(
            disks.initial_width.0,
        )));
    }

    if !(disks.width_step.0 > 0.0) {
        return Err(Error::Config(ConfigError::InvalidWidthStep(disks.width_step.0)));
    }

    Ok(())
}

fn validate_playback(playback: &super::PlaybackConfig) -> Result<()> {
    if !(playback.base_speed.0 > 0.0) {
        return Err(Error::Config(ConfigError::InvalidBaseSpeed(
            playback.base_speed.0,
        )));
    }

    if playback.tick_interval_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidTickInterval(
            playback.tick_interval_ms,
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Pixels, PixelsPerSec};

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&HanoiConfig::default()).is_ok());
    }

    #[test]
    fn test_inverted_poles() {
        let mut config = HanoiConfig::default();
        config.geometry.top = Pixels(300.0);

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidPoleSpan { .. }))
        ));
    }

    #[test]
    fn test_nan_peg_center() {
        let mut config = HanoiConfig::default();
        config.geometry.peg_centers[2] = Pixels(f32::NAN);

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidPegCenter { peg: 2, .. }))
        ));
    }

    #[test]
    fn test_zero_base_speed() {
        let mut config = HanoiConfig::default();
        config.playback.base_speed = PixelsPerSec(0.0);

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidBaseSpeed(_)))
        ));
    }
}
