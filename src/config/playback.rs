//! Playback timing configuration from TOML.

use serde::Deserialize;

use super::units::{PixelsPerSec, Seconds, SpeedMultiplier};

/// Speeds and timer intervals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Disk speed at a multiplier of 1.0.
    #[serde(rename = "base_speed_px_per_sec")]
    pub base_speed: PixelsPerSec,

    /// Initial speed multiplier.
    pub speed: SpeedMultiplier,

    /// Interval between scheduler ticks in milliseconds.
    pub tick_interval_ms: u32,

    /// Pause after the last move before the automatic reset, in milliseconds.
    pub finish_delay_ms: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            base_speed: PixelsPerSec(450.0),
            speed: SpeedMultiplier::NORMAL,
            tick_interval_ms: 50,
            finish_delay_ms: 3000,
        }
    }
}

impl PlaybackConfig {
    /// Slowest base speed playback will run at.
    pub const MIN_BASE_SPEED: PixelsPerSec = PixelsPerSec(1.0);
    /// Shortest tick interval in milliseconds.
    pub const MIN_TICK_INTERVAL_MS: u32 = 1;

    /// Copy with values that would stall playback clamped.
    ///
    /// A non-finite base speed falls back to the default; a base speed
    /// below [`MIN_BASE_SPEED`](Self::MIN_BASE_SPEED) and a tick interval
    /// below [`MIN_TICK_INTERVAL_MS`](Self::MIN_TICK_INTERVAL_MS) are raised
    /// to the minimum. The speed multiplier is clamped as in
    /// [`SpeedMultiplier::clamped`].
    pub fn clamped(&self) -> Self {
        let base_speed = if !self.base_speed.0.is_finite() {
            Self::default().base_speed
        } else if self.base_speed < Self::MIN_BASE_SPEED {
            Self::MIN_BASE_SPEED
        } else {
            self.base_speed
        };

        Self {
            base_speed,
            speed: SpeedMultiplier::clamped(self.speed.0),
            tick_interval_ms: self.tick_interval_ms.max(Self::MIN_TICK_INTERVAL_MS),
            finish_delay_ms: self.finish_delay_ms,
        }
    }

    /// Effective disk speed for a multiplier.
    #[inline]
    pub fn pixel_speed(&self, speed: SpeedMultiplier) -> PixelsPerSec {
        self.base_speed * speed
    }

    /// Tick interval in seconds.
    #[inline]
    pub fn tick_interval(&self) -> Seconds {
        Seconds::from_millis(self.tick_interval_ms)
    }

    /// Finish delay in seconds.
    #[inline]
    pub fn finish_delay(&self) -> Seconds {
        Seconds::from_millis(self.finish_delay_ms)
    }

    /// Finish delay in whole seconds, as shown in the status text.
    #[inline]
    pub fn finish_delay_secs(&self) -> u32 {
        self.finish_delay_ms / 1000
    }
}
