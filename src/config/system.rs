//! Root configuration structure.

use serde::Deserialize;

use super::disks::DiskConfig;
use super::geometry::Geometry;
use super::playback::PlaybackConfig;

/// Root configuration structure from TOML.
///
/// Every table is optional; missing values fall back to the classic
/// 700 px wide three-pole board.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HanoiConfig {
    /// Pole placement and disk stacking pitch.
    pub geometry: Geometry,

    /// Initial tower sizing.
    pub disks: DiskConfig,

    /// Speeds and timer intervals.
    pub playback: PlaybackConfig,
}

impl HanoiConfig {
    /// Number of disks the configured tower will actually hold.
    pub fn effective_disk_count(&self) -> usize {
        self.disks.widths(self.disks.count).count()
    }
}
