//! Board geometry from TOML.

use serde::Deserialize;

use super::units::Pixels;
use crate::solver::{PegId, PEG_COUNT};

/// Fixed layout of the three poles.
///
/// Coordinates are screen pixels with y growing downward. Disk positions
/// refer to a disk's top-left corner.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Horizontal center of each peg, left to right.
    pub peg_centers: [Pixels; PEG_COUNT],

    /// Top of the poles.
    pub top: Pixels,

    /// Top of the base; the lowest disk rests here.
    pub bottom: Pixels,

    /// How far above the pole tops disks travel between pegs.
    pub lift_clearance: Pixels,

    /// Height of a single disk (stacking pitch).
    pub disk_height: Pixels,
}

impl Default for Geometry {
    fn default() -> Self {
        let top = 70.0;
        Self {
            peg_centers: [Pixels(150.0), Pixels(350.0), Pixels(550.0)],
            top: Pixels(top),
            bottom: Pixels(top + 15.0 * 11.0),
            lift_clearance: Pixels(60.0),
            disk_height: Pixels(20.0),
        }
    }
}

impl Geometry {
    /// Horizontal center of a peg.
    #[inline]
    pub fn peg_center(&self, peg: PegId) -> f32 {
        self.peg_centers[peg.index()].0
    }

    /// Left edge of a disk of `width` centered on `peg`.
    #[inline]
    pub fn disk_x(&self, peg: PegId, width: f32) -> f32 {
        self.peg_center(peg) - width / 2.0
    }

    /// Resting y of the disk that makes a peg `height` disks tall.
    #[inline]
    pub fn rest_y(&self, height: usize) -> f32 {
        self.bottom.0 - height as f32 * self.disk_height.0
    }

    /// Travel height above all disks.
    #[inline]
    pub fn lift_y(&self) -> f32 {
        self.top.0 - self.lift_clearance.0
    }

    /// Visible height of each pole.
    #[inline]
    pub fn pole_height(&self) -> f32 {
        self.bottom.0 - self.top.0
    }
}
