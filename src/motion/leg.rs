//! Legs: timed straight-line segments of a disk's path.

use crate::config::units::Seconds;

use super::point::Point;

/// Which part of a move a leg covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LegKind {
    /// Straight up off the source peg.
    Lift,
    /// Sideways above the pegs.
    Traverse,
    /// Straight down onto the destination stack.
    Descend,
}

/// One straight-line interpolation segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    /// Part of the move this leg covers.
    pub kind: LegKind,
    /// Where the disk starts.
    pub start: Point,
    /// Where the disk ends.
    pub end: Point,
    /// Time to travel from start to end.
    pub duration: Seconds,
}

impl Leg {
    /// Interpolation fraction after `elapsed` time on this leg.
    ///
    /// Clamped to `[0, 1]`. Zero-length legs are finished immediately.
    pub fn fraction(&self, elapsed: Seconds) -> f32 {
        if self.duration.0.is_nan() || self.duration.0 <= 0.0 {
            return 1.0;
        }
        (elapsed.0 / self.duration.0).clamp(0.0, 1.0)
    }

    /// Position at fraction `t`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Point {
        self.start.lerp(self.end, t)
    }

    /// Straight-line length of the leg.
    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}
