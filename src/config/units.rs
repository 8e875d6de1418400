//! Unit types for board quantities.
//!
//! Type-safe wrappers for screen distances, speeds and durations so pixel
//! values and seconds cannot be mixed up.

use core::ops::{Add, Mul, Sub};

use serde::Deserialize;

/// Screen distance or coordinate in pixels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Pixels(pub f32);

impl Pixels {
    /// Create a new Pixels value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Add for Pixels {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Pixels {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Speed in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct PixelsPerSec(pub f32);

impl PixelsPerSec {
    /// Create a new PixelsPerSec value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Time needed to cover `distance` at this speed.
    ///
    /// Zero distance takes zero time. A non-positive speed never arrives.
    #[inline]
    pub fn travel_time(self, distance: f32) -> Seconds {
        if distance <= 0.0 {
            Seconds::ZERO
        } else if self.0 <= 0.0 {
            Seconds(f32::INFINITY)
        } else {
            Seconds(distance / self.0)
        }
    }
}

impl Mul<SpeedMultiplier> for PixelsPerSec {
    type Output = Self;

    fn mul(self, rhs: SpeedMultiplier) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

/// Time in seconds, as reported by the host clock.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f32);

impl Seconds {
    /// Zero seconds.
    pub const ZERO: Self = Self(0.0);

    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Create from whole milliseconds.
    #[inline]
    pub fn from_millis(ms: u32) -> Self {
        Self(ms as f32 / 1000.0)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Add for Seconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Seconds {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Absolute host time in seconds.
///
/// Kept in double precision so epoch-sized time bases still resolve a tick.
/// Differences between two timestamps narrow to [`Seconds`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Timestamp(pub f64);

impl Timestamp {
    /// Time zero.
    pub const ZERO: Self = Self(0.0);

    /// Create a new Timestamp value.
    #[inline]
    pub const fn new(secs: f64) -> Self {
        Self(secs)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Add<Seconds> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Seconds) -> Self::Output {
        Self(self.0 + rhs.0 as f64)
    }
}

impl Sub for Timestamp {
    type Output = Seconds;

    fn sub(self, rhs: Self) -> Self::Output {
        Seconds((self.0 - rhs.0) as f32)
    }
}

/// User-facing speed factor applied to the base pixel speed.
///
/// Always positive and finite once constructed with [`SpeedMultiplier::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct SpeedMultiplier(pub f32);

impl SpeedMultiplier {
    /// Normal speed.
    pub const NORMAL: Self = Self(1.0);
    /// Slowest allowed speed.
    pub const MIN: Self = Self(0.1);

    /// Build a multiplier, clamping invalid input instead of failing.
    ///
    /// Non-finite values fall back to [`SpeedMultiplier::NORMAL`]; values
    /// below [`SpeedMultiplier::MIN`] are raised to it.
    pub fn clamped(value: f32) -> Self {
        if !value.is_finite() {
            Self::NORMAL
        } else if value < Self::MIN.0 {
            Self::MIN
        } else {
            Self(value)
        }
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Default for SpeedMultiplier {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Pixels.
    fn px(self) -> Pixels;
    /// Convert to Seconds.
    fn secs(self) -> Seconds;
}

impl UnitExt for f32 {
    #[inline]
    fn px(self) -> Pixels {
        Pixels(self)
    }

    #[inline]
    fn secs(self) -> Seconds {
        Seconds(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_clamping() {
        assert_eq!(SpeedMultiplier::clamped(2.5), SpeedMultiplier(2.5));
        assert_eq!(SpeedMultiplier::clamped(0.0), SpeedMultiplier::MIN);
        assert_eq!(SpeedMultiplier::clamped(-3.0), SpeedMultiplier::MIN);
        assert_eq!(SpeedMultiplier::clamped(f32::NAN), SpeedMultiplier::NORMAL);
        assert_eq!(SpeedMultiplier::clamped(f32::INFINITY), SpeedMultiplier::NORMAL);
    }

    #[test]
    fn test_travel_time() {
        let speed = PixelsPerSec(450.0) * SpeedMultiplier(2.0);
        assert!((speed.travel_time(900.0).value() - 1.0).abs() < 1e-6);
        assert_eq!(speed.travel_time(0.0), Seconds::ZERO);
    }

    #[test]
    fn test_timestamp_difference_keeps_precision() {
        let base = Timestamp(1.7e9);
        let later = base + Seconds(0.05);
        assert!(((later - base).0 - 0.05).abs() < 1e-6);
        assert_eq!(base - base, Seconds::ZERO);
    }

    #[test]
    fn test_unit_ext() {
        assert_eq!(190.0_f32.px() - 30.0_f32.px(), Pixels(160.0));
        assert_eq!(1.5_f32.secs() + 0.5_f32.secs(), Seconds(2.0));
    }

    #[test]
    fn test_seconds_from_millis() {
        assert!((Seconds::from_millis(50).value() - 0.05).abs() < 1e-6);
        assert_eq!(Seconds::from_millis(3000), Seconds(3.0));
    }
}
