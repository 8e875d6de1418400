//! Screen points.

use libm::{roundf, sqrtf};

/// A point in screen pixels, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        sqrtf(dx * dx + dy * dy)
    }

    /// Linear interpolation toward `end`; `t = 0` is `self`, `t = 1` is `end`.
    ///
    /// Each axis is interpolated independently.
    #[inline]
    pub fn lerp(self, end: Point, t: f32) -> Point {
        Point {
            x: self.x + (end.x - self.x) * t,
            y: self.y + (end.y - self.y) * t,
        }
    }

    /// Nearest whole-pixel coordinates.
    #[inline]
    pub fn rounded(self) -> (i32, i32) {
        (roundf(self.x) as i32, roundf(self.y) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Point::new(10.0, 200.0);
        let b = Point::new(10.0, 10.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(10.0, 105.0));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(Point::new(54.6, 10.4).rounded(), (55, 10));
        assert_eq!(Point::new(2.5, 0.0).rounded(), (3, 0));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }
}
