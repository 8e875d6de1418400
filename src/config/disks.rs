//! Disk set configuration from TOML.

use serde::Deserialize;

use super::units::Pixels;

/// Upper bound on disks per tower; each peg can hold them all.
pub const MAX_DISKS: usize = 32;

/// How the initial tower is sized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiskConfig {
    /// Requested number of disks.
    pub count: usize,

    /// Width of the bottom disk.
    pub initial_width: Pixels,

    /// Width lost by each disk above the previous one.
    pub width_step: Pixels,

    /// Disks must stay wider than this; the tower is truncated otherwise.
    pub min_width: Pixels,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            count: 4,
            initial_width: Pixels(190.0),
            width_step: Pixels(30.0),
            min_width: Pixels(20.0),
        }
    }
}

impl DiskConfig {
    /// Widths of the disks for a tower of `count`, bottom first.
    ///
    /// Stops early once a width would no longer exceed `min_width`, or at
    /// [`MAX_DISKS`]. A non-positive step yields a single disk.
    pub fn widths(&self, count: usize) -> impl Iterator<Item = f32> + '_ {
        let step = self.width_step.0;
        let limit = if step > 0.0 { count.min(MAX_DISKS) } else { count.min(1) };
        (0..limit)
            .map(move |i| self.initial_width.0 - i as f32 * step)
            .take_while(move |&width| width > self.min_width.0)
    }

    /// Largest tower this configuration can build.
    pub fn capacity(&self) -> usize {
        self.widths(MAX_DISKS).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_widths() {
        let disks = DiskConfig::default();
        let widths: heapless::Vec<f32, MAX_DISKS> = disks.widths(3).collect();
        assert_eq!(widths.as_slice(), &[190.0, 160.0, 130.0]);
    }

    #[test]
    fn test_geometric_truncation() {
        let disks = DiskConfig::default();
        // 190, 160, 130, 100, 70, 40 then 10 <= 20
        assert_eq!(disks.widths(10).count(), 6);
        assert_eq!(disks.capacity(), 6);
    }

    #[test]
    fn test_zero_count() {
        assert_eq!(DiskConfig::default().widths(0).count(), 0);
    }
}
