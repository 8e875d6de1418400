//! Configuration module for hanoi-motion.
//!
//! Provides board geometry, disk sizing and playback timing, loadable from
//! TOML files (with `std` feature) or built in code.

mod disks;
mod geometry;
#[cfg(feature = "std")]
mod loader;
mod playback;
mod system;
pub mod units;
mod validation;

pub use disks::{DiskConfig, MAX_DISKS};
pub use geometry::Geometry;
pub use playback::PlaybackConfig;
pub use system::HanoiConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Pixels, PixelsPerSec, Seconds, SpeedMultiplier, Timestamp};
