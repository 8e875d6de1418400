//! Error types for hanoi-motion.
//!
//! Runtime playback never fails on bad parameters (they are clamped); errors
//! only come from configuration loading and from tower invariant breaches.

use core::fmt;

use crate::solver::PegId;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all hanoi-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Peg occupancy invariant error
    Tower(TowerError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Peg center is not a finite number
    InvalidPegCenter {
        /// Peg index
        peg: u8,
        /// Offending value
        value: f32,
    },
    /// Pole span is empty or inverted (top must be above bottom)
    InvalidPoleSpan {
        /// Top of the poles
        top: f32,
        /// Bottom of the poles
        bottom: f32,
    },
    /// Invalid disk height (must be > 0)
    InvalidDiskHeight(f32),
    /// Invalid lift clearance (must be >= 0)
    InvalidLiftClearance(f32),
    /// Invalid initial disk width (must be > 0)
    InvalidDiskWidth(f32),
    /// Invalid width step between disks (must be > 0)
    InvalidWidthStep(f32),
    /// Invalid base pixel speed (must be > 0)
    InvalidBaseSpeed(f32),
    /// Invalid tick interval (must be > 0)
    InvalidTickInterval(u32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Tower occupancy errors.
///
/// Canonical move sequences never produce these; they guard hand-fed moves.
#[derive(Debug, Clone, PartialEq)]
pub enum TowerError {
    /// Tried to take a disk from an empty peg
    EmptyPeg(PegId),
    /// Tried to place a disk on a narrower one
    LargerOnSmaller {
        /// Destination peg
        peg: PegId,
        /// Width of the disk being placed
        width: f32,
        /// Width of the disk already on top
        top_width: f32,
    },
    /// Peg has no room left
    PegFull(PegId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Tower(e) => write!(f, "Tower error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidPegCenter { peg, value } => {
                write!(f, "Invalid center {} for peg {}. Must be finite", value, peg)
            }
            ConfigError::InvalidPoleSpan { top, bottom } => {
                write!(f, "Invalid pole span: top ({}) must be < bottom ({})", top, bottom)
            }
            ConfigError::InvalidDiskHeight(v) => write!(f, "Invalid disk height: {}. Must be > 0", v),
            ConfigError::InvalidLiftClearance(v) => {
                write!(f, "Invalid lift clearance: {}. Must be >= 0", v)
            }
            ConfigError::InvalidDiskWidth(v) => write!(f, "Invalid disk width: {}. Must be > 0", v),
            ConfigError::InvalidWidthStep(v) => write!(f, "Invalid width step: {}. Must be > 0", v),
            ConfigError::InvalidBaseSpeed(v) => write!(f, "Invalid base speed: {}. Must be > 0", v),
            ConfigError::InvalidTickInterval(v) => {
                write!(f, "Invalid tick interval: {} ms. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for TowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TowerError::EmptyPeg(peg) => write!(f, "Peg {} is empty", peg.index()),
            TowerError::LargerOnSmaller { peg, width, top_width } => write!(
                f,
                "Cannot place disk of width {} on disk of width {} (peg {})",
                width,
                top_width,
                peg.index()
            ),
            TowerError::PegFull(peg) => write!(f, "Peg {} is full", peg.index()),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<TowerError> for Error {
    fn from(e: TowerError) -> Self {
        Error::Tower(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for TowerError {}
