//! # hanoi-motion
//!
//! Tower of Hanoi move planning and timed disk-motion scheduling.
//!
//! ## Features
//!
//! - **Minimal solution**: recursive and explicit-stack solvers producing the
//!   canonical `2^n - 1` move sequence
//! - **Three-leg paths**: every move is a lift, a traverse and a descent, each
//!   timed from distance and speed
//! - **Tick-driven scheduling**: linear leg interpolation against host time,
//!   with no wall clock inside the engine
//! - **Playback control**: start, pause, abort and automatic reset after the
//!   last move
//! - **Configuration-driven**: board geometry and timing from TOML files
//! - **no_std compatible**: core library needs only `alloc`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hanoi_motion::{HanoiConfig, PlaybackController, Timestamp};
//!
//! let config = hanoi_motion::load_config("hanoi.toml")?;
//! let mut hanoi = PlaybackController::new(config, my_renderer);
//!
//! hanoi.start(Timestamp::ZERO);
//! // every frame:
//! hanoi.poll(Timestamp(elapsed_secs))?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod playback;
pub mod render;
pub mod solver;
pub mod tower;

// Re-exports for ergonomic API
pub use config::{validate_config, Geometry, HanoiConfig};
pub use error::{Error, Result};
pub use motion::{build_legs, Leg, LegKind, MotionScheduler, PathBuilder, Point, TickOutcome};
pub use playback::{PlaybackController, PlaybackState, PollEvent, Status};
pub use render::{NullRenderer, Renderer};
pub use solver::{move_count, solve, solve_iterative, Move, PegId};
pub use tower::{Disk, DiskId, Peg, Tower};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Pixels, PixelsPerSec, Seconds, SpeedMultiplier, Timestamp};
