//! Motion module for hanoi-motion.
//!
//! Splits moves into timed legs and interpolates them tick by tick.

mod leg;
mod path;
mod point;
mod scheduler;

pub use leg::{Leg, LegKind};
pub use path::{build_legs, PathBuilder, LEGS_PER_MOVE};
pub use point::Point;
pub use scheduler::{MotionScheduler, TickOutcome};
