//! Playback module for hanoi-motion.
//!
//! The controller state machine, its timer handles and status text.

mod controller;
mod state;
mod status;
mod timer;

pub use controller::{PlaybackController, PollEvent};
pub use state::PlaybackState;
pub use status::Status;
pub use timer::{AnimationClock, OneShot, RepeatingTask};
