//! Move solver for hanoi-motion.
//!
//! Produces the canonical minimal move sequence for an N-disk tower, either
//! recursively or with an explicit stack.

mod iterative;
mod moves;
mod recursive;

pub use iterative::solve_iterative;
pub use moves::{move_count, Move, PegId, PEG_COUNT};
pub use recursive::solve;
