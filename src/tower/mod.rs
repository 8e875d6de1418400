//! Tower module for hanoi-motion.
//!
//! Disks, pegs and the three-peg layout they move across.

mod disk;
mod layout;
mod peg;

pub use disk::{Disk, DiskId};
pub use layout::Tower;
pub use peg::Peg;
