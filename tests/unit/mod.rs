//! Unit test harness for hanoi-motion.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod config_validation;
mod solver_sequences;
