//! Unit test harness for hanoi-motion.

mod unit;
