//! Cancellable timer handles driven by host-supplied time.
//!
//! Nothing here sleeps or reads a wall clock. The controller owns at most
//! one handle of each kind; dropping the handle cancels it.

use crate::config::units::{Seconds, Timestamp};

/// A periodic task firing every `interval`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatingTask {
    interval: Seconds,
    next_due: Timestamp,
}

impl RepeatingTask {
    /// Arm a task at `now`; the first firing is one interval later.
    pub fn new(now: Timestamp, interval: Seconds) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Interval between firings.
    #[inline]
    pub fn interval(&self) -> Seconds {
        self.interval
    }

    /// Time of the next firing.
    #[inline]
    pub fn next_due(&self) -> Timestamp {
        self.next_due
    }

    /// Fire if due at `now`, scheduling the next firing.
    ///
    /// Fires at most once per call; missed periods are skipped rather than
    /// replayed in a burst.
    pub fn fire(&mut self, now: Timestamp) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = self.next_due + self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        true
    }
}

/// A single delayed firing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneShot {
    due: Timestamp,
}

impl OneShot {
    /// Arm a one-shot firing `delay` after `now`.
    pub fn new(now: Timestamp, delay: Seconds) -> Self {
        Self { due: now + delay }
    }

    /// Time of the firing.
    #[inline]
    pub fn due(&self) -> Timestamp {
        self.due
    }

    /// Check if the firing time has been reached.
    #[inline]
    pub fn is_due(&self, now: Timestamp) -> bool {
        now >= self.due
    }
}

/// Monotonic animation time, zero at its first reading.
///
/// The origin is subtracted in host precision before narrowing, so
/// interpolation works on small values whatever the host time base.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationClock {
    origin: Option<Timestamp>,
}

impl AnimationClock {
    /// Create a clock that has not been read yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed animation time at host time `now`.
    pub fn read(&mut self, now: Timestamp) -> Seconds {
        let origin = *self.origin.get_or_insert(now);
        now - origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeating_task() {
        let mut task = RepeatingTask::new(Timestamp(1.0), Seconds(0.5));
        assert!(!task.fire(Timestamp(1.2)));
        assert!(task.fire(Timestamp(1.5)));
        assert!(!task.fire(Timestamp(1.6)));
        assert!(task.fire(Timestamp(2.0)));
        assert_eq!(task.next_due(), Timestamp(2.5));
    }

    #[test]
    fn test_missed_periods_skipped() {
        let mut task = RepeatingTask::new(Timestamp::ZERO, Seconds(1.0));
        assert!(task.fire(Timestamp(10.0)));
        assert!(!task.fire(Timestamp(10.5)));
        assert_eq!(task.next_due(), Timestamp(11.0));
    }

    #[test]
    fn test_one_shot() {
        let timer = OneShot::new(Timestamp(2.0), Seconds(3.0));
        assert!(!timer.is_due(Timestamp(4.9)));
        assert!(timer.is_due(Timestamp(5.0)));
    }

    #[test]
    fn test_clock_zeroed_at_first_read() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.read(Timestamp(100.0)), Seconds::ZERO);
        assert_eq!(clock.read(Timestamp(101.5)), Seconds(1.5));
    }

    #[test]
    fn test_clock_resolves_ticks_on_epoch_base() {
        let base = 1.7e9;
        let mut clock = AnimationClock::new();
        assert_eq!(clock.read(Timestamp(base)), Seconds::ZERO);
        for k in 1..=10 {
            let t = clock.read(Timestamp(base + k as f64 * 0.05));
            assert!((t.0 - k as f32 * 0.05).abs() < 1e-5, "tick {}: {:?}", k, t);
        }
    }

    #[test]
    fn test_repeating_task_on_epoch_base() {
        let base = Timestamp(1.7e9);
        let mut task = RepeatingTask::new(base, Seconds(0.05));
        let mut now = base;
        for _ in 0..10 {
            assert!(!task.fire(now));
            now = now + Seconds(0.05);
            assert!(task.fire(now));
        }
    }
}
