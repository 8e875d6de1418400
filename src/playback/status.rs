//! Human-readable status text.

use core::fmt;

/// Status line shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Nothing to report (idle or just reset).
    #[default]
    Empty,
    /// A move just started; counts it and every move after it.
    MovesRemaining(usize),
    /// The last move finished.
    Finished,
    /// Finished, automatic reset pending.
    Resetting {
        /// Whole seconds until the reset.
        seconds: u32,
    },
}

impl Status {
    /// Check if there is no status text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Status::Empty)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Empty => Ok(()),
            Status::MovesRemaining(k) => write!(f, "{} moves remaining", k),
            Status::Finished => write!(f, "Finished"),
            Status::Resetting { seconds } => {
                write!(f, "Finished - Resetting in {} seconds...", seconds)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    fn text(status: Status) -> heapless::String<64> {
        let mut out = heapless::String::new();
        write!(out, "{}", status).unwrap();
        out
    }

    #[test]
    fn test_status_text() {
        assert_eq!(text(Status::Empty).as_str(), "");
        assert_eq!(text(Status::MovesRemaining(7)).as_str(), "7 moves remaining");
        assert_eq!(text(Status::Finished).as_str(), "Finished");
        assert_eq!(
            text(Status::Resetting { seconds: 3 }).as_str(),
            "Finished - Resetting in 3 seconds..."
        );
    }
}
