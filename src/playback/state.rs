//! Playback states.

/// Where the controller is in its run/finish/reset cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackState {
    /// No tick task armed; ready to start or resume.
    #[default]
    Idle,
    /// Tick task armed, moves being consumed.
    Running,
    /// All moves done, waiting for the automatic reset.
    Finishing,
}

impl PlaybackState {
    /// State name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            PlaybackState::Idle => "Idle",
            PlaybackState::Running => "Running",
            PlaybackState::Finishing => "Finishing",
        }
    }
}
