//! Playback controller - the start/stop/reset state machine.

use embedded_hal::delay::DelayNs;
use libm::ceilf;

use crate::config::units::{Seconds, SpeedMultiplier, Timestamp};
use crate::config::{HanoiConfig, MAX_DISKS};
use crate::error::Result;
use crate::motion::{MotionScheduler, PathBuilder, TickOutcome};
use crate::render::Renderer;
use crate::solver::{solve, PegId};
use crate::tower::Tower;

use super::state::PlaybackState;
use super::status::Status;
use super::timer::{AnimationClock, OneShot, RepeatingTask};

/// What a call to [`PlaybackController::poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollEvent {
    /// No timer was due.
    Waiting,
    /// The scheduler ticked.
    Ticked(TickOutcome),
    /// The finish delay ran out and the board was reset.
    AutoReset,
}

/// Owns the board and drives the scheduler from host time.
///
/// All time arguments are host timestamps from any monotonic source. The host
/// calls [`poll`](Self::poll) often (every frame, or at the tick interval);
/// the controller decides when a tick or the automatic reset is due.
///
/// # Example
///
/// ```rust,ignore
/// use hanoi_motion::{HanoiConfig, PlaybackController, Timestamp};
///
/// let mut hanoi = PlaybackController::new(HanoiConfig::default(), renderer);
/// hanoi.start(Timestamp::ZERO);
/// loop {
///     hanoi.poll(Timestamp(elapsed()))?;
/// }
/// ```
pub struct PlaybackController<R: Renderer> {
    /// Board, disk and timing configuration.
    config: HanoiConfig,

    /// Disks requested by the last configure.
    disk_count: usize,

    /// Current speed multiplier.
    speed: SpeedMultiplier,

    /// Pegs and disks.
    tower: Tower<R::Handle>,

    /// Move and leg queues.
    scheduler: MotionScheduler,

    /// Current state.
    state: PlaybackState,

    /// Last status reported.
    status: Status,

    /// Animation time base.
    clock: AnimationClock,

    /// Armed while Running.
    ticker: Option<RepeatingTask>,

    /// Armed while Finishing.
    finish_timer: Option<OneShot>,

    /// Drawing surface.
    renderer: R,
}

impl<R: Renderer> PlaybackController<R> {
    /// Create a controller and lay out the initial tower.
    ///
    /// Disk count and speed come from `config`; the controller starts Idle.
    /// Playback values that would stall the animation are clamped as in
    /// [`PlaybackConfig::clamped`](crate::config::PlaybackConfig::clamped).
    pub fn new(mut config: HanoiConfig, renderer: R) -> Self {
        config.playback = config.playback.clamped();
        let disk_count = config.disks.count.min(MAX_DISKS);
        let speed = config.playback.speed;
        let mut controller = Self {
            config,
            disk_count,
            speed,
            tower: Tower::empty(),
            scheduler: MotionScheduler::new(),
            state: PlaybackState::Idle,
            status: Status::Empty,
            clock: AnimationClock::new(),
            ticker: None,
            finish_timer: None,
            renderer,
        };
        controller.reset();
        controller
    }

    /// Get the configuration.
    #[inline]
    pub fn config(&self) -> &HanoiConfig {
        &self.config
    }

    /// Get the current state.
    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Get the last status reported.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Disks requested by the last configure (before truncation).
    #[inline]
    pub fn requested_disk_count(&self) -> usize {
        self.disk_count
    }

    /// Get the current speed multiplier.
    #[inline]
    pub fn speed(&self) -> SpeedMultiplier {
        self.speed
    }

    /// Get the pegs and disks.
    #[inline]
    pub fn tower(&self) -> &Tower<R::Handle> {
        &self.tower
    }

    /// Get the move and leg queues.
    #[inline]
    pub fn scheduler(&self) -> &MotionScheduler {
        &self.scheduler
    }

    /// Moves not yet started.
    #[inline]
    pub fn moves_remaining(&self) -> usize {
        self.scheduler.moves_remaining()
    }

    /// Check if the automatic reset is pending.
    #[inline]
    pub fn is_reset_pending(&self) -> bool {
        self.finish_timer.is_some()
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get the renderer mutably.
    #[inline]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consume the controller, returning the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Apply a new disk count and speed, then reset.
    ///
    /// Out-of-range values are clamped rather than rejected: the count is
    /// capped at [`MAX_DISKS`] (and further by disk widths), the speed as in
    /// [`SpeedMultiplier::clamped`].
    pub fn configure(&mut self, disk_count: usize, speed: f32) {
        self.disk_count = disk_count.min(MAX_DISKS);
        self.speed = SpeedMultiplier::clamped(speed);
        self.reset();
    }

    /// Change the speed without resetting.
    ///
    /// Takes effect from the next move; legs already built keep their timing.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = SpeedMultiplier::clamped(speed);
    }

    /// Start or resume playback.
    ///
    /// Only effective when Idle. Returns `true` if playback started.
    pub fn start(&mut self, now: Timestamp) -> bool {
        if self.state != PlaybackState::Idle {
            return false;
        }

        let t = self.clock.read(now);
        self.scheduler.resume(t);
        self.ticker = Some(RepeatingTask::new(
            now,
            self.config.playback.tick_interval(),
        ));
        self.state = PlaybackState::Running;

        #[cfg(feature = "defmt")]
        defmt::info!("playback started, {} moves queued", self.scheduler.moves_remaining());

        true
    }

    /// Pause playback, keeping the queued moves and the active leg.
    ///
    /// Only effective when Running. Returns `true` if playback stopped.
    pub fn stop(&mut self, now: Timestamp) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }

        self.ticker = None;
        let t = self.clock.read(now);
        self.scheduler.pause(t);
        self.state = PlaybackState::Idle;

        #[cfg(feature = "defmt")]
        defmt::info!("playback stopped");

        true
    }

    /// The start/stop button.
    ///
    /// Stopping from here aborts: the board is reset and in-flight progress
    /// is discarded. Use [`stop`](Self::stop) for a resumable pause.
    pub fn toggle_start_stop(&mut self, now: Timestamp) {
        if self.state == PlaybackState::Running {
            self.stop(now);
            self.reset();
        } else {
            self.start(now);
        }
    }

    /// Rebuild the board and solution, leaving the controller Idle.
    ///
    /// Cancels the tick task and any pending automatic reset, redraws the
    /// tower for the configured disk count and clears the status. Safe to
    /// call from any state.
    pub fn reset(&mut self) {
        self.finish_timer = None;
        self.ticker = None;

        self.scheduler.clear();
        self.tower.clear(&mut self.renderer);
        self.tower = Tower::build(&self.config, self.disk_count, &mut self.renderer);
        self.scheduler.load(solve(
            self.tower.disk_count() as u32,
            PegId::Left,
            PegId::Right,
        ));

        self.set_status(Status::Empty);
        self.state = PlaybackState::Idle;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "reset: {} disks, {} moves",
            self.tower.disk_count(),
            self.scheduler.moves_remaining()
        );
    }

    /// Advance timers to host time `now`.
    ///
    /// Runs at most one scheduler tick. When the final move completes the
    /// tick task is disarmed and the automatic reset armed; once that is due
    /// the board is reset.
    ///
    /// # Errors
    ///
    /// Propagates tower errors from the scheduler; these do not occur for
    /// solver-generated sequences.
    pub fn poll(&mut self, now: Timestamp) -> Result<PollEvent> {
        if let Some(timer) = self.finish_timer {
            if !timer.is_due(now) {
                return Ok(PollEvent::Waiting);
            }
            self.reset();
            return Ok(PollEvent::AutoReset);
        }

        if self.state != PlaybackState::Running {
            return Ok(PollEvent::Waiting);
        }

        let Some(ticker) = self.ticker.as_mut() else {
            return Ok(PollEvent::Waiting);
        };
        if !ticker.fire(now) {
            return Ok(PollEvent::Waiting);
        }

        let t = self.clock.read(now);
        let builder = PathBuilder::new(
            &self.config.geometry,
            self.config.playback.pixel_speed(self.speed),
        );
        let outcome = self
            .scheduler
            .tick(t, &mut self.tower, &builder, &mut self.renderer)?;

        match outcome {
            TickOutcome::MoveStarted { remaining } => {
                self.set_status(Status::MovesRemaining(remaining));
            }
            TickOutcome::Complete => self.finish(now),
            TickOutcome::Moving | TickOutcome::Idle => {}
        }

        Ok(PollEvent::Ticked(outcome))
    }

    /// Play the whole sequence, sleeping between polls (blocking).
    ///
    /// Starts playback if Idle, then polls at the tick interval using `delay`
    /// until the automatic reset after the last move. Host time advances by
    /// exactly the time slept. Returns the host time at the reset.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`poll`](Self::poll).
    pub fn run_blocking<D: DelayNs>(
        &mut self,
        start: Timestamp,
        delay: &mut D,
    ) -> Result<Timestamp> {
        let mut now = start;
        self.start(now);

        loop {
            if self.poll(now)? == PollEvent::AutoReset {
                return Ok(now);
            }
            if self.state == PlaybackState::Idle {
                return Ok(now);
            }

            let wait_ms = match self.finish_timer {
                Some(timer) => ceilf((timer.due() - now).0 * 1000.0).max(1.0) as u32,
                None => self.config.playback.tick_interval_ms,
            };
            delay.delay_ms(wait_ms);
            now = now + Seconds::from_millis(wait_ms);
        }
    }

    fn finish(&mut self, now: Timestamp) {
        self.ticker = None;
        self.set_status(Status::Finished);
        self.set_status(Status::Resetting {
            seconds: self.config.playback.finish_delay_secs(),
        });
        self.state = PlaybackState::Finishing;
        self.finish_timer = Some(OneShot::new(now, self.config.playback.finish_delay()));

        #[cfg(feature = "defmt")]
        defmt::info!("sequence complete, resetting in {} ms", self.config.playback.finish_delay_ms);
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
        self.renderer.status_changed(&status);
    }
}
