//! Motion scheduling - advances legs against time.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::config::units::Seconds;
use crate::error::{Result, TowerError};
use crate::render::Renderer;
use crate::solver::{Move, PegId};
use crate::tower::Tower;

use super::leg::Leg;
use super::path::{PathBuilder, LEGS_PER_MOVE};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// A new move was dequeued and its first leg advanced.
    ///
    /// `remaining` counts the queued moves including this one.
    MoveStarted {
        /// Moves left before this one was taken.
        remaining: usize,
    },
    /// The active leg advanced.
    Moving,
    /// The last move finished; reported once per loaded sequence.
    Complete,
    /// Nothing to do until a new sequence is loaded.
    Idle,
}

/// Consumes a move sequence, interpolating one leg at a time.
#[derive(Debug, Clone, Default)]
pub struct MotionScheduler {
    /// Moves not yet started.
    moves: VecDeque<Move>,

    /// Legs of the active move, front is interpolating.
    legs: heapless::Deque<Leg, LEGS_PER_MOVE>,

    /// Peg holding the disk in flight (it is always on top there).
    active: Option<PegId>,

    /// Time the front leg started.
    leg_start: Seconds,

    /// Progress on the front leg while paused.
    paused_elapsed: Option<Seconds>,

    /// Completion already reported.
    complete: bool,
}

impl MotionScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending work with a fresh move sequence.
    pub fn load(&mut self, moves: Vec<Move>) {
        self.clear();
        self.moves = moves.into();
    }

    /// Drop all moves and legs.
    pub fn clear(&mut self) {
        self.moves.clear();
        self.legs.clear();
        self.active = None;
        self.leg_start = Seconds::ZERO;
        self.paused_elapsed = None;
        self.complete = false;
    }

    /// Moves not yet started.
    #[inline]
    pub fn moves_remaining(&self) -> usize {
        self.moves.len()
    }

    /// Moves not yet started, in order.
    pub fn pending_moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Legs left on the active move, including the one interpolating.
    #[inline]
    pub fn legs_remaining(&self) -> usize {
        self.legs.len()
    }

    /// The leg currently interpolating.
    #[inline]
    pub fn active_leg(&self) -> Option<&Leg> {
        self.legs.front()
    }

    /// Check if completion has been reported.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Check if progress is frozen by [`pause`](Self::pause).
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused_elapsed.is_some()
    }

    /// Freeze progress on the active leg.
    pub fn pause(&mut self, now: Seconds) {
        if !self.legs.is_empty() && self.paused_elapsed.is_none() {
            self.paused_elapsed = Some(now - self.leg_start);
        }
    }

    /// Continue the active leg from where [`pause`](Self::pause) left it.
    pub fn resume(&mut self, now: Seconds) {
        if let Some(elapsed) = self.paused_elapsed.take() {
            self.leg_start = now - elapsed;
        }
    }

    /// Advance the animation to `now`.
    ///
    /// With no legs pending the next move is taken: the disk is transferred
    /// between pegs right away and its three legs are built. The front leg is
    /// then interpolated and the disk's new position pushed to `renderer`.
    /// A leg that reaches its end is dropped and the next one starts timing
    /// from `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the next move is illegal for the current tower.
    /// The move stays queued and nothing is drawn.
    pub fn tick<H, R>(
        &mut self,
        now: Seconds,
        tower: &mut Tower<H>,
        builder: &PathBuilder<'_>,
        renderer: &mut R,
    ) -> Result<TickOutcome>
    where
        H: Copy,
        R: Renderer<Handle = H>,
    {
        if self.complete {
            return Ok(TickOutcome::Idle);
        }

        let mut started = None;
        if self.legs.is_empty() {
            let remaining = self.moves.len();
            let Some(mv) = self.moves.pop_front() else {
                self.active = None;
                self.complete = true;
                return Ok(TickOutcome::Complete);
            };

            if let Err(err) = tower.transfer(mv) {
                self.moves.push_front(mv);
                return Err(err);
            }

            let height = tower.peg(mv.to).height();
            let disk = tower.top_mut(mv.to).ok_or(TowerError::EmptyPeg(mv.to))?;
            for leg in builder.build(mv, disk, height) {
                // Exactly LEGS_PER_MOVE fit in an empty queue
                let _ = self.legs.push_back(leg);
            }

            self.active = Some(mv.to);
            self.leg_start = now;
            self.paused_elapsed = None;
            started = Some(remaining);
        }

        let (Some(leg), Some(peg)) = (self.legs.front().copied(), self.active) else {
            return Ok(TickOutcome::Idle);
        };

        let t = leg.fraction(now - self.leg_start);
        let point = leg.point_at(t);
        if let Some(disk) = tower.top_mut(peg) {
            disk.set_position(point);
            let (x, y) = point.rounded();
            renderer.set_disk_position(disk.handle(), x, y);
        }

        if t >= 1.0 {
            self.legs.pop_front();
            self.leg_start = now;
        }

        Ok(match started {
            Some(remaining) => TickOutcome::MoveStarted { remaining },
            None => TickOutcome::Moving,
        })
    }
}
