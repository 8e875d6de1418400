//! Explicit-stack move generation.

use alloc::vec::Vec;

use super::moves::{Move, PegId};
use super::recursive::reserve_for;

/// Pending work on the explicit stack.
#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Move a sub-tower of `n` disks.
    Solve { n: u32, from: PegId, to: PegId },
    /// Emit a single move.
    Emit(Move),
}

/// Solve the tower without native recursion.
///
/// Produces exactly the same sequence as [`solve`](super::solve). The stack
/// holds at most `2n + 1` frames.
pub fn solve_iterative(n: u32, from: PegId, to: PegId) -> Vec<Move> {
    let mut moves = Vec::with_capacity(reserve_for(n));
    if from == to {
        return moves;
    }

    let mut stack = Vec::with_capacity(2 * n as usize + 1);
    stack.push(Frame::Solve { n, from, to });

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Emit(mv) => moves.push(mv),
            Frame::Solve { n: 0, .. } => {}
            Frame::Solve { n, from, to } => {
                let spare = from.spare(to);
                // Pushed in reverse of execution order
                stack.push(Frame::Solve { n: n - 1, from: spare, to });
                stack.push(Frame::Emit(Move::new(from, to)));
                stack.push(Frame::Solve { n: n - 1, from, to: spare });
            }
        }
    }

    moves
}
