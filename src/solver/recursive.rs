//! Recursive move generation.

use alloc::vec::Vec;

use super::moves::{move_count, Move, PegId};

/// Largest capacity reserved up front for a solution.
const MAX_RESERVE: u64 = 1 << 20;

/// Solve the tower for `n` disks, moving them from `from` to `to`.
///
/// Returns the `2^n - 1` moves of the minimal solution in order. Recursion
/// depth is `n`, which is fine for realistic towers; see
/// [`solve_iterative`](super::solve_iterative) for pathological sizes.
/// Moving a tower onto its own peg needs no moves.
pub fn solve(n: u32, from: PegId, to: PegId) -> Vec<Move> {
    let mut moves = Vec::with_capacity(reserve_for(n));
    if from != to {
        solve_into(n, from, to, &mut moves);
    }
    moves
}

pub(super) fn reserve_for(n: u32) -> usize {
    move_count(n).min(MAX_RESERVE) as usize
}

fn solve_into(n: u32, from: PegId, to: PegId, out: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    let spare = from.spare(to);
    solve_into(n - 1, from, spare, out);
    out.push(Move::new(from, to));
    solve_into(n - 1, spare, to, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use PegId::{Left, Middle, Right};

    #[test]
    fn test_zero_disks() {
        assert!(solve(0, Left, Right).is_empty());
    }

    #[test]
    fn test_one_disk() {
        assert_eq!(solve(1, Middle, Left), [Move::new(Middle, Left)]);
    }

    #[test]
    fn test_two_disks() {
        assert_eq!(
            solve(2, Left, Right),
            [
                Move::new(Left, Middle),
                Move::new(Left, Right),
                Move::new(Middle, Right),
            ]
        );
    }

    #[test]
    fn test_three_disks() {
        let moves = solve(3, Left, Right);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves.first(), Some(&Move::new(Left, Right)));
        assert_eq!(moves.last(), Some(&Move::new(Left, Right)));
    }

    #[test]
    fn test_same_peg() {
        assert!(solve(4, Middle, Middle).is_empty());
    }
}
