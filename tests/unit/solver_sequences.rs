//! Unit tests for known solver sequences.

use hanoi_motion::{solve, solve_iterative, Move, PegId};

fn pairs(moves: &[Move]) -> Vec<(usize, usize)> {
    moves.iter().map(|m| m.indices()).collect()
}

/// Test the single-disk solution for every peg pair.
#[test]
fn test_single_disk_is_one_move() {
    for from in PegId::ALL {
        for to in PegId::ALL {
            if from != to {
                assert_eq!(solve(1, from, to), [Move::new(from, to)]);
            }
        }
    }
}

/// Test the two-disk solution from left to right.
#[test]
fn test_two_disks() {
    assert_eq!(
        pairs(&solve(2, PegId::Left, PegId::Right)),
        [(0, 1), (0, 2), (1, 2)]
    );
}

/// Test the full three-disk solution.
#[test]
fn test_three_disks() {
    assert_eq!(
        pairs(&solve(3, PegId::Left, PegId::Right)),
        [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]
    );
}

/// Test the iterative solver on a mid-sized tower.
#[test]
fn test_iterative_matches_on_ten_disks() {
    assert_eq!(
        solve_iterative(10, PegId::Middle, PegId::Left),
        solve(10, PegId::Middle, PegId::Left)
    );
}
