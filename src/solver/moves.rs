//! Peg identifiers and moves.

/// Number of pegs on the board.
pub const PEG_COUNT: usize = 3;

/// One of the three pegs, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PegId {
    /// Leftmost peg (index 0), where the tower starts.
    Left,
    /// Middle peg (index 1).
    Middle,
    /// Rightmost peg (index 2), where the tower ends.
    Right,
}

impl PegId {
    /// All pegs in index order.
    pub const ALL: [PegId; PEG_COUNT] = [PegId::Left, PegId::Middle, PegId::Right];

    /// Get the peg from its index.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get the peg index (0, 1 or 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PegId::Left => 0,
            PegId::Middle => 1,
            PegId::Right => 2,
        }
    }

    /// The spare peg that is neither `self` nor `other`.
    ///
    /// Equivalent to `3 - (from + to)` on indices. When both pegs are the
    /// same there is no single spare; the peg after `self` is returned.
    #[inline]
    pub fn spare(self, other: PegId) -> PegId {
        match (self, other) {
            (PegId::Left, PegId::Middle) | (PegId::Middle, PegId::Left) => PegId::Right,
            (PegId::Left, PegId::Right) | (PegId::Right, PegId::Left) => PegId::Middle,
            (PegId::Middle, PegId::Right) | (PegId::Right, PegId::Middle) => PegId::Left,
            (PegId::Left, PegId::Left) => PegId::Middle,
            (PegId::Middle, PegId::Middle) => PegId::Right,
            (PegId::Right, PegId::Right) => PegId::Left,
        }
    }
}

/// A single disk relocation from one peg to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Move {
    /// Peg the disk is taken from.
    pub from: PegId,
    /// Peg the disk is placed on.
    pub to: PegId,
}

impl Move {
    /// Create a new move.
    #[inline]
    pub const fn new(from: PegId, to: PegId) -> Self {
        Self { from, to }
    }

    /// Move as a pair of peg indices.
    #[inline]
    pub fn indices(self) -> (usize, usize) {
        (self.from.index(), self.to.index())
    }
}

/// Number of moves in the minimal solution for `n` disks (`2^n - 1`).
///
/// Saturates at `u64::MAX` for `n >= 64`.
#[inline]
pub fn move_count(n: u32) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}
