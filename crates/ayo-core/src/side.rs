//! Player side representation.

use crate::Pit;
use serde::{Deserialize, Serialize};

/// Represents the two players in Ayo.
///
/// Side A owns pits 0-5, side B owns pits 6-11. Side A moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    A = 0,
    B = 1,
}

impl Side {
    /// Both sides, in move order.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// Returns the opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Returns the index (0 for A, 1 for B).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the index of the first pit owned by this side.
    #[inline]
    pub const fn first_pit(self) -> usize {
        self.index() * Pit::PER_SIDE
    }

    /// Returns the pit indices owned by this side.
    #[inline]
    pub const fn pit_range(self) -> std::ops::Range<usize> {
        self.first_pit()..self.first_pit() + Pit::PER_SIDE
    }

    /// Returns true if the pit index belongs to this side.
    #[inline]
    pub const fn owns(self, index: usize) -> bool {
        index >= self.first_pit() && index < self.first_pit() + Pit::PER_SIDE
    }

    /// Iterates over the pits owned by this side in index order.
    pub fn pits(self) -> impl Iterator<Item = Pit> {
        self.pit_range().filter_map(Pit::new)
    }

    /// Parses a side from its notation character ('a' or 'b', any case).
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Side::A),
            'b' => Some(Side::B),
            _ => None,
        }
    }

    /// Returns the notation character.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Side::A => 'a',
            Side::B => 'b',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}
