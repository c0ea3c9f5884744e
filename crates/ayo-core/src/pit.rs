//! Board pit representation.

use crate::Side;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when converting an out-of-range index into a [`Pit`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("pit index {0} is out of range (expected 0-11)")]
pub struct PitError(pub usize);

/// A pit on the Ayo board, indexed 0-11.
///
/// Pits 0-5 belong to [`Side::A`] and pits 6-11 to [`Side::B`]. Sowing runs
/// in increasing index order and wraps from 11 back to 0.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Pit(u8);

impl Pit {
    /// Number of pits on the board.
    pub const COUNT: usize = 12;

    /// Number of pits on each side.
    pub const PER_SIDE: usize = 6;

    /// The first pit (index 0, side A).
    pub const FIRST: Pit = Pit(0);

    /// The last pit (index 11, side B).
    pub const LAST: Pit = Pit(11);

    /// Creates a pit from its index (0-11).
    #[inline]
    pub const fn new(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Pit(index as u8))
        } else {
            None
        }
    }

    /// Returns the index (0-11).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the side that owns this pit.
    #[inline]
    pub const fn side(self) -> Side {
        if (self.0 as usize) < Self::PER_SIDE {
            Side::A
        } else {
            Side::B
        }
    }

    /// Returns the next pit in sowing order, wrapping from 11 to 0.
    #[inline]
    pub const fn next(self) -> Self {
        Pit((self.0 + 1) % Self::COUNT as u8)
    }

    /// Returns the previous pit, wrapping from 0 to 11.
    #[inline]
    pub const fn prev(self) -> Self {
        Pit((self.0 + Self::COUNT as u8 - 1) % Self::COUNT as u8)
    }

    /// Iterates over all pits in index order.
    pub fn all() -> impl Iterator<Item = Pit> {
        (0..Self::COUNT as u8).map(Pit)
    }
}

impl TryFrom<usize> for Pit {
    type Error = PitError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Pit::new(index).ok_or(PitError(index))
    }
}

impl From<Pit> for usize {
    fn from(pit: Pit) -> Self {
        pit.index()
    }
}

impl fmt::Debug for Pit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pit({})", self.0)
    }
}

impl fmt::Display for Pit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pit_new() {
        assert_eq!(Pit::new(0).map(Pit::index), Some(0));
        assert_eq!(Pit::new(11).map(Pit::index), Some(11));
        assert_eq!(Pit::new(12), None);
    }

    #[test]
    fn pit_side() {
        assert_eq!(Pit::new(5).unwrap().side(), Side::A);
        assert_eq!(Pit::new(6).unwrap().side(), Side::B);
    }

    #[test]
    fn next_and_prev_wrap() {
        let last = Pit::new(11).unwrap();
        let first = Pit::new(0).unwrap();
        assert_eq!(last.next(), first);
        assert_eq!(first.prev(), last);
        assert_eq!(Pit::new(4).unwrap().next().index(), 5);
    }

    #[test]
    fn all_pits() {
        assert_eq!(Pit::all().count(), Pit::COUNT);
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(Pit::try_from(3usize).map(Pit::index), Ok(3));
        assert_eq!(Pit::try_from(12usize), Err(PitError(12)));
    }

    #[test]
    fn serde_uses_plain_index() {
        let pit = Pit::new(7).unwrap();
        assert_eq!(serde_json::to_string(&pit).unwrap(), "7");
        assert_eq!(serde_json::from_str::<Pit>("7").unwrap(), pit);
        assert!(serde_json::from_str::<Pit>("12").is_err());
    }
}
