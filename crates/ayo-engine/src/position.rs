//! Ayo position representation.

use ayo_core::{Notation, NotationError, Pit, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Captured seeds for each side.
///
/// A fixed two-slot table indexed by [`Side`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Scoreboard([u32; 2]);

impl Scoreboard {
    /// A scoreboard with both sides at zero.
    pub const ZERO: Scoreboard = Scoreboard([0, 0]);

    /// Creates a scoreboard from explicit totals.
    #[inline]
    pub const fn new(a: u32, b: u32) -> Self {
        Scoreboard([a, b])
    }

    /// Returns the captured total for a side.
    #[inline]
    pub const fn get(self, side: Side) -> u32 {
        self.0[side.index()]
    }

    /// Credits seeds to a side.
    #[inline]
    pub fn add(&mut self, side: Side, seeds: u32) {
        self.0[side.index()] += seeds;
    }

    /// Returns the sum of both sides' totals.
    #[inline]
    pub const fn total(self) -> u32 {
        self.0[0] + self.0[1]
    }

    /// Returns the raw totals, indexed by [`Side::index`].
    #[inline]
    pub const fn as_array(self) -> [u32; 2] {
        self.0
    }
}

impl Index<Side> for Scoreboard {
    type Output = u32;

    #[inline]
    fn index(&self, side: Side) -> &Self::Output {
        &self.0[side.index()]
    }
}

/// Complete Ayo position state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Seed counts, pits 0-11.
    pub pits: [u32; Pit::COUNT],

    /// Captured seeds per side.
    pub scores: Scoreboard,

    /// The side to move.
    pub side_to_move: Side,

    /// Set once a row has emptied. Never cleared by play.
    pub terminal: bool,
}

impl Position {
    /// Seeds placed in every pit at the start of a game.
    pub const SEEDS_PER_PIT: u32 = 4;

    /// Total seeds in a standard game.
    pub const TOTAL_SEEDS: u32 = Self::SEEDS_PER_PIT * Pit::COUNT as u32;

    /// Creates the standard starting position.
    pub const fn startpos() -> Self {
        Position {
            pits: [Self::SEEDS_PER_PIT; Pit::COUNT],
            scores: Scoreboard::ZERO,
            side_to_move: Side::A,
            terminal: false,
        }
    }

    /// Creates a position from a notation string.
    pub fn from_notation(s: &str) -> Result<Self, NotationError> {
        Ok(Self::from(Notation::parse(s)?))
    }

    /// Converts the position to its notation string.
    pub fn to_notation(&self) -> String {
        Notation::from(*self).to_string()
    }

    /// Returns the seeds in a pit.
    #[inline]
    pub const fn seeds(&self, pit: Pit) -> u32 {
        self.pits[pit.index()]
    }

    /// Returns the six pits of a side in index order.
    #[inline]
    pub fn row(&self, side: Side) -> &[u32] {
        &self.pits[side.pit_range()]
    }

    /// Returns the seeds left on a side's row.
    #[inline]
    pub fn row_total(&self, side: Side) -> u32 {
        self.row(side).iter().sum()
    }

    /// Returns true if every pit on a side's row is empty.
    #[inline]
    pub fn row_is_empty(&self, side: Side) -> bool {
        self.row(side).iter().all(|&seeds| seeds == 0)
    }

    /// Returns the seeds still on the board.
    #[inline]
    pub fn board_total(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// Returns the seeds on the board plus both captured totals.
    ///
    /// Play never changes this value.
    #[inline]
    pub fn total_seeds(&self) -> u32 {
        self.board_total() + self.scores.total()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl From<Notation> for Position {
    fn from(notation: Notation) -> Self {
        Position {
            pits: notation.pits,
            scores: Scoreboard(notation.scores),
            side_to_move: notation.side_to_move,
            terminal: notation.terminal,
        }
    }
}

impl From<Position> for Notation {
    fn from(position: Position) -> Self {
        Notation {
            pits: position.pits,
            side_to_move: position.side_to_move,
            scores: position.scores.as_array(),
            terminal: position.terminal,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Notation::from(*self))
    }
}
