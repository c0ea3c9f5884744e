//! Move generation and move application.
//!
//! A move picks up every seed in one of the mover's pits and sows them one
//! at a time into the pits that follow, skipping the origin pit. Captures are
//! then resolved backward from the last sown pit, and finally the end of the
//! game is checked.

use crate::Position;
use ayo_core::{Pit, Side};
use serde::{Deserialize, Serialize};

/// A list of moves with a fixed maximum capacity.
///
/// A side owns six pits, so there are never more than six valid moves.
#[derive(Clone)]
pub struct MoveList {
    moves: [Pit; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of valid moves in any position.
    pub const MAX_MOVES: usize = Pit::PER_SIDE;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Pit::FIRST; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, pit: Pit) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = pit;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Pit] {
        &self.moves[..self.len]
    }

    /// Returns true if the list contains the pit.
    #[inline]
    pub fn contains(&self, pit: Pit) -> bool {
        self.as_slice().contains(&pit)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Pit;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Pit;
    type IntoIter = std::slice::Iter<'a, Pit>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// What a single move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The side that moved.
    pub side: Side,
    /// The pit the seeds were picked up from.
    pub pit: Pit,
    /// Seeds picked up and sown.
    pub sown: u32,
    /// The pit that received the final seed.
    pub last: Pit,
    /// Seeds captured by the mover.
    pub captured: u32,
    /// Seeds swept into each side's score at the end of the game.
    pub swept: [u32; 2],
    /// Whether this move ended the game.
    pub ended: bool,
}

impl MoveOutcome {
    /// Total seeds credited to `side` by this move.
    pub fn gain(&self, side: Side) -> u32 {
        let captured = if side == self.side { self.captured } else { 0 };
        captured + self.swept[side.index()]
    }
}

/// Returns true if `index` names a pit the side to move may play.
///
/// Out-of-range indices, the opponent's pits, empty pits, and any pit once
/// the game is over are all invalid.
pub fn is_valid_move(position: &Position, index: usize) -> bool {
    !position.terminal
        && position.side_to_move.owns(index)
        && position.pits.get(index).is_some_and(|&seeds| seeds > 0)
}

/// Generates the valid moves for the side to move, in ascending pit order.
pub fn generate_moves(position: &Position) -> MoveList {
    let mut list = MoveList::new();
    if position.terminal {
        return list;
    }
    for pit in position.side_to_move.pits() {
        if position.seeds(pit) > 0 {
            list.push(pit);
        }
    }
    list
}

/// Makes a move on the position, returning the new position and what the
/// move did.
///
/// The move must be valid (see [`is_valid_move`]); this is only checked in
/// debug builds.
pub fn make_move(position: &Position, pit: Pit) -> (Position, MoveOutcome) {
    debug_assert!(is_valid_move(position, pit.index()));

    let mut next = *position;
    let side = next.side_to_move;

    let (sown, last) = sow(&mut next, pit);
    let captured = capture(&mut next, side, last);
    next.scores.add(side, captured);
    let swept = check_end(&mut next);

    if !next.terminal {
        next.side_to_move = side.opposite();
    }

    let outcome = MoveOutcome {
        side,
        pit,
        sown,
        last,
        captured,
        swept,
        ended: next.terminal,
    };
    (next, outcome)
}

/// Empties `origin` and sows its seeds into the following pits, skipping the
/// origin when the sowing laps the board. Returns the seed count and the last
/// sown pit.
fn sow(position: &mut Position, origin: Pit) -> (u32, Pit) {
    let seeds = position.pits[origin.index()];
    position.pits[origin.index()] = 0;

    let mut remaining = seeds;
    let mut current = origin;
    while remaining > 0 {
        current = current.next();
        if current == origin {
            continue;
        }
        position.pits[current.index()] += 1;
        remaining -= 1;
    }

    (seeds, current)
}

/// Walks backward from `last` while the pit is the opponent's and holds 2 or
/// 3 seeds, emptying each such pit. Returns the seeds taken.
fn capture(position: &mut Position, mover: Side, last: Pit) -> u32 {
    let opponent = mover.opposite();
    let mut captured = 0;
    let mut current = last;

    while opponent.owns(current.index()) && matches!(position.seeds(current), 2 | 3) {
        captured += position.seeds(current);
        position.pits[current.index()] = 0;
        current = current.prev();
    }

    captured
}

/// Marks the position terminal if a row is empty and sweeps the other row
/// into its owner's score. Returns the swept seeds per side.
fn check_end(position: &mut Position) -> [u32; 2] {
    let mut swept = [0; 2];
    let empty = Side::ALL.map(|side| position.row_is_empty(side));
    if !empty.contains(&true) {
        return swept;
    }

    position.terminal = true;
    for side in Side::ALL {
        if !empty[side.index()] {
            continue;
        }
        let owner = side.opposite();
        let seeds = position.row_total(owner);
        for index in owner.pit_range() {
            position.pits[index] = 0;
        }
        position.scores.add(owner, seeds);
        swept[owner.index()] += seeds;
    }
    swept
}
