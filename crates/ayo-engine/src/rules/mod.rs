//! Rule set abstraction for Ayo variants.
//!
//! This module provides the [`RuleSet`] trait which abstracts over different
//! sowing variants. [`Game`](crate::Game) delegates all rule logic to the
//! active rule set.

mod standard;

pub use standard::StandardAyo;

use crate::{MoveList, MoveOutcome, Position};
use ayo_core::{Pit, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One side finished with strictly more captured seeds.
    Win(Side),
    /// Both sides finished level.
    Tie,
}

impl GameResult {
    /// Determines the result from a final position's scores.
    pub fn from_scores(position: &Position) -> Self {
        let a = position.scores.get(Side::A);
        let b = position.scores.get(Side::B);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => GameResult::Win(Side::A),
            std::cmp::Ordering::Less => GameResult::Win(Side::B),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Returns the winning side, if any.
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameResult::Win(side) => Some(side),
            GameResult::Tie => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win(side) => write!(f, "Side {} wins", side),
            GameResult::Tie => write!(f, "Tie"),
        }
    }
}

/// Trait for implementing Ayo variants.
///
/// # Example
///
/// ```
/// use ayo_engine::StandardAyo;
/// use ayo_engine::rules::RuleSet;
///
/// let position = StandardAyo.initial_position();
/// let moves = StandardAyo.generate_moves(&position);
/// let (next, outcome) = StandardAyo.make_move(&position, moves[0]);
/// assert_eq!(outcome.sown, 4);
/// assert_eq!(next.total_seeds(), 48);
/// ```
pub trait RuleSet {
    /// Returns the initial position for this variant.
    fn initial_position(&self) -> Position;

    /// Generates all valid moves for the side to move, in ascending pit order.
    fn generate_moves(&self, position: &Position) -> MoveList;

    /// Returns true if the pit index is a valid move in the position.
    fn is_legal(&self, position: &Position, index: usize) -> bool;

    /// Makes a move on the position, returning the new position and what the
    /// move did.
    ///
    /// # Panics
    ///
    /// May panic if the move is not legal. Use [`is_legal`](RuleSet::is_legal)
    /// to check first, or use [`try_make_move`](RuleSet::try_make_move).
    fn make_move(&self, position: &Position, pit: Pit) -> (Position, MoveOutcome);

    /// Attempts to make a move, returning `None` if illegal.
    fn try_make_move(&self, position: &Position, index: usize) -> Option<(Position, MoveOutcome)> {
        if self.is_legal(position, index) {
            let pit = Pit::new(index)?;
            Some(self.make_move(position, pit))
        } else {
            None
        }
    }

    /// Returns the game result if the game is over, otherwise `None`.
    fn game_result(&self, position: &Position) -> Option<GameResult>;

    /// Returns true if the game is over.
    fn is_game_over(&self, position: &Position) -> bool {
        self.game_result(position).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_from_scores() {
        let a_wins = Position::from_notation("0,0,0,0,0,0/0,0,0,0,0,0 a 25-23 #").unwrap();
        let b_wins = Position::from_notation("0,0,0,0,0,0/0,0,0,0,0,0 a 20-28 #").unwrap();
        let tie = Position::from_notation("0,0,0,0,0,0/0,0,0,0,0,0 b 24-24 #").unwrap();
        assert_eq!(GameResult::from_scores(&a_wins), GameResult::Win(Side::A));
        assert_eq!(GameResult::from_scores(&b_wins), GameResult::Win(Side::B));
        assert_eq!(GameResult::from_scores(&tie), GameResult::Tie);
    }

    #[test]
    fn winner_side() {
        assert_eq!(GameResult::Win(Side::B).winner(), Some(Side::B));
        assert_eq!(GameResult::Tie.winner(), None);
    }

    #[test]
    fn display() {
        assert_eq!(GameResult::Win(Side::A).to_string(), "Side A wins");
        assert_eq!(GameResult::Tie.to_string(), "Tie");
    }
}
