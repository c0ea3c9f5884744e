//! Game management with move history.
//!
//! The [`Game`] struct owns the live position and is the only thing that
//! mutates it. It records every applied move and can be reset in place for
//! a rematch.

use crate::movegen::MoveOutcome;
use crate::rules::{GameResult, RuleSet, StandardAyo};
use crate::{MoveList, Position, Scoreboard};
use ayo_core::{NotationError, Pit, Side};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A recorded move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMove {
    /// What the move did.
    pub outcome: MoveOutcome,
    /// The position before the move.
    pub position_before: Position,
}

/// Error type for game operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
    /// The index does not name a pit.
    #[error("pit {0} is off the board")]
    PitOutOfRange(usize),
    /// The pit belongs to the side not on move.
    #[error("pit {pit} belongs to side {}, but side {} is to move", .side.opposite(), .side)]
    NotYourPit { pit: Pit, side: Side },
    /// The pit holds no seeds.
    #[error("pit {0} is empty")]
    EmptyPit(Pit),
}

/// A complete Ayo game with history tracking.
///
/// Unlike [`Position`], which is a single board state, `Game` keeps the
/// move history and the starting position.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current position.
    position: Position,
    /// Move history.
    moves: Vec<GameMove>,
    /// Starting position.
    start_pos: Position,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_position(StandardAyo.initial_position())
    }

    /// Creates a game from a custom starting position.
    pub fn from_position(position: Position) -> Self {
        Game {
            position,
            moves: Vec::new(),
            start_pos: position,
        }
    }

    /// Creates a game from a notation string.
    pub fn from_notation(s: &str) -> Result<Self, NotationError> {
        Ok(Self::from_position(Position::from_notation(s)?))
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the starting position.
    pub fn start_position(&self) -> &Position {
        &self.start_pos
    }

    /// Returns the seed counts of all twelve pits.
    pub fn board(&self) -> &[u32; Pit::COUNT] {
        &self.position.pits
    }

    /// Returns the captured totals.
    pub fn scores(&self) -> Scoreboard {
        self.position.scores
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Side {
        self.position.side_to_move
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.position.terminal
    }

    /// Returns all valid moves in the current position.
    pub fn legal_moves(&self) -> MoveList {
        StandardAyo.generate_moves(&self.position)
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of moves played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the side to move may play the pit at `index`.
    pub fn is_valid_move(&self, index: usize) -> bool {
        StandardAyo.is_legal(&self.position, index)
    }

    /// Plays the pit at `index` for the side to move.
    ///
    /// Returns false and leaves the game untouched if the move is invalid.
    pub fn apply_move(&mut self, index: usize) -> bool {
        self.try_apply_move(index).is_ok()
    }

    /// Plays the pit at `index`, reporting why the move was rejected.
    ///
    /// The game is left untouched on error.
    pub fn try_apply_move(&mut self, index: usize) -> Result<GameMove, GameError> {
        let pit = self.check_move(index)?;

        let position_before = self.position;
        let (next, outcome) = StandardAyo.make_move(&self.position, pit);
        self.position = next;

        let record = GameMove {
            outcome,
            position_before,
        };
        self.moves.push(record);

        tracing::trace!(
            side = %outcome.side,
            pit = %outcome.pit,
            last = %outcome.last,
            captured = outcome.captured,
            position = %self.position,
            "move applied"
        );
        if outcome.ended {
            tracing::debug!(
                plies = self.moves.len(),
                score_a = self.position.scores.get(Side::A),
                score_b = self.position.scores.get(Side::B),
                "game over"
            );
        }

        Ok(record)
    }

    fn check_move(&self, index: usize) -> Result<Pit, GameError> {
        if self.position.terminal {
            return Err(GameError::GameAlreadyOver);
        }
        let pit = Pit::new(index).ok_or(GameError::PitOutOfRange(index))?;
        let side = self.position.side_to_move;
        if pit.side() != side {
            return Err(GameError::NotYourPit { pit, side });
        }
        if self.position.seeds(pit) == 0 {
            return Err(GameError::EmptyPit(pit));
        }
        Ok(pit)
    }

    /// Returns the result once the game is over, `None` while it is in
    /// progress.
    pub fn winner(&self) -> Option<GameResult> {
        StandardAyo.game_result(&self.position)
    }

    /// Restarts from the standard starting position on the same instance,
    /// clearing the history.
    pub fn reset(&mut self) {
        let start = StandardAyo.initial_position();
        self.position = start;
        self.start_pos = start;
        self.moves.clear();
    }

    /// Returns the current position as a notation string.
    pub fn to_notation(&self) -> String {
        self.position.to_notation()
    }
}
