//! Ayo rules engine.
//!
//! This crate provides:
//! - [`Position`] - Board, scoreboard, side to move, and terminal flag
//! - [`Game`] - Game management with move history
//! - [`RuleSet`] - Trait for implementing rule variants
//! - Sowing, capture resolution, and end-of-game sweeps
//!
//! # Architecture
//!
//! A [`Position`] is a small `Copy` value. All rule logic is a pure function
//! from one position to the next, which lets move selectors simulate on a
//! private copy without ever touching the live game.
//!
//! # Example
//!
//! ```
//! use ayo_engine::{Game, StandardAyo};
//! use ayo_engine::rules::RuleSet;
//!
//! // Using Position directly (stateless)
//! let position = StandardAyo.initial_position();
//! let moves = StandardAyo.generate_moves(&position);
//! assert_eq!(moves.len(), 6);
//!
//! // Using Game for full game management
//! let mut game = Game::new();
//! assert!(game.apply_move(2));
//! assert!(!game.apply_move(2)); // side B to move now
//! assert_eq!(game.winner(), None);
//! ```

mod game;
pub mod movegen;
mod position;
pub mod rules;

pub use game::{Game, GameError, GameMove};
pub use movegen::{generate_moves, is_valid_move, make_move, MoveList, MoveOutcome};
pub use position::{Position, Scoreboard};
pub use rules::{GameResult, RuleSet, StandardAyo};
