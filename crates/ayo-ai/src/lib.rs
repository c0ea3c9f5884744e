//! Move selection for Ayo.
//!
//! - [`choose_move`] picks a pit for the side to move at a given
//!   [`Difficulty`]
//! - [`capture_gain`] measures what a single move would earn
//! - [`Bot`] pairs a difficulty with its own seeded random source
//!
//! Selection only ever reads the live position. Hard mode simulates each
//! candidate on a copy.
//!
//! # Example
//!
//! ```
//! use ayo_ai::{Bot, Difficulty};
//! use ayo_engine::Game;
//!
//! let mut game = Game::new();
//! let mut bot = Bot::with_seed(Difficulty::Hard, 7);
//! while let Some(pit) = bot.choose_move(&game) {
//!     game.apply_move(pit.index());
//!     if game.ply_count() > 10 {
//!         break;
//!     }
//! }
//! ```

mod bot;
mod difficulty;
mod selector;

pub use bot::Bot;
pub use difficulty::Difficulty;
pub use selector::{capture_gain, choose_move};
