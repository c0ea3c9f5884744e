//! A computer player with its own random source.

use crate::{choose_move, Difficulty};
use ayo_core::Pit;
use ayo_engine::Game;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A computer-controlled side.
///
/// Seeded bots are fully reproducible: the same seed and the same sequence
/// of games yield the same moves.
#[derive(Debug, Clone)]
pub struct Bot {
    difficulty: Difficulty,
    rng: ChaCha8Rng,
}

impl Bot {
    /// Creates a bot seeded from system entropy.
    pub fn new(difficulty: Difficulty) -> Self {
        Bot {
            difficulty,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a bot with a fixed seed.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Bot {
            difficulty,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the bot's difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Picks a pit for the side to move in `game`, or `None` if it has no
    /// valid move.
    pub fn choose_move(&mut self, game: &Game) -> Option<Pit> {
        choose_move(game.position(), self.difficulty, &mut self.rng)
    }
}
