//! Game execution logic for running matches between Ayo bots.
//!
//! This module provides the [`GameRunner`] struct for playing single games
//! between two [`Bot`]s and [`run_match`] for playing a series of them.

use crate::config::PlayerConfig;
use ayo_ai::{Bot, Difficulty};
use ayo_core::{Pit, Side};
use ayo_engine::{Game, GameError, GameMove, GameResult, Position, Scoreboard};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during game execution.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// A bot chose a pit the engine rejected.
    #[error("Invalid move {pit}: {source}")]
    InvalidMove {
        pit: Pit,
        #[source]
        source: GameError,
    },
}

/// A single move as recorded in a match report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,
    /// The pit that was played.
    pub pit: Pit,
    /// Seeds captured by the move.
    pub captured: u32,
    /// Seeds swept into each side's score if the move ended the game.
    #[serde(skip_serializing_if = "is_zero")]
    pub swept: [u32; 2],
}

fn is_zero(swept: &[u32; 2]) -> bool {
    swept == &[0, 0]
}

impl From<&GameMove> for MoveRecord {
    fn from(record: &GameMove) -> Self {
        MoveRecord {
            side: record.outcome.side,
            pit: record.outcome.pit,
            captured: record.outcome.captured,
            swept: record.outcome.swept,
        }
    }
}

/// The outcome of an arena game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    /// Side A finished with more seeds.
    AWins,
    /// Side B finished with more seeds.
    BWins,
    /// Both sides finished level.
    Tie,
    /// The game hit the ply limit, or the side to move had no move.
    Unfinished,
}

impl From<Option<GameResult>> for MatchResult {
    fn from(result: Option<GameResult>) -> Self {
        match result {
            Some(GameResult::Win(Side::A)) => MatchResult::AWins,
            Some(GameResult::Win(Side::B)) => MatchResult::BWins,
            Some(GameResult::Tie) => MatchResult::Tie,
            None => MatchResult::Unfinished,
        }
    }
}

/// The record of a completed game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Opening position in notation.
    pub opening: String,
    /// Moves in play order.
    pub moves: Vec<MoveRecord>,
    /// The outcome of the game.
    pub result: MatchResult,
    /// Final captured totals.
    pub scores: Scoreboard,
    /// Final position in notation.
    pub final_position: String,
}

/// Plays games between two bots.
///
/// # Example
///
/// ```
/// use ayo_ai::{Bot, Difficulty};
/// use ayo_arena::game_runner::GameRunner;
///
/// let a = Bot::with_seed(Difficulty::Hard, 1);
/// let b = Bot::with_seed(Difficulty::Easy, 2);
/// let mut runner = GameRunner::new(a, b, 1000);
/// let record = runner.play_game(None).unwrap();
/// println!("Game result: {:?}", record.result);
/// ```
pub struct GameRunner {
    /// The bot playing side A.
    a: Bot,
    /// The bot playing side B.
    b: Bot,
    /// Plies after which a game is abandoned.
    max_plies: usize,
}

impl GameRunner {
    /// Creates a new game runner.
    pub fn new(a: Bot, b: Bot, max_plies: usize) -> Self {
        Self { a, b, max_plies }
    }

    /// Plays a complete game, from `opening` or the standard starting
    /// position.
    ///
    /// Bots alternate as the engine dictates until the game ends, the ply
    /// limit is reached, or the side to move has no move.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::InvalidMove`] if a bot picks a pit the engine
    /// rejects.
    pub fn play_game(&mut self, opening: Option<&Position>) -> Result<GameRecord, RunnerError> {
        let mut game = opening.map_or_else(Game::new, |p| Game::from_position(*p));

        while !game.is_terminal() && game.ply_count() < self.max_plies {
            let bot = match game.side_to_move() {
                Side::A => &mut self.a,
                Side::B => &mut self.b,
            };
            let Some(pit) = bot.choose_move(&game) else {
                tracing::warn!(
                    side = %game.side_to_move(),
                    position = %game.position(),
                    "side to move has no valid move"
                );
                break;
            };
            game.try_apply_move(pit.index())
                .map_err(|source| RunnerError::InvalidMove { pit, source })?;
        }

        if !game.is_terminal() {
            tracing::warn!(plies = game.ply_count(), "game stopped before it ended");
        }

        Ok(GameRecord {
            opening: game.start_position().to_notation(),
            moves: game.move_history().iter().map(MoveRecord::from).collect(),
            result: MatchResult::from(game.winner()),
            scores: game.scores(),
            final_position: game.to_notation(),
        })
    }
}

/// Everything needed to play a match.
#[derive(Debug, Clone)]
pub struct MatchPlan {
    /// Name of the side A player.
    pub a_name: String,
    /// Side A player settings.
    pub a: PlayerConfig,
    /// Name of the side B player.
    pub b_name: String,
    /// Side B player settings.
    pub b: PlayerConfig,
    /// Number of games.
    pub games: u32,
    /// Openings cycled through game by game; empty means the standard start.
    pub openings: Vec<Position>,
    /// Plies after which a game is abandoned.
    pub max_plies: usize,
    /// Base seed; players without their own seed derive theirs from it.
    pub seed: u64,
}

impl MatchPlan {
    fn bot(&self, side: Side) -> Bot {
        let (player, offset) = match side {
            Side::A => (&self.a, 0),
            Side::B => (&self.b, 1),
        };
        let seed = player.seed.unwrap_or(self.seed.wrapping_add(offset));
        Bot::with_seed(player.difficulty, seed)
    }
}

/// Win/tie tallies for a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub a_wins: u32,
    pub b_wins: u32,
    pub ties: u32,
    pub unfinished: u32,
}

impl Tally {
    /// Counts one result.
    pub fn record(&mut self, result: MatchResult) {
        match result {
            MatchResult::AWins => self.a_wins += 1,
            MatchResult::BWins => self.b_wins += 1,
            MatchResult::Tie => self.ties += 1,
            MatchResult::Unfinished => self.unfinished += 1,
        }
    }
}

/// The outcome of a whole match.
#[derive(Debug, Clone)]
pub struct MatchSummary {
    pub a_name: String,
    pub a_difficulty: Difficulty,
    pub b_name: String,
    pub b_difficulty: Difficulty,
    pub seed: u64,
    pub tally: Tally,
    pub games: Vec<GameRecord>,
}

/// Plays every game of a match with the same two bots.
///
/// # Errors
///
/// Stops at the first game that fails with a [`RunnerError`].
pub fn run_match(plan: &MatchPlan) -> Result<MatchSummary, RunnerError> {
    let mut runner = GameRunner::new(plan.bot(Side::A), plan.bot(Side::B), plan.max_plies);
    let mut tally = Tally::default();
    let mut games = Vec::with_capacity(plan.games as usize);

    for i in 0..plan.games as usize {
        let opening = match plan.openings.len() {
            0 => None,
            n => Some(&plan.openings[i % n]),
        };
        let record = runner.play_game(opening)?;
        tally.record(record.result);

        tracing::info!(
            game = i + 1,
            result = ?record.result,
            plies = record.moves.len(),
            score_a = record.scores.get(Side::A),
            score_b = record.scores.get(Side::B),
            "game finished"
        );
        games.push(record);
    }

    Ok(MatchSummary {
        a_name: plan.a_name.clone(),
        a_difficulty: plan.a.difficulty,
        b_name: plan.b_name.clone(),
        b_difficulty: plan.b.difficulty,
        seed: plan.seed,
        tally,
        games,
    })
}
