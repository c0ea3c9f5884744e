//! JSON match reports.
//!
//! This module exports a finished match to JSON, including every game's move
//! list, for later review.

use crate::game_runner::{GameRecord, MatchSummary, Tally};
use chrono::Utc;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// JSON representation of a side's player.
#[derive(Serialize)]
struct PlayerJson<'a> {
    name: &'a str,
    difficulty: String,
}

/// JSON representation of a complete match.
#[derive(Serialize)]
struct MatchJson<'a> {
    /// Player on side A.
    a: PlayerJson<'a>,
    /// Player on side B.
    b: PlayerJson<'a>,
    /// Base seed, for replaying the match.
    seed: u64,
    /// Win/tie counts.
    results: &'a Tally,
    /// Every game in play order.
    games: &'a [GameRecord],
    /// ISO 8601 timestamp when the report was created.
    created_at: String,
}

/// Writes a match report as pretty-printed JSON.
///
/// # File Format
///
/// ```json
/// {
///   "a": { "name": "greedy", "difficulty": "hard" },
///   "b": { "name": "casual", "difficulty": "easy" },
///   "seed": 17,
///   "results": { "a_wins": 3, "b_wins": 1, "ties": 0, "unfinished": 0 },
///   "games": [
///     {
///       "opening": "4,4,4,4,4,4/4,4,4,4,4,4 a 0-0 *",
///       "moves": [{ "side": "A", "pit": 2, "captured": 0 }],
///       "result": "a_wins",
///       "scores": [30, 18],
///       "final_position": "0,0,0,0,0,0/0,0,0,0,0,0 b 30-18 #"
///     }
///   ],
///   "created_at": "2024-01-15T12:00:00Z"
/// }
/// ```
pub fn write_json<W: Write>(writer: W, summary: &MatchSummary) -> serde_json::Result<()> {
    let json = MatchJson {
        a: PlayerJson {
            name: &summary.a_name,
            difficulty: summary.a_difficulty.to_string(),
        },
        b: PlayerJson {
            name: &summary.b_name,
            difficulty: summary.b_difficulty.to_string(),
        },
        seed: summary.seed,
        results: &summary.tally,
        games: &summary.games,
        created_at: Utc::now().to_rfc3339(),
    };
    serde_json::to_writer_pretty(writer, &json)
}

/// Writes a match report to a file.
///
/// # Errors
///
/// Returns an `std::io::Error` if the file cannot be created or written.
pub fn write_json_file<P: AsRef<Path>>(path: P, summary: &MatchSummary) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_json(std::io::BufWriter::new(file), summary)?;
    Ok(())
}
