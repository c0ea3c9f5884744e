//! Position notation parsing and serialization.
//!
//! A position is written on a single line:
//!
//! ```text
//! 4,4,4,4,4,4/4,4,4,4,4,4 a 0-0 *
//! ```
//!
//! The fields are the pits of side A and side B (index order, separated by
//! `/`), the side to move, the two captured totals, and the status (`*` for a
//! game in progress, `#` once it is over).

use crate::{Pit, Side};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing position notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid notation: expected 4 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid pit placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid side to move: expected 'a' or 'b', got '{0}'")]
    InvalidSide(String),

    #[error("invalid scores: {0}")]
    InvalidScores(String),

    #[error("invalid status: expected '*' or '#', got '{0}'")]
    InvalidStatus(String),

    #[error(
        "too many seeds: {0} on the board and in the scores, at most {max} allowed",
        max = Notation::MAX_SEEDS
    )]
    TooManySeeds(u64),
}

/// Parsed position notation.
///
/// This struct holds the raw parsed fields. The engine is responsible for
/// turning it into a playable position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notation {
    /// Seed counts, pits 0-11.
    pub pits: [u32; Pit::COUNT],
    /// Side to move.
    pub side_to_move: Side,
    /// Captured seeds, indexed by [`Side::index`].
    pub scores: [u32; 2],
    /// Whether the game is over.
    pub terminal: bool,
}

impl Notation {
    /// The starting position.
    pub const STARTPOS: &'static str = "4,4,4,4,4,4/4,4,4,4,4,4 a 0-0 *";

    /// Upper bound on the seeds a position may hold, pits and scores
    /// together. Keeps every count produced by play within `u32`.
    pub const MAX_SEEDS: u32 = 1_000;

    /// Parses a notation string.
    pub fn parse(s: &str) -> Result<Self, NotationError> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(NotationError::InvalidPartCount(parts.len()));
        }

        let pits = Self::parse_placement(parts[0])?;

        let mut side_chars = parts[1].chars();
        let side_to_move = match (side_chars.next(), side_chars.next()) {
            (Some(c), None) => Side::from_char(c),
            _ => None,
        }
        .ok_or_else(|| NotationError::InvalidSide(parts[1].to_string()))?;

        let scores = Self::parse_scores(parts[2])?;

        let terminal = match parts[3] {
            "*" => false,
            "#" => true,
            other => return Err(NotationError::InvalidStatus(other.to_string())),
        };

        let total: u64 = pits
            .iter()
            .chain(scores.iter())
            .map(|&count| u64::from(count))
            .sum();
        if total > u64::from(Self::MAX_SEEDS) {
            return Err(NotationError::TooManySeeds(total));
        }

        Ok(Notation {
            pits,
            side_to_move,
            scores,
            terminal,
        })
    }

    fn parse_placement(placement: &str) -> Result<[u32; Pit::COUNT], NotationError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 2 {
            return Err(NotationError::InvalidPlacement(format!(
                "expected 2 rows, got {}",
                rows.len()
            )));
        }

        let mut pits = [0u32; Pit::COUNT];
        for (side, row) in Side::ALL.into_iter().zip(rows) {
            let counts: Vec<&str> = row.split(',').collect();
            if counts.len() != Pit::PER_SIDE {
                return Err(NotationError::InvalidPlacement(format!(
                    "row {} has {} pits, expected {}",
                    side,
                    counts.len(),
                    Pit::PER_SIDE
                )));
            }
            for (index, count) in side.pit_range().zip(counts) {
                pits[index] = count.trim().parse::<u32>().map_err(|_| {
                    NotationError::InvalidPlacement(format!(
                        "invalid seed count '{}' in pit {}",
                        count, index
                    ))
                })?;
            }
        }

        Ok(pits)
    }

    fn parse_scores(scores: &str) -> Result<[u32; 2], NotationError> {
        let (a, b) = scores
            .split_once('-')
            .ok_or_else(|| NotationError::InvalidScores(scores.to_string()))?;
        let parse = |v: &str| {
            v.parse::<u32>()
                .map_err(|_| NotationError::InvalidScores(scores.to_string()))
        };
        Ok([parse(a)?, parse(b)?])
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for side in Side::ALL {
            if side == Side::B {
                write!(f, "/")?;
            }
            let row: Vec<String> = self.pits[side.pit_range()]
                .iter()
                .map(|count| count.to_string())
                .collect();
            write!(f, "{}", row.join(","))?;
        }
        write!(
            f,
            " {} {}-{} {}",
            self.side_to_move.to_char(),
            self.scores[0],
            self.scores[1],
            if self.terminal { '#' } else { '*' }
        )
    }
}

impl std::str::FromStr for Notation {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Notation::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_startpos() {
        let parsed = Notation::parse(Notation::STARTPOS).unwrap();
        assert_eq!(parsed.pits, [4; 12]);
        assert_eq!(parsed.side_to_move, Side::A);
        assert_eq!(parsed.scores, [0, 0]);
        assert!(!parsed.terminal);
    }

    #[test]
    fn display_matches_startpos() {
        let parsed = Notation::parse(Notation::STARTPOS).unwrap();
        assert_eq!(parsed.to_string(), Notation::STARTPOS);
    }

    #[test]
    fn parse_midgame() {
        let parsed: Notation = "0,1,0,5,5,5/0,5,5,0,5,5 b 3-2 *".parse().unwrap();
        assert_eq!(parsed.pits[1], 1);
        assert_eq!(parsed.pits[7], 5);
        assert_eq!(parsed.side_to_move, Side::B);
        assert_eq!(parsed.scores, [3, 2]);
    }

    #[test]
    fn parse_terminal() {
        let parsed = Notation::parse("0,0,0,0,0,0/0,0,0,0,0,0 a 30-18 #").unwrap();
        assert!(parsed.terminal);
        assert_eq!(parsed.scores, [30, 18]);
    }

    #[test]
    fn wrong_part_count() {
        assert_eq!(
            Notation::parse("4,4,4,4,4,4/4,4,4,4,4,4 a"),
            Err(NotationError::InvalidPartCount(2))
        );
    }

    #[test]
    fn wrong_row_count() {
        assert!(matches!(
            Notation::parse("4,4,4,4,4,4 a 0-0 *"),
            Err(NotationError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn short_row() {
        assert!(matches!(
            Notation::parse("4,4,4,4,4/4,4,4,4,4,4 a 0-0 *"),
            Err(NotationError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn negative_seed_count() {
        assert!(matches!(
            Notation::parse("4,4,-4,4,4,4/4,4,4,4,4,4 a 0-0 *"),
            Err(NotationError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn bad_side() {
        assert_eq!(
            Notation::parse("4,4,4,4,4,4/4,4,4,4,4,4 w 0-0 *"),
            Err(NotationError::InvalidSide("w".to_string()))
        );
    }

    #[test]
    fn bad_scores() {
        assert!(matches!(
            Notation::parse("4,4,4,4,4,4/4,4,4,4,4,4 a 0 *"),
            Err(NotationError::InvalidScores(_))
        ));
        assert!(matches!(
            Notation::parse("4,4,4,4,4,4/4,4,4,4,4,4 a x-0 *"),
            Err(NotationError::InvalidScores(_))
        ));
    }

    #[test]
    fn oversized_pit_is_rejected() {
        assert_eq!(
            Notation::parse("1,4294967295,4,4,4,4/4,4,4,4,4,4 a 0-0 *"),
            Err(NotationError::TooManySeeds(4_294_967_295 + 41))
        );
    }

    #[test]
    fn oversized_scores_are_rejected() {
        assert_eq!(
            Notation::parse("4,4,4,4,4,4/4,4,4,4,4,4 a 4294967295-1 *"),
            Err(NotationError::TooManySeeds(4_294_967_296 + 48))
        );
    }

    #[test]
    fn seed_bound_is_inclusive() {
        let at_limit = Notation::parse("1000,0,0,0,0,0/0,0,0,0,0,0 a 0-0 *").unwrap();
        assert_eq!(at_limit.pits[0], Notation::MAX_SEEDS);
        assert_eq!(
            Notation::parse("1000,0,0,0,0,0/0,0,0,0,0,0 a 1-0 *"),
            Err(NotationError::TooManySeeds(1_001))
        );
    }

    #[test]
    fn bad_status() {
        assert_eq!(
            Notation::parse("4,4,4,4,4,4/4,4,4,4,4,4 a 0-0 ?"),
            Err(NotationError::InvalidStatus("?".to_string()))
        );
    }
}
