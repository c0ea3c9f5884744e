//! Move selection heuristics.

use crate::Difficulty;
use ayo_core::Pit;
use ayo_engine::rules::RuleSet;
use ayo_engine::{Position, StandardAyo};
use rand::seq::SliceRandom;
use rand::Rng;

/// Seeds the side to move would gain by playing `pit`, or `None` if `pit`
/// is not a valid move.
///
/// The move is simulated on a copy of `position`; the caller's position is
/// never touched. Includes an end-of-game sweep credited to the mover.
pub fn capture_gain(position: &Position, pit: Pit) -> Option<u32> {
    let mover = position.side_to_move;
    let simulated = *position;
    let (after, _) = StandardAyo.try_make_move(&simulated, pit.index())?;
    Some(after.scores.get(mover) - position.scores.get(mover))
}

/// Picks a pit for the side to move, or `None` if it has no valid move.
///
/// - [`Difficulty::Easy`]: a uniformly random valid pit.
/// - [`Difficulty::Hard`]: the pit with the strictly greatest
///   [`capture_gain`], lowest index first on ties. When no pit gains
///   anything, falls back to a random valid pit.
pub fn choose_move<R: Rng + ?Sized>(
    position: &Position,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Pit> {
    let moves = StandardAyo.generate_moves(position);
    let moves = moves.as_slice();

    let chosen = match difficulty {
        Difficulty::Easy => moves.choose(rng).copied(),
        Difficulty::Hard => best_gain(position, moves).or_else(|| moves.choose(rng).copied()),
    };

    if let Some(pit) = chosen {
        tracing::trace!(
            side = %position.side_to_move,
            %difficulty,
            %pit,
            candidates = moves.len(),
            "move chosen"
        );
    }
    chosen
}

/// Returns the first pit with the greatest positive gain.
fn best_gain(position: &Position, moves: &[Pit]) -> Option<Pit> {
    let mut best: Option<(Pit, u32)> = None;
    for &pit in moves {
        let gain = capture_gain(position, pit).unwrap_or(0);
        if gain > best.map_or(0, |(_, g)| g) {
            best = Some((pit, gain));
        }
    }
    best.map(|(pit, _)| pit)
}
