//! Standard Ayo rules implementation.

use super::{GameResult, RuleSet};
use crate::movegen;
use crate::{MoveList, MoveOutcome, Position};
use ayo_core::Pit;

/// Standard Ayo rules.
///
/// - Twelve pits of four seeds, side A moves first
/// - Sowing skips the origin pit
/// - Backward capture of 2s and 3s on the opponent's row
/// - The game ends when either row is empty; the other row is swept to its
///   owner
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAyo;

impl RuleSet for StandardAyo {
    fn initial_position(&self) -> Position {
        Position::startpos()
    }

    fn generate_moves(&self, position: &Position) -> MoveList {
        movegen::generate_moves(position)
    }

    fn is_legal(&self, position: &Position, index: usize) -> bool {
        movegen::is_valid_move(position, index)
    }

    fn make_move(&self, position: &Position, pit: Pit) -> (Position, MoveOutcome) {
        movegen::make_move(position, pit)
    }

    fn game_result(&self, position: &Position) -> Option<GameResult> {
        position
            .terminal
            .then(|| GameResult::from_scores(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ayo_core::Side;

    #[test]
    fn initial_position() {
        let pos = StandardAyo.initial_position();
        assert_eq!(pos, Position::startpos());
        assert!(!StandardAyo.is_game_over(&pos));
        assert_eq!(StandardAyo.game_result(&pos), None);
    }

    #[test]
    fn try_make_move_rejects_invalid() {
        let pos = StandardAyo.initial_position();
        assert!(StandardAyo.try_make_move(&pos, 6).is_none());
        assert!(StandardAyo.try_make_move(&pos, 12).is_none());
        assert!(StandardAyo.try_make_move(&pos, 0).is_some());
    }

    #[test]
    fn game_result_when_terminal() {
        let pos = Position::from_notation("0,0,0,0,0,1/4,4,4,4,4,4 a 10-13 *").unwrap();
        let (next, _) = StandardAyo.make_move(&pos, Pit::new(5).unwrap());
        assert!(StandardAyo.is_game_over(&next));
        assert_eq!(StandardAyo.game_result(&next), Some(GameResult::Win(Side::B)));
    }
}
