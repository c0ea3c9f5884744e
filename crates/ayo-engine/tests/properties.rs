//! Property tests for the rules engine.

use ayo_core::Side;
use ayo_engine::{Game, Position};
use proptest::prelude::*;

const MAX_PLIES: usize = 400;

/// Plays the game, picking each move from `choices` modulo the number of
/// valid moves, until it ends or runs out of choices.
fn play_out(game: &mut Game, choices: &[usize], mut check: impl FnMut(&Game)) {
    for &choice in choices.iter().take(MAX_PLIES) {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let pit = moves[choice % moves.len()];
        assert!(game.apply_move(pit.index()));
        check(game);
    }
}

proptest! {
    #[test]
    fn seeds_are_conserved(choices in prop::collection::vec(0usize..6, 0..MAX_PLIES)) {
        let mut game = Game::new();
        play_out(&mut game, &choices, |g| {
            assert_eq!(g.position().total_seeds(), Position::TOTAL_SEEDS);
        });
    }

    #[test]
    fn valid_moves_belong_to_side_to_move(choices in prop::collection::vec(0usize..6, 0..MAX_PLIES)) {
        let mut game = Game::new();
        play_out(&mut game, &choices, |g| {
            for index in 0..16 {
                if g.is_valid_move(index) {
                    assert!(!g.is_terminal());
                    assert!(g.side_to_move().owns(index));
                    assert!(g.board()[index] > 0);
                }
            }
        });
    }

    #[test]
    fn invalid_moves_change_nothing(
        choices in prop::collection::vec(0usize..6, 0..120),
        attempt in 0usize..20,
    ) {
        let mut game = Game::new();
        play_out(&mut game, &choices, |_| {});

        if !game.is_valid_move(attempt) {
            let before = *game.position();
            let plies = game.ply_count();
            prop_assert!(!game.apply_move(attempt));
            prop_assert_eq!(game.position(), &before);
            prop_assert_eq!(game.ply_count(), plies);
        }
    }

    #[test]
    fn end_sweep_clears_the_board(choices in prop::collection::vec(0usize..6, MAX_PLIES..=MAX_PLIES)) {
        let mut game = Game::new();
        play_out(&mut game, &choices, |_| {});

        if let Some(last) = game.move_history().last().filter(|m| m.outcome.ended) {
            let before = last.position_before.scores;
            let after = game.scores();
            for side in Side::ALL {
                prop_assert_eq!(after.get(side), before.get(side) + last.outcome.gain(side));
            }
            prop_assert_eq!(game.position().board_total(), 0);
            prop_assert!(game.winner().is_some());
        }
    }
}
