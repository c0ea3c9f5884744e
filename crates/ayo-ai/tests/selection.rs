//! Selector behaviour against a live game.

use ayo_ai::{choose_move, Bot, Difficulty};
use ayo_core::Pit;
use ayo_engine::{Game, Position};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn hard_mode_always_takes_the_unique_best_capture() {
    // Pit 5 captures 2; pit 3 (sowing 4 through 7) captures 2 + 3 = 5.
    let game = Game::from_notation("1,0,0,4,0,1/1,2,4,4,4,4 a 0-21 *").unwrap();
    for seed in 0..25 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let chosen = choose_move(game.position(), Difficulty::Hard, &mut rng);
        assert_eq!(chosen, Pit::new(3));
    }
}

#[test]
fn hard_mode_falls_back_to_a_valid_pit_when_nothing_captures() {
    let game = Game::new();
    let mut bot = Bot::with_seed(Difficulty::Hard, 5);
    for _ in 0..25 {
        let pit = bot.choose_move(&game).unwrap();
        assert!(game.is_valid_move(pit.index()));
    }
}

#[test]
fn hard_mode_fallback_is_random_not_lowest_pit() {
    // No opening move gains anything, so hard mode must spread its picks.
    let position = Position::startpos();
    let picks: HashSet<Pit> = (0..50)
        .filter_map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            choose_move(&position, Difficulty::Hard, &mut rng)
        })
        .collect();
    assert!(picks.len() > 1, "hard mode always picked {:?}", picks);
    assert!(picks.iter().all(|pit| position.side_to_move.owns(pit.index())));
}

#[test]
fn unknown_difficulty_plays_like_easy() {
    let game = Game::new();
    let mut easy = Bot::with_seed(Difficulty::Easy, 11);
    let mut unknown = Bot::with_seed(Difficulty::from("grandmaster"), 11);
    for _ in 0..25 {
        assert_eq!(easy.choose_move(&game), unknown.choose_move(&game));
    }
}

#[test]
fn side_b_is_served_too() {
    let mut game = Game::new();
    assert!(game.apply_move(0));
    let mut bot = Bot::with_seed(Difficulty::Easy, 1);
    let pit = bot.choose_move(&game).unwrap();
    assert!(pit.index() >= 6);
}

proptest! {
    #[test]
    fn choosing_never_mutates_the_game(
        moves in prop::collection::vec(0usize..6, 0..60),
        seed in any::<u64>(),
    ) {
        let mut game = Game::new();
        let mut driver = ChaCha8Rng::seed_from_u64(seed);
        for choice in moves {
            let legal = game.legal_moves();
            if legal.is_empty() {
                break;
            }
            game.apply_move(legal[choice % legal.len()].index());
        }

        let snapshot = game.clone();
        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            for _ in 0..5 {
                let chosen = choose_move(game.position(), difficulty, &mut driver);
                if let Some(pit) = chosen {
                    prop_assert!(game.is_valid_move(pit.index()));
                } else {
                    prop_assert!(game.is_terminal());
                }
            }
        }
        prop_assert_eq!(game.position(), snapshot.position());
        prop_assert_eq!(game.ply_count(), snapshot.ply_count());
    }
}
