use battleship::{CellState, Game, GuessResult, Player, Seat, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn new_game(rng: &mut SmallRng) -> Game {
    Game::new(rng, [Player::human("Player1"), Player::cpu("Player2")]).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Scores mirror the hits on the opposing board and turns change only on misses.
    #[test]
    fn turn_engine_invariants(seed in any::<u64>(), shots in 1..120usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = new_game(&mut rng);

        for _ in 0..shots {
            if game.check_winner().is_some() {
                break;
            }
            let shooter = game.current_seat();
            let target = game.waiting_seat();
            let score_before = game.current_player().score();
            let (r, c) = game.random_guess(&mut rng).unwrap();
            let prior = game.board(target).cell(r, c).unwrap();
            prop_assert!(prior == CellState::Empty || prior == CellState::Occupied);

            match game.resolve_guess(r, c).unwrap() {
                GuessResult::Hit => {
                    prop_assert_eq!(prior, CellState::Occupied);
                    prop_assert_eq!(game.board(target).cell(r, c).unwrap(), CellState::Hit);
                    prop_assert_eq!(game.current_seat(), shooter);
                    prop_assert_eq!(game.player(shooter).score(), score_before + 1);
                }
                GuessResult::Miss => {
                    prop_assert_eq!(prior, CellState::Empty);
                    prop_assert_eq!(game.board(target).cell(r, c).unwrap(), CellState::Miss);
                    prop_assert_eq!(game.current_seat(), target);
                    prop_assert_eq!(game.player(shooter).score(), score_before);
                }
            }
            prop_assert!(!game.is_legal_guess(r, c, target).unwrap());

            for seat in Seat::ALL {
                let opponent = game.board(seat.other());
                prop_assert_eq!(game.player(seat).score(), opponent.count(CellState::Hit));
                prop_assert_eq!(
                    opponent.count(CellState::Hit) + opponent.count(CellState::Occupied),
                    game.winning_score()
                );
            }
        }
    }

    /// Legality is false exactly for cells already hit or missed.
    #[test]
    fn legality_matches_cell_state(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = new_game(&mut rng);
        let volleys = rng.random_range(0..60);
        for _ in 0..volleys {
            let (r, c) = game.random_guess(&mut rng).unwrap();
            game.resolve_guess(r, c).unwrap();
            if game.check_winner().is_some() {
                break;
            }
        }
        for seat in Seat::ALL {
            let state = game.board(seat).cell(row, col).unwrap();
            let legal = game.is_legal_guess(row, col, seat).unwrap();
            prop_assert_eq!(legal, matches!(state, CellState::Empty | CellState::Occupied));
        }
    }

    /// The winner check fires exactly at the winning score.
    #[test]
    fn winner_exactly_at_threshold(seed in any::<u64>(), score in 0usize..=17) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = new_game(&mut rng);
        game.player_mut(Seat::First).set_score(score);
        prop_assert_eq!(game.check_winner().is_some(), score == game.winning_score());
    }
}
