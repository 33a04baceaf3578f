use battleboats::{generate_fleet, standard_fleet_sizes, Board, CellState, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = generate_fleet(&standard_fleet_sizes(), &mut rng).unwrap();
    let shots = rng.random_range(0..BOARD_SIZE * BOARD_SIZE);
    for _ in 0..shots {
        let x = rng.random_range(0..BOARD_SIZE);
        let y = rng.random_range(0..BOARD_SIZE);
        board.mark_hit(x, y).unwrap();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cell_state_is_pure(seed in any::<u64>()) {
        let board = random_board(seed);
        let first = board.grid();
        let second = board.grid();
        prop_assert_eq!(first, second);
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                prop_assert_eq!(board.cell_state(x, y).unwrap(), first[y][x]);
            }
        }
    }

    #[test]
    fn mark_hit_idempotent(seed in any::<u64>(), x in 0..BOARD_SIZE, y in 0..BOARD_SIZE) {
        let mut once = random_board(seed);
        once.mark_hit(x, y).unwrap();
        let mut twice = once.clone();
        prop_assert!(!twice.mark_hit(x, y).unwrap());
        prop_assert_eq!(once.hits(), twice.hits());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn won_iff_no_unhit_cell(seed in any::<u64>()) {
        let board = random_board(seed);
        let any_unhit = board
            .grid()
            .iter()
            .flatten()
            .any(|&s| s == CellState::Unhit);
        prop_assert_eq!(board.is_won(), !any_unhit);
    }

    #[test]
    fn sunk_iff_whole_ship_hit(seed in any::<u64>()) {
        let board = random_board(seed);
        let hits = board.hits();
        for ship in board.ships() {
            let sunk = (*ship & !hits).is_empty();
            for (x, y) in ship.iter_set_bits() {
                let state = board.cell_state(x, y).unwrap();
                if sunk {
                    prop_assert_eq!(state, CellState::HitSunk);
                } else if hits.get(x, y).unwrap() {
                    prop_assert_eq!(state, CellState::Hit);
                } else {
                    prop_assert_eq!(state, CellState::Unhit);
                }
            }
        }
    }
}
