use std::fs;
use std::path::PathBuf;

use battleboats::{
    generate_fleet, generate_opponent, load_game, standard_fleet_sizes, Board, BoardError,
    GameStatus, Mask, Round, Session,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn temp_save(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("battleboats-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{}.bin", name));
    let _ = fs::remove_file(&path);
    path
}

fn new_session(name: &str, seed: u64) -> (Session, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let player = generate_fleet(&standard_fleet_sizes(), &mut rng).unwrap();
    let session = Session::new_game(temp_save(name), player, &mut rng).unwrap();
    (session, rng)
}

#[test]
fn test_new_game_is_saved_and_reloads() {
    let (session, _) = new_session("reload", 1);
    assert!(session.path().exists());
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.computer().ship_sizes(), session.player().ship_sizes());

    let loaded = Session::load(session.path()).unwrap();
    assert_eq!(loaded.player(), session.player());
    assert_eq!(loaded.computer(), session.computer());
}

#[test]
fn test_round_marks_both_boards_and_saves() {
    let (mut session, mut rng) = new_session("round", 2);
    let round = session.fire(0, 0, &mut rng).unwrap();
    assert!(matches!(round, Round::Played { .. }));
    assert_eq!(session.computer().hits().count_ones(), 1);
    assert_eq!(session.player().hits().count_ones(), 1);

    let (player, computer) = load_game(session.path()).unwrap();
    assert_eq!(&player, session.player());
    assert_eq!(&computer, session.computer());
}

#[test]
fn test_repeat_shot_does_not_give_computer_a_turn() {
    let (mut session, mut rng) = new_session("repeat", 3);
    session.fire(4, 4, &mut rng).unwrap();
    let player_hits = session.player().hits();
    assert_eq!(session.fire(4, 4, &mut rng).unwrap(), Round::AlreadyFired);
    assert_eq!(session.player().hits(), player_hits);
}

#[test]
fn test_out_of_range_shot_is_error() {
    let (mut session, mut rng) = new_session("range", 4);
    assert!(session.fire(8, 0, &mut rng).is_err());
    assert_eq!(session.computer().hits().count_ones(), 0);
}

#[test]
fn test_game_runs_to_completion() {
    let (mut session, mut rng) = new_session("complete", 5);
    let targets: Vec<_> = session.computer().all_ships().iter_set_bits().collect();
    let mut last = None;
    for (x, y) in targets {
        let round = session.fire(x, y, &mut rng).unwrap();
        if matches!(round, Round::PlayerWon { .. } | Round::ComputerWon { .. }) {
            last = Some(round);
            break;
        }
    }
    match last {
        Some(Round::PlayerWon { .. }) => assert_eq!(session.status(), GameStatus::Won),
        Some(Round::ComputerWon { .. }) => assert_eq!(session.status(), GameStatus::Lost),
        other => panic!("game did not finish: {:?}", other),
    }
    assert!(session.fire(0, 0, &mut rng).is_err());

    let reloaded = Session::load(session.path()).unwrap();
    assert_eq!(reloaded.status(), session.status());
}

#[test]
fn test_load_missing_file_fails() {
    let path = temp_save("missing");
    assert!(Session::load(&path).is_err());
}

#[test]
fn test_generate_opponent_matches_sizes() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut player = Board::new();
    player
        .add_ship(battleboats::ship_between((0, 0), (7, 0)).unwrap())
        .unwrap();
    player
        .add_ship(battleboats::ship_between((0, 1), (0, 7)).unwrap())
        .unwrap();
    let computer = generate_opponent(&player, &mut rng).unwrap();
    assert_eq!(computer.ship_sizes(), vec![8, 7]);
}

/// A reference whose ship sizes cannot all be laid out: six full lines leave
/// two free rows for five 3-ships.
fn unplaceable_reference() -> Board {
    let mut reference = Board::new();
    for _ in 0..6 {
        reference.ships_mut().push(Mask::from_raw(0xFF));
    }
    for _ in 0..5 {
        reference.ships_mut().push(Mask::from_raw(0b111));
    }
    reference
}

#[test]
fn test_generate_opponent_gives_up_on_unplaceable_fleet() {
    let mut rng = SmallRng::seed_from_u64(7);
    let err = generate_opponent(&unplaceable_reference(), &mut rng).unwrap_err();
    assert_eq!(err.downcast_ref::<BoardError>(), Some(&BoardError::FleetExhausted));
}

#[test]
fn test_new_game_with_unplaceable_fleet_writes_nothing() {
    let mut rng = SmallRng::seed_from_u64(8);
    let path = temp_save("unplaceable");
    assert!(Session::new_game(&path, unplaceable_reference(), &mut rng).is_err());
    assert!(!path.exists());
}
