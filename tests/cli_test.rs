#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use battleboats::cli::{parse_ship, place_fleet, play};
    use battleboats::{
        generate_fleet, standard_fleet_sizes, BoardError, DisplaySettings, GameStatus, Mask,
        Session,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn temp_save(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("battleboats-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(format!("{}.bin", name))
    }

    #[test]
    fn test_parse_ship_forms() {
        assert_eq!(parse_ship("A1 A3").unwrap(), Mask::from_raw(1 | 1 << 8 | 1 << 16));
        assert_eq!(parse_ship("c1-a1").unwrap(), Mask::from_raw(0b111));
        assert_eq!(parse_ship("H8").unwrap(), Mask::from_raw(1 << 63));
        assert_eq!(
            parse_ship("A1 B2").unwrap_err(),
            BoardError::ShipNotStraight.to_string()
        );
        assert!(parse_ship("A1 A2 A3").is_err());
        assert!(parse_ship("").is_err());
    }

    #[test]
    fn test_place_fleet_reprompts_on_bad_ships() {
        let script = "A1 A5\nA1 E1\nZ9\nB2 C3\nB1 E1\nC3 C5\nE3 F3\nH8\n";
        let mut input = Cursor::new(script);
        let mut out = Vec::new();
        let board = place_fleet(&mut input, &mut out, DisplaySettings::default()).unwrap();
        assert_eq!(board.ship_sizes(), vec![5, 4, 3, 2, 1]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Error: Ship placement overlaps with another ship"));
        assert!(text.contains("Invalid ship:"));
        assert!(text.contains("Ship 1 of 5 (Carrier, 5 cells): "));
        assert!(text.contains("Ship 5 of 5 (Destroyer, 2 cells): "));
    }

    #[test]
    fn test_place_fleet_fails_on_closed_input() {
        let mut input = Cursor::new("A1 A5\n");
        let mut out = Vec::new();
        assert!(place_fleet(&mut input, &mut out, DisplaySettings::default()).is_err());
    }

    #[test]
    fn test_play_quits_and_keeps_save() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let player = generate_fleet(&standard_fleet_sizes(), &mut rng).unwrap();
        let mut session = Session::new_game(temp_save("quit"), player, &mut rng).unwrap();

        let mut input = Cursor::new("C4\nnonsense\nC4\nq\n");
        let mut out = Vec::new();
        let status = play(&mut session, &mut rng, &mut input, &mut out, DisplaySettings::default())
            .unwrap();
        assert_eq!(status, GameStatus::InProgress);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("You fired at C4."));
        assert!(text.contains("The computer shot at ("));
        assert!(text.contains("Invalid target:"));
        assert!(text.contains("You have already fired at C4."));
        assert!(text.contains("Game saved to"));

        let reloaded = Session::load(session.path()).unwrap();
        assert_eq!(reloaded.computer().hits().count_ones(), 1);
        assert_eq!(reloaded.player().hits().count_ones(), 1);
    }

    #[test]
    fn test_play_until_victory() {
        let mut rng = SmallRng::seed_from_u64(9);
        let player = generate_fleet(&standard_fleet_sizes(), &mut rng).unwrap();
        let mut session = Session::new_game(temp_save("victory"), player, &mut rng).unwrap();

        let script: String = session
            .computer()
            .all_ships()
            .iter_set_bits()
            .map(|(x, y)| battleboats::cli::coord_to_string(x, y) + "\n")
            .collect();
        let mut input = Cursor::new(script);
        let mut out = Vec::new();
        let settings = DisplaySettings {
            side_by_side: true,
            grid_lines: true,
        };
        let status = play(&mut session, &mut rng, &mut input, &mut out, settings).unwrap();
        assert_eq!(status, GameStatus::Won);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("You win!"));
    }
}
