#[cfg(feature = "std")]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::{
        parse_coord, AiPlayer, Board, CliPlayer, Coordinate, Game, InputError, Orientation,
        Player, Ship, ShipClass, Side, Strategy,
    };

    fn cli(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_coord_is_one_based() {
        assert_eq!(parse_coord("3 5"), Ok(Coordinate::new(2, 4)));
        assert_eq!(parse_coord("  1\t6 \n"), Ok(Coordinate::new(0, 5)));
        // zero parses; the board refuses it later
        assert_eq!(parse_coord("0 3"), Ok(Coordinate::new(-1, 2)));
    }

    #[test]
    fn test_parse_coord_rejects_malformed_input() {
        assert_eq!(parse_coord(""), Err(InputError::WrongTokenCount(0)));
        assert_eq!(parse_coord("4"), Err(InputError::WrongTokenCount(1)));
        assert_eq!(parse_coord("1 2 3"), Err(InputError::WrongTokenCount(3)));
        assert_eq!(parse_coord("a 2"), Err(InputError::NotANumber("a".into())));
        assert_eq!(parse_coord("-1 2"), Err(InputError::NotANumber("-1".into())));
        assert_eq!(parse_coord("1 +2"), Err(InputError::NotANumber("+2".into())));
    }

    #[test]
    fn test_parse_coord_reports_huge_numbers_as_off_board() {
        let err = parse_coord("99999999999 1").unwrap_err();
        assert_eq!(err, InputError::TooLarge("99999999999".into()));
        assert_eq!(err.to_string(), "99999999999 is off the board");
        assert_eq!(
            parse_coord("1 2147483648"),
            Err(InputError::TooLarge("2147483648".into()))
        );
        assert_eq!(parse_coord("2147483647 1"), Ok(Coordinate::new(2147483646, 0)));
    }

    #[test]
    fn test_cli_player_reprompts_on_bad_line() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let board = Board::new();
        let mut player = cli("x y\n2 3\n");

        let shot = player.next_shot(&mut rng, &board.target_view()).unwrap();
        assert_eq!(shot, Coordinate::new(1, 2));

        let output = String::from_utf8(player.into_output()).unwrap();
        assert_eq!(output.matches("Your move").count(), 2);
        assert!(output.contains("'x' is not a number"));
    }

    #[test]
    fn test_cli_player_reports_closed_input() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board = Board::new();
        let mut player = cli("");
        let err = player.next_shot(&mut rng, &board.target_view()).unwrap_err();
        assert_eq!(err.downcast_ref::<InputError>(), Some(&InputError::Closed));
    }

    #[test]
    fn test_rejected_shot_is_reprompted_without_losing_turn() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut enemy = Board::new();
        enemy
            .place_ship(Ship::new(
                ShipClass::new("Cruiser", 3),
                Coordinate::new(0, 0),
                Orientation::Horizontal,
            ))
            .unwrap();
        let mut game = Game::from_boards(Board::new(), enemy);
        let mut human = cli("9 9\n1 1\n1 1\n1 2\n");
        let mut computer = AiPlayer::new(Strategy::HuntAndTarget);

        let report = game.step(&mut rng, &mut human, &mut computer).unwrap();
        assert_eq!(report.target, Coordinate::new(0, 0));
        assert_eq!(report.next, Side::First);

        let report = game.step(&mut rng, &mut human, &mut computer).unwrap();
        assert_eq!(report.target, Coordinate::new(0, 1));

        let output = String::from_utf8(human.into_output()).unwrap();
        assert!(output.contains("off the board"));
        assert!(output.contains("already fired at 1 1"));
    }
}
