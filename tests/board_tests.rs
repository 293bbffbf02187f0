use seabattle::{
    Board, Cell, Coordinate, Orientation, PlacementError, Ship, ShipClass, ShipState, ShotError,
    ShotOutcome,
};

const CRUISER: ShipClass = ShipClass::new("Cruiser", 3);
const SUBMARINE: ShipClass = ShipClass::new("Submarine", 1);

fn at(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

fn scenario_board() -> Board {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(CRUISER, at(0, 0), Orientation::Horizontal))
        .unwrap();
    board
        .place_ship(Ship::new(SUBMARINE, at(5, 5), Orientation::Vertical))
        .unwrap();
    board
}

#[test]
fn test_cruiser_and_submarine_scenario() {
    let mut board = scenario_board();

    assert_eq!(board.resolve_shot(at(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.resolve_shot(at(0, 1)).unwrap(), ShotOutcome::Hit);
    assert_eq!(
        board.resolve_shot(at(0, 2)).unwrap(),
        ShotOutcome::Sunk(CRUISER)
    );
    assert_eq!(board.sunk_count(), 1);
    assert!(!board.all_sunk());

    assert_eq!(
        board.resolve_shot(at(5, 5)).unwrap(),
        ShotOutcome::Sunk(SUBMARINE)
    );
    assert_eq!(board.sunk_count(), 2);
    assert!(board.all_sunk());
}

#[test]
fn test_ship_state_runs_forward() {
    let mut board = scenario_board();
    assert_eq!(board.ships()[0].state(), ShipState::Intact);
    board.resolve_shot(at(0, 1)).unwrap();
    assert_eq!(board.ships()[0].state(), ShipState::Damaged);
    assert_eq!(board.ships()[0].health(), 2);
    board.resolve_shot(at(0, 0)).unwrap();
    board.resolve_shot(at(0, 2)).unwrap();
    assert_eq!(board.ships()[0].state(), ShipState::Sunk);
    assert_eq!(board.ships()[0].health(), 0);
}

#[test]
fn test_miss_marks_cell() {
    let mut board = scenario_board();
    assert_eq!(board.resolve_shot(at(3, 3)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.cell(at(3, 3)), Some(Cell::Miss));
    assert_eq!(board.misses().count_ones(), 1);
    assert!(board.is_targeted(at(3, 3)));
}

#[test]
fn test_repeated_shot_is_rejected_without_change() {
    let mut board = scenario_board();
    board.resolve_shot(at(0, 0)).unwrap();
    let before = board.clone();
    assert_eq!(
        board.resolve_shot(at(0, 0)).unwrap_err(),
        ShotError::AlreadyTargeted(at(0, 0))
    );
    assert_eq!(board, before);
    assert_eq!(board.ships()[0].health(), 2);
}

#[test]
fn test_out_of_bounds_shot_is_rejected() {
    let mut board = scenario_board();
    let before = board.clone();
    for coord in [at(6, 0), at(0, 6), at(-1, 2), at(i32::MAX, i32::MIN)] {
        assert_eq!(
            board.resolve_shot(coord).unwrap_err(),
            ShotError::OutOfBounds(coord)
        );
    }
    assert_eq!(board, before);
}

#[test]
fn test_sinking_seals_halo_in_fog() {
    let mut board = scenario_board();
    // a miss inside the future halo stays a miss
    board.resolve_shot(at(1, 0)).unwrap();
    for y in 0..3 {
        board.resolve_shot(at(0, y)).unwrap();
    }

    for coord in [at(0, 3), at(1, 1), at(1, 2), at(1, 3)] {
        assert_eq!(board.cell(coord), Some(Cell::Fog), "{:?}", coord);
        assert!(board.is_targeted(coord));
    }
    assert_eq!(board.cell(at(1, 0)), Some(Cell::Miss));
    assert_eq!(board.fog().count_ones(), 4);
    assert_eq!(
        board.resolve_shot(at(1, 1)).unwrap_err(),
        ShotError::AlreadyTargeted(at(1, 1))
    );
    // outside the halo nothing changed
    assert_eq!(board.cell(at(2, 0)), Some(Cell::Empty));
}

#[test]
fn test_placement_rejects_out_of_bounds() {
    let mut board = Board::new();
    let before = board.clone();
    for (bow, orientation) in [
        (at(0, 4), Orientation::Horizontal),
        (at(4, 0), Orientation::Vertical),
        (at(-1, 0), Orientation::Vertical),
        (at(6, 6), Orientation::Horizontal),
    ] {
        let err = board
            .place_ship(Ship::new(CRUISER, bow, orientation))
            .unwrap_err();
        assert_eq!(
            err,
            PlacementError::InvalidPlacement {
                class: CRUISER,
                bow
            }
        );
    }
    assert_eq!(board, before);
}

#[test]
fn test_placement_respects_buffer_zone() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(CRUISER, at(0, 0), Orientation::Horizontal))
        .unwrap();

    // overlap, side contact and diagonal contact are all refused
    for bow in [at(0, 2), at(1, 1), at(1, 3), at(0, 3)] {
        assert!(board
            .place_ship(Ship::new(SUBMARINE, bow, Orientation::Horizontal))
            .is_err());
    }
    // one free row between ships is enough
    board
        .place_ship(Ship::new(SUBMARINE, at(2, 0), Orientation::Horizontal))
        .unwrap();
    board
        .place_ship(Ship::new(SUBMARINE, at(0, 4), Orientation::Horizontal))
        .unwrap();
    assert_eq!(board.ships().len(), 3);
    assert_eq!(board.ship_map().count_ones(), 5);
    // bodies plus halos, clipped to the board
    assert!(board.blocked().get(1, 3).unwrap());
    assert!(board.blocked().get(0, 4).unwrap());
    assert!(!board.blocked().get(4, 4).unwrap());
}

#[test]
fn test_placement_rejects_bad_lengths() {
    let mut board = Board::new();
    for length in [0, 4, 5] {
        let class = ShipClass::new("Odd", length);
        let err = board
            .place_ship(Ship::new(class, at(2, 0), Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(
            err,
            PlacementError::InvalidPlacement {
                class,
                bow: at(2, 0)
            }
        );
    }
    assert!(board.ships().is_empty());
    assert!(board.blocked().is_empty());

    // with the odd ships refused, sinking every ship ends the board
    board
        .place_ship(Ship::new(CRUISER, at(2, 0), Orientation::Horizontal))
        .unwrap();
    for y in 0..3 {
        board.resolve_shot(at(2, y)).unwrap();
    }
    let sunk = board.ships().iter().filter(|s| s.health() == 0).count();
    assert_eq!(board.sunk_count(), sunk);
    assert!(board.all_sunk());
}

#[test]
fn test_buffer_zone_is_recomputed_per_ship() {
    let mut board = Board::new();
    let first = Ship::new(SUBMARINE, at(0, 0), Orientation::Horizontal);
    let second = Ship::new(SUBMARINE, at(0, 2), Orientation::Horizontal);
    board.place_ship(first).unwrap();
    board.place_ship(second).unwrap();

    // the halos share column 1
    let overlap = board.buffer_zone(&first) & board.buffer_zone(&second);
    assert_eq!(overlap.count_ones(), 2);
    assert_eq!(board.buffer_zone(&second).count_ones(), 5);
}

#[test]
fn test_target_view_hides_ships() {
    let mut board = scenario_board();
    let view = board.target_view();
    assert_eq!(board.cell(at(0, 1)), Some(Cell::Ship));
    assert_eq!(view.cell(at(0, 1)), Some(Cell::Empty));
    assert_eq!(view.untargeted().count(), 36);

    board.resolve_shot(at(0, 1)).unwrap();
    let view = board.target_view();
    assert_eq!(view.cell(at(0, 1)), Some(Cell::Hit));
    assert_eq!(view.cell(at(0, 0)), Some(Cell::Empty));
    assert!(view.is_targeted(at(0, 1)));
    assert_eq!(view.untargeted().count(), 35);
    assert_eq!(view.cell(at(6, 6)), None);
}
