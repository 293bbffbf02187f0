use super::ship::ShipClass;

pub const BOARD_SIZE: usize = 6;
pub const NUM_SHIPS: usize = 7;

/// Shortest and longest ship a board accepts.
pub const MIN_SHIP_LENGTH: u8 = 1;
pub const MAX_SHIP_LENGTH: u8 = 3;

/// Fleet in placement order: the longest ship goes down first.
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Destroyer", 2),
    ShipClass::new("Destroyer", 2),
    ShipClass::new("Submarine", 1),
    ShipClass::new("Submarine", 1),
    ShipClass::new("Submarine", 1),
    ShipClass::new("Submarine", 1),
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Ship placement tries allowed for one board, across all ships.
pub const PLACEMENT_ATTEMPT_LIMIT: usize = 2000;

/// Fresh boards tried before board generation gives up.
pub const BOARD_RETRY_LIMIT: usize = 64;

/// Pause before the computer fires, in milliseconds.
pub const AI_TURN_DELAY_MS: u64 = 2000;
