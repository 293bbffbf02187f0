//! Random fleet layout with explicit attempt caps.
//!
//! One board gets a fixed budget of placement attempts shared by all of its
//! ships. Running out discards the board; [`FleetPlacer::generate`] then
//! starts over from an empty board, up to its own retry cap.

use log::debug;
use rand::Rng;

use super::board::Board;
use super::common::PlacementError;
use super::config::{BOARD_RETRY_LIMIT, FLEET, PLACEMENT_ATTEMPT_LIMIT};
use super::coordinate::Coordinate;
use super::ship::{Orientation, Ship, ShipClass};

/// Lays out a fleet on fresh boards.
#[derive(Debug, Clone, Copy)]
pub struct FleetPlacer<'f> {
    fleet: &'f [ShipClass],
    attempt_limit: usize,
    board_retries: usize,
}

impl Default for FleetPlacer<'static> {
    fn default() -> Self {
        Self::new(&FLEET)
    }
}

impl<'f> FleetPlacer<'f> {
    /// Placer for `fleet`, using the standard caps.
    pub fn new(fleet: &'f [ShipClass]) -> Self {
        Self {
            fleet,
            attempt_limit: PLACEMENT_ATTEMPT_LIMIT,
            board_retries: BOARD_RETRY_LIMIT,
        }
    }

    /// Placement attempts allowed per board.
    pub fn with_attempt_limit(mut self, attempts: usize) -> Self {
        self.attempt_limit = attempts;
        self
    }

    /// Fresh boards tried before [`Self::generate`] gives up.
    pub fn with_board_retries(mut self, boards: usize) -> Self {
        self.board_retries = boards;
        self
    }

    /// Try to lay out the whole fleet on one empty board.
    ///
    /// Ships go down in fleet order. Each attempt draws a bow uniformly from
    /// `[0, size]²`, so some bodies hang off the board and are refused like
    /// any other invalid placement.
    pub fn place_fleet<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, PlacementError> {
        let mut board = Board::new();
        let size = board.size() as i32;
        let mut attempts = 0;
        for &class in self.fleet {
            loop {
                if attempts == self.attempt_limit {
                    return Err(PlacementError::BoardGenerationExhausted { attempts });
                }
                attempts += 1;
                let bow = Coordinate::new(rng.random_range(0..=size), rng.random_range(0..=size));
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                match board.place_ship(Ship::new(class, bow, orientation)) {
                    Ok(()) => break,
                    Err(PlacementError::InvalidPlacement { .. }) => continue,
                    Err(other) => return Err(other),
                }
            }
        }
        debug!("fleet placed after {} attempts", attempts);
        Ok(board)
    }

    /// Lay out the fleet, discarding boards that run out of attempts.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, PlacementError> {
        for round in 1..=self.board_retries {
            match self.place_fleet(rng) {
                Ok(board) => return Ok(board),
                Err(PlacementError::BoardGenerationExhausted { attempts }) => {
                    debug!("board {} exhausted after {} attempts, starting over", round, attempts);
                }
                Err(other) => return Err(other),
            }
        }
        Err(PlacementError::RetriesExhausted {
            boards: self.board_retries,
        })
    }
}

/// Standard fleet on a fresh board with the standard caps.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Result<Board, PlacementError> {
    FleetPlacer::default().generate(rng)
}
