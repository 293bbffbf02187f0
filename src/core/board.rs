//! Game board state: placed ships plus per-cell masks for placement and shots.

use alloc::vec::Vec;
use log::{debug, info};

use super::bitboard::BitBoard;
use super::common::{PlacementError, ShotError, ShotOutcome};
use super::config::{BOARD_SIZE, MAX_SHIP_LENGTH, MIN_SHIP_LENGTH};
use super::coordinate::Coordinate;
use super::ship::{Ship, ShipState};

/// One bit per cell of the standard board.
pub type Mask = BitBoard<u64, BOARD_SIZE>;

/// What a grid cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water nobody has fired at, or a hidden ship.
    Empty,
    /// Undamaged ship segment; only the owner sees these.
    Ship,
    Hit,
    Miss,
    /// Water next to a sunk ship, sealed off once the ship went down.
    Fog,
}

/// A player's sea: its ships, where they may not go, and every shot taken at it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    ships: Vec<Ship>,
    ship_map: Mask,
    // ship cells plus the one-cell halo of every placed ship
    blocked: Mask,
    targeted: Mask,
    hits: Mask,
    misses: Mask,
    fog: Mask,
    sunk_count: usize,
}

impl Board {
    /// Create an empty board (no ships placed, nothing fired upon).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships with no health left.
    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Returns `true` when at least one ship was placed and all of them are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk_count == self.ships.len()
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> Mask {
        self.ship_map
    }

    /// Cells no further ship may occupy.
    pub fn blocked(&self) -> Mask {
        self.blocked
    }

    /// Cells fired upon, including fog sealed around sunk ships.
    pub fn targeted(&self) -> Mask {
        self.targeted
    }

    pub fn hits(&self) -> Mask {
        self.hits
    }

    pub fn misses(&self) -> Mask {
        self.misses
    }

    pub fn fog(&self) -> Mask {
        self.fog
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.is_within(BOARD_SIZE)
    }

    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        coord
            .to_cell(BOARD_SIZE)
            .is_some_and(|(r, c)| self.targeted.get(r, c).unwrap_or(false))
    }

    /// Full state of a cell, ships included. `None` off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        let (r, c) = coord.to_cell(BOARD_SIZE)?;
        let at = |mask: Mask| mask.get(r, c).unwrap_or(false);
        Some(if at(self.hits) {
            Cell::Hit
        } else if at(self.misses) {
            Cell::Miss
        } else if at(self.fog) {
            Cell::Fog
        } else if at(self.ship_map) {
            Cell::Ship
        } else {
            Cell::Empty
        })
    }

    /// The cell as the opponent sees it: undamaged ship segments read as water.
    pub fn public_cell(&self, coord: Coordinate) -> Option<Cell> {
        self.cell(coord).map(|cell| match cell {
            Cell::Ship => Cell::Empty,
            other => other,
        })
    }

    /// Read-only view handed to whoever shoots at this board.
    pub fn target_view(&self) -> TargetView<'_> {
        TargetView { board: self }
    }

    /// Put a ship on the board.
    ///
    /// Fails when the ship's length is outside `MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH`,
    /// when any of its cells is off the board, or when it enters the occupied
    /// cells or buffer zone of a ship placed earlier. On success the ship's
    /// halo joins the blocked cells.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        let invalid = || PlacementError::InvalidPlacement {
            class: ship.class(),
            bow: ship.bow(),
        };
        if !(MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH).contains(&ship.length()) {
            return Err(invalid());
        }
        let body = body_mask(&ship).ok_or_else(invalid)?;
        if !(body & self.blocked).is_empty() {
            return Err(invalid());
        }
        self.ship_map |= body;
        self.mark_buffer(&ship, false);
        debug!(
            "placed {} at {} {:?}",
            ship.class(),
            ship.bow(),
            ship.orientation()
        );
        self.ships.push(ship);
        Ok(())
    }

    /// One-cell halo around a ship, in all eight directions, clipped to the board.
    ///
    /// Recomputed on every call because halos of neighbouring ships overlap.
    pub fn buffer_zone(&self, ship: &Ship) -> Mask {
        match body_mask(ship) {
            Some(body) => body.dilate() & !body,
            None => Mask::new(),
        }
    }

    /// Record the halo around `ship`.
    ///
    /// During placement the halo (and the body) become blocked. Once the ship
    /// is sunk, `reveal` turns every halo cell not yet fired upon into fog and
    /// counts it as targeted.
    fn mark_buffer(&mut self, ship: &Ship, reveal: bool) {
        let halo = self.buffer_zone(ship);
        if reveal {
            let fresh = halo & !self.targeted;
            self.fog |= fresh;
            self.targeted |= fresh;
        } else {
            self.blocked |= halo;
            if let Some(body) = body_mask(ship) {
                self.blocked |= body;
            }
        }
    }

    /// Fire at `coord`.
    ///
    /// Rejected shots leave the board untouched. An accepted shot is
    /// recorded as targeted and either damages the ship under it or marks a
    /// miss; the last point of damage sinks the ship and seals its halo in fog.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.is_targeted(coord) {
            return Err(ShotError::AlreadyTargeted(coord));
        }
        let shot = cell_mask(coord).ok_or(ShotError::OutOfBounds(coord))?;
        self.targeted |= shot;

        let Some(idx) = self.ships.iter().position(|s| s.is_hit_by(coord)) else {
            self.misses |= shot;
            return Ok(ShotOutcome::Miss);
        };

        self.hits |= shot;
        match self.ships[idx].take_hit() {
            ShipState::Sunk => {
                let ship = self.ships[idx];
                self.sunk_count += 1;
                self.mark_buffer(&ship, true);
                info!("{} sunk at {}", ship.class(), coord);
                Ok(ShotOutcome::Sunk(ship.class()))
            }
            _ => Ok(ShotOutcome::Hit),
        }
    }
}

/// Single-cell mask, or `None` off the board.
fn cell_mask(coord: Coordinate) -> Option<Mask> {
    let (r, c) = coord.to_cell(BOARD_SIZE)?;
    Mask::from_cells([(r, c)]).ok()
}

/// Body of a ship as a mask, or `None` if part of it is off the board.
fn body_mask(ship: &Ship) -> Option<Mask> {
    ship.occupied_cells()
        .try_fold(Mask::new(), |body, cell| Some(body | cell_mask(cell)?))
}

/// What a shooter may know about the board it fires at.
///
/// Exposes the public cell state and the set of targeted cells. There is no
/// way through a view to an undamaged ship segment.
#[derive(Clone, Copy)]
pub struct TargetView<'a> {
    board: &'a Board,
}

impl<'a> TargetView<'a> {
    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.board.contains(coord)
    }

    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.board.is_targeted(coord)
    }

    /// Public cell state: `Empty`, `Hit`, `Miss` or `Fog`.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.board.public_cell(coord)
    }

    /// Every cell on the board not yet fired upon, row-major.
    pub fn untargeted(&self) -> impl Iterator<Item = Coordinate> + 'a {
        (!self.board.targeted)
            .iter_set_bits()
            .map(Coordinate::from_cell)
    }

    pub fn sunk_count(&self) -> usize {
        self.board.sunk_count()
    }

    /// Every cell has been fired upon or sealed in fog.
    pub fn is_exhausted(&self) -> bool {
        self.board.targeted.is_full()
    }
}
