//! Common types for Sea Battle: shot outcomes and board errors.

use thiserror::Error;

use super::coordinate::Coordinate;
use super::ship::ShipClass;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Shot took the last point of health of a ship.
    Sunk(ShipClass),
}

impl ShotOutcome {
    /// Hits and sinks earn the shooter another shot.
    pub fn grants_extra_shot(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Why a shot was refused. The board is left untouched and the shooter
/// keeps the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShotError {
    #[error("{0} is off the board")]
    OutOfBounds(Coordinate),
    #[error("{0} has already been fired upon")]
    AlreadyTargeted(Coordinate),
    #[error("the match is already decided")]
    GameOver,
}

/// Failures while laying out a fleet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Ship leaves the board or touches another ship's buffer zone.
    #[error("{class} with its bow at {bow} does not fit")]
    InvalidPlacement { class: ShipClass, bow: Coordinate },
    /// One board used up its placement attempts.
    #[error("fleet placement gave up after {attempts} attempts")]
    BoardGenerationExhausted { attempts: usize },
    /// Every fresh board ran out of attempts.
    #[error("no valid board after {boards} fresh boards")]
    RetriesExhausted { boards: usize },
}
