//! Core sea battle engine (no_std compatible)
//!
//! Pure game logic: coordinates, ships, boards and shot resolution, random
//! fleet layout, hunt-and-target shot selection and the match controller.
//! Needs only `alloc`; console I/O lives outside this module.

pub mod ai;
pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod game;
pub mod placement;
pub mod ship;

// Re-export commonly used types
pub use ai::{hunt, hunt_and_target, Axis, TargetingMemory};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, Cell, Mask, TargetView};
pub use common::{PlacementError, ShotError, ShotOutcome};
pub use config::*;
pub use coordinate::Coordinate;
pub use game::{Game, GameStatus, MatchSummary, ShotReport, Side, SideSummary};
pub use placement::{random_board, FleetPlacer};
pub use ship::{Orientation, Ship, ShipClass, ShipState};
