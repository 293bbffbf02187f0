//! Commonly used types for ease of import.

pub use crate::core::{
    Board, Coordinate, Game, GameStatus, Orientation, Ship, ShotError, ShotOutcome, Side,
    TargetView, FLEET,
};
pub use crate::player::{AiPlayer, Player, Strategy};

#[cfg(feature = "std")]
pub use crate::player::CliPlayer;
