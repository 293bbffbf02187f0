//! Player trait and implementations
//!
//! A player's one job is to pick the next cell to fire at:
//! - AiPlayer: random or hunt-and-target shot selection
//! - CliPlayer: interactive command-line player

use crate::core::{Coordinate, ShotError, ShotOutcome, TargetView};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// A player sees the opponent only through a [`TargetView`] and is told how
/// each of its shots went.
pub trait Player {
    /// Choose the next coordinate to fire at.
    ///
    /// An error ends the match, e.g. when the input stream is closed.
    fn next_shot(&mut self, rng: &mut SmallRng, view: &TargetView<'_>)
        -> anyhow::Result<Coordinate>;

    /// Inform the player of the result of its last accepted shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the player that its shot was refused; it will be asked again.
    fn handle_rejected_shot(&mut self, _target: Coordinate, _error: ShotError) {}
}

pub mod ai;
pub use ai::{AiPlayer, Strategy};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_coord, CliPlayer, InputError};
