#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
pub use player::{AiPlayer, Player, Strategy};
#[cfg(feature = "std")]
pub use player::{parse_coord, CliPlayer, InputError};
