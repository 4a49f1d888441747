//! Core engine types: players, RNG, configuration, commands, errors.
//!
//! These are the leaves every other module builds on.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{ActionArg, ActionArgs, Command, CommandRecord};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
