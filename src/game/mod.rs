//! The playable game: engine plus builder.

mod builder;
mod engine;

pub use builder::GameBuilder;
pub use engine::{Game, GameStatus, TurnStage};
