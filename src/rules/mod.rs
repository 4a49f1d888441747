//! Game rules that are not tied to a single card.
//!
//! - battle resolution against the active monster
//! - scoring a finished game

mod battle;
mod result;

pub use battle::{champion, resolve_battle, BattleReport, BattleWinner};
pub use result::{is_exhausted, GameResult};
