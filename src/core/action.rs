//! Commands, action arguments and the command history.
//!
//! A `Command` is everything a seat can ask the engine to do. Human
//! commands come from the presentation layer; opponent commands come from
//! the `OpponentPolicy`. Both go through the same validation path and end
//! up in the same history.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::CardId;

/// One argument of an action card.
///
/// Provoke takes a `Card` (the monster to pull from the available pool),
/// Steal takes an `Index` into the opponent's hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionArg {
    Card(CardId),
    Index(usize),
}

/// Arguments of an action card. Most actions take none, a few take one.
pub type ActionArgs = SmallVec<[ActionArg; 2]>;

/// A command issued by one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Draw,
    SetHero(CardId),
    EquipHero(CardId),
    PlayAction { card: CardId, args: ActionArgs },
    EndAction,
    Battle,
    EndTurn,
}

impl Command {
    /// Play an action card with no arguments.
    #[must_use]
    pub fn play(card: CardId) -> Self {
        Command::PlayAction {
            card,
            args: ActionArgs::new(),
        }
    }

    /// Play an action card with arguments.
    #[must_use]
    pub fn play_with(card: CardId, args: &[ActionArg]) -> Self {
        Command::PlayAction {
            card,
            args: SmallVec::from_slice(args),
        }
    }
}

/// A successfully applied command with its position in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The seat that issued the command.
    pub player: PlayerId,

    /// The command applied.
    pub command: Command,

    /// Turn number when it was applied (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(player: PlayerId, command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            command,
            turn,
            sequence,
        }
    }
}
