//! The action effect contract.
//!
//! An effect is what an action card does once its round resolves without
//! being cancelled. Effects only touch the `Table`; events, history and
//! turn flow stay with the engine.
//!
//! ## Two phases
//!
//! - `check` runs when the card is played. It reads the table and rejects
//!   plays that could never work (bad target, wrong argument), so a doomed
//!   card never opens a round.
//! - `apply` runs at resolution. The table may have changed while players
//!   answered with Stops, so `apply` validates again before mutating and
//!   must leave the table untouched when it fails.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionKind, Card, CardId};
use crate::core::{ActionArg, GameError, PlayerId, Result};
use crate::zones::Table;

/// What a resolved effect did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Every hero left play; `monster_killed` if there was a monster to take.
    Bombed { monster_killed: bool },

    /// The monster now in the encounter slot.
    Provoked(Card),

    /// The top of the deck, top first. Only the actor should be shown these.
    Revealed(Vec<Card>),

    /// The card that moved into the actor's hand.
    Stolen(Card),

    /// The actor's hero and items went back to hand.
    Retreated,

    /// Heroes removed by the fight, if any.
    Attacked(Vec<PlayerId>),

    /// The effect had nothing to act on.
    Nothing,
}

/// Behaviour of one action kind.
pub trait ActionEffect: Send + Sync {
    /// The kind this effect implements.
    fn kind(&self) -> ActionKind;

    /// Validate a play without changing anything.
    fn check(&self, table: &Table, actor: PlayerId, args: &[ActionArg]) -> Result<()>;

    /// Validate again and mutate.
    fn apply(&self, table: &mut Table, actor: PlayerId, args: &[ActionArg]) -> Result<ActionOutcome>;
}

/// The first argument as a card id.
pub(crate) fn card_arg(args: &[ActionArg]) -> Result<CardId> {
    match args.first() {
        Some(ActionArg::Card(id)) => Ok(*id),
        Some(other) => Err(GameError::target(format!("expected a card, got {:?}", other))),
        None => Err(GameError::target("missing card argument")),
    }
}

/// The first argument as a hand index.
pub(crate) fn index_arg(args: &[ActionArg]) -> Result<usize> {
    match args.first() {
        Some(ActionArg::Index(i)) => Ok(*i),
        Some(other) => Err(GameError::target(format!("expected an index, got {:?}", other))),
        None => Err(GameError::target("missing index argument")),
    }
}
