//! Engine error type.
//!
//! Every command validates before it mutates, so any `Err` leaves the game
//! exactly as it was before the call.

use thiserror::Error;

use crate::cards::{ActionKind, CardId, CardKind};

/// Errors surfaced by engine commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Deal from an empty pile.
    #[error("the deck is empty")]
    EmptyDeck,

    /// Stop (or end-action) with nothing to respond to.
    #[error("no pending action to stop")]
    NoPendingAction,

    /// An action round is open; only Stop cards are accepted.
    #[error("an action is already in progress, only stop can be played")]
    ActionInProgress,

    /// Provoke/Steal argument does not resolve to a legal target.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// Battle called with no monster in play.
    #[error("no monster to battle")]
    NoActiveMonster,

    /// Command issued by the wrong player or at the wrong point of the turn.
    #[error("illegal state: {0}")]
    IllegalState(String),

    #[error("{0} is not in the player's hand")]
    CardNotInHand(CardId),

    #[error("{card} is a {found:?} card, expected {expected:?}")]
    WrongCardKind {
        card: CardId,
        expected: CardKind,
        found: CardKind,
    },

    #[error("player has no hero to equip")]
    NoHero,

    #[error("hero already carries {max} items")]
    HeroFull { max: usize },

    /// The action registry has no effect for this kind.
    #[error("no effect registered for {0:?}")]
    UnknownAction(ActionKind),

    /// A config file or card catalog could not be parsed or is unusable.
    #[error("bad configuration: {0}")]
    Config(String),
}

impl GameError {
    pub(crate) fn illegal(reason: impl Into<String>) -> Self {
        GameError::IllegalState(reason.into())
    }

    pub(crate) fn target(reason: impl Into<String>) -> Self {
        GameError::InvalidTarget(reason.into())
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;
