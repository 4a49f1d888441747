//! # monster-duel
//!
//! Engine for a two-seat, turn-based monster-battling card game: a human
//! player against a scripted opponent, sharing one deck.
//!
//! ## Rules in brief
//!
//! 1. **Turns**: the active player draws one card, may put a hero into
//!    play and equip it with items, and ends the turn.
//!
//! 2. **Monsters**: a monster drawn from the deck invades. The active
//!    player must battle it: the strongest hero on the table (ties to the
//!    active player) kills it, or every hero falls and the monster waits in
//!    the available pool until someone provokes it again.
//!
//! 3. **Actions**: either player may play an action card whenever no other
//!    action is pending. The other player may answer with Stop, which can
//!    itself be stopped; an odd number of Stops cancels the action.
//!
//! 4. **Scoring**: when the deck runs out the player with the most kills
//!    wins.
//!
//! ## Architecture
//!
//! - **Commands in, events out**: the presentation layer calls `Game`
//!   commands and receives typed `GameEvent`s through `GameListener`s.
//!
//! - **Policy-driven opponent**: the NPC seat is played by an
//!   `OpponentPolicy`, consulted in-line after every command.
//!
//! - **Persistent history**: every applied command is kept in an `im`
//!   vector for replay and inspection.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, commands, errors
//! - `cards`: card model, equipped heroes, card catalog
//! - `zones`: deck and table
//! - `effects`: action effects and their registry
//! - `stack`: action rounds with Stop parity
//! - `rules`: battle resolution and scoring
//! - `events`: typed notifications
//! - `policy`: opponent policy contract and a reference opponent
//! - `game`: the engine and its builder

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod stack;
pub mod rules;
pub mod events;
pub mod policy;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ActionArg, ActionArgs, Command, CommandRecord, GameConfig, GameError, GameRng, PlayerId,
    PlayerMap, Result,
};

pub use crate::cards::{
    ActionKind, Card, CardBody, CardCatalog, CardId, CardKind, EquippedHero, HeroType,
};

pub use crate::zones::{Dealt, Deck, Encounter, Player, Table};

pub use crate::effects::{ActionEffect, ActionOutcome, ActionRegistry};

pub use crate::stack::{ActionResult, ActionRound, PlayedAction, RoundResolution};

pub use crate::rules::{BattleReport, BattleWinner, GameResult};

pub use crate::events::{EventBus, EventLog, GameEvent, GameListener};

pub use crate::policy::{GameView, OpponentPolicy, Reaction, SimpleOpponent};

pub use crate::game::{Game, GameBuilder, GameStatus, TurnStage};
