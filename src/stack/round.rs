//! Action rounds: one action card, any number of Stop answers.
//!
//! A round opens when a non-Stop action card is played and stays open
//! until every player has answered. Answering means either playing a Stop
//! (which hands the answer back to everybody else) or calling
//! `end_action`.
//!
//! ## Parity
//!
//! Each Stop cancels whatever the previous card did, including another
//! Stop. Only the count matters: an odd number of Stops cancels the round,
//! an even number (including none) lets the first card resolve.
//!
//! ## Barrier
//!
//! Every player carries an `is_action_done` flag on the table. Playing a
//! card sets the player's own flag and clears everybody else's;
//! `end_action` sets the caller's flag. The round resolves the moment all
//! flags are set.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::{ActionKind, Card};
use crate::core::{ActionArgs, GameError, PlayerId, Result};
use crate::effects::{ActionOutcome, ActionRegistry};
use crate::zones::Table;

/// One action card played into a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedAction {
    pub player: PlayerId,
    pub card: Card,
    pub args: ActionArgs,
}

impl PlayedAction {
    #[must_use]
    pub fn new(player: PlayerId, card: Card, args: ActionArgs) -> Self {
        Self { player, card, args }
    }

    #[must_use]
    pub fn is_stop(&self) -> bool {
        self.card.action_kind() == Some(ActionKind::Stop)
    }
}

/// What happened to the action that opened a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionResult {
    /// The effect ran.
    Executed(ActionOutcome),

    /// An odd number of Stops cancelled it.
    Cancelled,

    /// It survived the Stops but its target was gone by resolution time.
    Fizzled(GameError),
}

/// A closed round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResolution {
    /// The action that opened the round.
    pub action: PlayedAction,

    pub result: ActionResult,

    /// Every card played in the round, in play order. They are in the
    /// discard pile by the time this is returned.
    pub played_cards: Vec<Card>,
}

impl RoundResolution {
    #[must_use]
    pub fn was_stopped(&self) -> bool {
        matches!(self.result, ActionResult::Cancelled)
    }

    /// The action, if its effect actually ran.
    #[must_use]
    pub fn executed(&self) -> Option<&PlayedAction> {
        matches!(self.result, ActionResult::Executed(_)).then_some(&self.action)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&ActionOutcome> {
        match &self.result {
            ActionResult::Executed(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// The pending round, if any.
///
/// Cards played into the round are owned by it until resolution, so they
/// are out of every hand and not yet in the discard pile.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActionRound {
    queue: Vec<PlayedAction>,
}

impl ActionRound {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }

    /// The action that opened the round.
    #[must_use]
    pub fn pending(&self) -> Option<&PlayedAction> {
        self.queue.first()
    }

    /// Every play so far, opener first.
    #[must_use]
    pub fn played(&self) -> &[PlayedAction] {
        &self.queue
    }

    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.queue.iter().filter(|p| p.is_stop()).count()
    }

    /// Whether the round would be cancelled if it resolved now.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.stop_count() % 2 == 1
    }

    /// Number of cards held by the round.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether an action of `kind` may be played right now.
    pub fn accepts(&self, kind: ActionKind) -> Result<()> {
        match (kind, self.is_open()) {
            (ActionKind::Stop, false) => Err(GameError::NoPendingAction),
            (ActionKind::Stop, true) | (_, false) => Ok(()),
            (_, true) => Err(GameError::ActionInProgress),
        }
    }

    /// Add a play and move the barrier: the player is done, everybody else
    /// owes an answer.
    pub fn push(&mut self, table: &mut Table, played: PlayedAction) -> Result<()> {
        self.accepts(played.card.require_action()?)?;

        for (id, player) in table.players.iter_mut() {
            player.is_action_done = id == played.player;
        }
        debug!(player = %played.player, card = %played.card, stops = self.stop_count(), "action played");
        self.queue.push(played);
        Ok(())
    }

    /// `player` has nothing more to add. Resolves the round if that was the
    /// last answer owed.
    pub fn end_action(
        &mut self,
        table: &mut Table,
        registry: &ActionRegistry,
        player: PlayerId,
    ) -> Result<Option<RoundResolution>> {
        if !self.is_open() {
            return Err(GameError::NoPendingAction);
        }
        table.player_mut(player).is_action_done = true;

        if table.players.values().all(|p| p.is_action_done) {
            Ok(self.resolve(table, registry))
        } else {
            Ok(None)
        }
    }

    /// Close the round: run the opener unless cancelled, discard every card.
    fn resolve(&mut self, table: &mut Table, registry: &ActionRegistry) -> Option<RoundResolution> {
        let cancelled = self.is_cancelled();
        let queue = std::mem::take(&mut self.queue);
        let action = queue.first()?.clone();

        let result = if cancelled {
            ActionResult::Cancelled
        } else {
            let applied = action
                .card
                .require_action()
                .and_then(|kind| registry.get(kind))
                .and_then(|effect| effect.apply(table, action.player, &action.args));
            match applied {
                Ok(outcome) => ActionResult::Executed(outcome),
                Err(err) => {
                    warn!(player = %action.player, card = %action.card, error = %err, "action fizzled");
                    ActionResult::Fizzled(err)
                }
            }
        };
        debug!(card = %action.card, ?result, "action round resolved");

        let played_cards: Vec<Card> = queue.into_iter().map(|p| p.card).collect();
        table.discard.extend(played_cards.iter().cloned());

        Some(RoundResolution {
            action,
            result,
            played_cards,
        })
    }

    /// Drop the round without resolving it. Used when a new game starts.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
