//! Read-only view of a game for the policy.

use crate::cards::Card;
use crate::core::PlayerId;
use crate::stack::{ActionRound, PlayedAction};
use crate::zones::{Encounter, Player, Table};

/// What a policy may look at when choosing a move.
///
/// Hidden information is not filtered: the view exposes the whole table,
/// including the opponent's hand and the deck size (not its order).
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    table: &'a Table,
    round: &'a ActionRound,
    me: PlayerId,
    max_hero_items: usize,
}

impl<'a> GameView<'a> {
    #[must_use]
    pub fn new(table: &'a Table, round: &'a ActionRound, me: PlayerId, max_hero_items: usize) -> Self {
        Self {
            table,
            round,
            me,
            max_hero_items,
        }
    }

    /// The seat the policy plays.
    #[must_use]
    pub fn me(&self) -> PlayerId {
        self.me
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &'a Player {
        self.table.player(id)
    }

    #[must_use]
    pub fn my_player(&self) -> &'a Player {
        self.table.player(self.me)
    }

    #[must_use]
    pub fn opponent(&self) -> &'a Player {
        self.table.player(self.my_player().next_player())
    }

    #[must_use]
    pub fn encounter(&self) -> Option<&'a Encounter> {
        self.table.encounter.as_ref()
    }

    #[must_use]
    pub fn monster(&self) -> Option<&'a Card> {
        self.table.monster()
    }

    #[must_use]
    pub fn available_monsters(&self) -> &'a [Card] {
        &self.table.available_monsters
    }

    /// The action that opened the pending round.
    #[must_use]
    pub fn pending_action(&self) -> Option<&'a PlayedAction> {
        self.round.pending()
    }

    #[must_use]
    pub fn round(&self) -> &'a ActionRound {
        self.round
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.table.deck.len()
    }

    #[must_use]
    pub fn max_hero_items(&self) -> usize {
        self.max_hero_items
    }

    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.my_player().is_active()
    }
}
