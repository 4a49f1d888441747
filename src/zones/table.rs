//! The board: per-player state plus the shared zones.
//!
//! Every card of a game sits in exactly one place: the deck, a hand, an
//! equipped hero, the encounter slot, the available-monster pool, a kill
//! tally, the discard pile, or (outside the table) a pending action round.
//! Everything here moves cards; nothing clones or drops them.

use serde::{Deserialize, Serialize};

use super::deck::Deck;
use crate::cards::{Card, CardId, EquippedHero};
use crate::core::{GameError, PlayerId, PlayerMap, Result};

/// Per-seat state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) hand: Vec<Card>,
    pub(crate) hero: Option<EquippedHero>,
    pub(crate) monsters_killed: Vec<Card>,
    pub(crate) is_active: bool,
    pub(crate) is_action_done: bool,
    pub(crate) has_drawn: bool,
    pub(crate) next_player: PlayerId,
    is_npc: bool,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, is_npc: bool) -> Self {
        Self {
            id,
            hand: Vec::new(),
            hero: None,
            monsters_killed: Vec::new(),
            is_active: false,
            is_action_done: true,
            has_drawn: false,
            next_player: id.opponent(),
            is_npc,
        }
    }

    /// Back to the start-of-game state. Identity and seating are kept.
    pub(crate) fn reset(&mut self) {
        self.hand.clear();
        self.hero = None;
        self.monsters_killed.clear();
        self.is_active = false;
        self.is_action_done = true;
        self.has_drawn = false;
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Cards in hand, in the order they arrived.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hero(&self) -> Option<&EquippedHero> {
        self.hero.as_ref()
    }

    /// Defeated monsters, in kill order.
    #[must_use]
    pub fn monsters_killed(&self) -> &[Card] {
        &self.monsters_killed
    }

    #[must_use]
    pub fn kill_count(&self) -> usize {
        self.monsters_killed.len()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn is_action_done(&self) -> bool {
        self.is_action_done
    }

    /// Whether this player already drew during the current turn.
    #[must_use]
    pub fn has_drawn(&self) -> bool {
        self.has_drawn
    }

    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        self.next_player
    }

    #[must_use]
    pub fn is_npc(&self) -> bool {
        self.is_npc
    }

    /// Total point of the equipped hero, if any.
    #[must_use]
    pub fn hero_point(&self) -> Option<i32> {
        self.hero.as_ref().map(EquippedHero::total_point)
    }

    /// Look a card up in hand.
    pub fn hand_card(&self, id: CardId) -> Result<&Card> {
        self.hand
            .iter()
            .find(|c| c.id == id)
            .ok_or(GameError::CardNotInHand(id))
    }

    /// Remove a card from hand by id.
    pub(crate) fn take_from_hand(&mut self, id: CardId) -> Result<Card> {
        let index = self
            .hand
            .iter()
            .position(|c| c.id == id)
            .ok_or(GameError::CardNotInHand(id))?;
        Ok(self.hand.remove(index))
    }

    pub(crate) fn add_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Take the hero (and its items) out of play.
    pub(crate) fn take_hero(&mut self) -> Option<EquippedHero> {
        self.hero.take()
    }
}

/// The monster currently being confronted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub monster: Card,
    /// Pulled in by Provoke rather than drawn from the deck.
    pub provoked: bool,
}

/// All cards and seats of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Table {
    pub deck: Deck,
    pub players: PlayerMap<Player>,
    pub encounter: Option<Encounter>,
    /// Monsters that beat the heroes, waiting to be provoked again.
    pub available_monsters: Vec<Card>,
    /// Played action cards and heroes/items that left play.
    pub discard: Vec<Card>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// An empty table with the human in seat 0 and the NPC in seat 1, each
    /// the other's next player.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deck: Deck::new(),
            players: PlayerMap::new(|id| Player::new(id, id == PlayerId::NPC)),
            encounter: None,
            available_monsters: Vec::new(),
            discard: Vec::new(),
        }
    }

    /// Empty every zone and reset both players.
    pub fn reset(&mut self) {
        self.deck.clear();
        for (_, player) in self.players.iter_mut() {
            player.reset();
        }
        self.encounter = None;
        self.available_monsters.clear();
        self.discard.clear();
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// The player whose turn it is, if a game is running.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.is_active)
            .map(|(id, _)| id)
    }

    /// Make `id` the only active player.
    pub fn set_active(&mut self, id: PlayerId) {
        for (pid, player) in self.players.iter_mut() {
            player.is_active = pid == id;
        }
    }

    /// The active monster, if any.
    #[must_use]
    pub fn monster(&self) -> Option<&Card> {
        self.encounter.as_ref().map(|e| &e.monster)
    }

    /// Send a player's hero and items to the discard pile.
    ///
    /// Returns whether there was a hero to remove.
    pub fn clear_hero(&mut self, id: PlayerId) -> bool {
        match self.players[id].take_hero() {
            Some(hero) => {
                self.discard.extend(hero.into_cards());
                true
            }
            None => false,
        }
    }

    /// Send every hero in play to the discard pile.
    pub fn clear_all_heroes(&mut self) {
        for id in PlayerId::all() {
            self.clear_hero(id);
        }
    }

    /// Move a monster into a player's kill tally.
    pub fn record_kill(&mut self, id: PlayerId, monster: Card) {
        self.players[id].monsters_killed.push(monster);
    }

    /// Number of cards on the table across every zone.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let per_player: usize = self
            .players
            .values()
            .map(|p| {
                p.hand.len()
                    + p.monsters_killed.len()
                    + p.hero.as_ref().map_or(0, EquippedHero::card_count)
            })
            .sum();

        self.deck.len()
            + per_player
            + usize::from(self.encounter.is_some())
            + self.available_monsters.len()
            + self.discard.len()
    }
}
