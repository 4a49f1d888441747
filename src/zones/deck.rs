//! The shared draw pile.
//!
//! Stored as a `Vec` whose last element is the top of the pile, so dealing
//! is a `pop`. Cards loaded with `shuffle_and_load` are shuffled as one batch
//! and placed on top of whatever is already there; batches never mix.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::core::{GameError, GameRng, Result};

/// What came off the top of the deck.
///
/// A monster is never a plain draw: it invades, and the caller has to put
/// it into the encounter slot instead of a hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dealt {
    Card(Card),
    Monster(Card),
}

impl Dealt {
    /// The dealt card, whatever it was.
    #[must_use]
    pub fn card(&self) -> &Card {
        match self {
            Dealt::Card(card) | Dealt::Monster(card) => card,
        }
    }

    #[must_use]
    pub fn into_card(self) -> Card {
        match self {
            Dealt::Card(card) | Dealt::Monster(card) => card,
        }
    }

    #[must_use]
    pub fn is_invasion(&self) -> bool {
        matches!(self, Dealt::Monster(_))
    }
}

/// Ordered draw pile.
///
/// ```
/// use monster_duel::cards::{Card, CardId};
/// use monster_duel::core::GameRng;
/// use monster_duel::zones::{Deck, Dealt};
///
/// let mut deck = Deck::new();
/// let mut rng = GameRng::new(1);
/// deck.shuffle_and_load(vec![Card::monster(CardId::new(1), "Orc", 4)], &mut rng);
///
/// assert!(matches!(deck.deal(), Ok(Dealt::Monster(_))));
/// assert!(deck.deal().is_err());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    /// Index 0 is the bottom, the last element is the top.
    cards: Vec<Card>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shuffle `cards` and put them on top of the pile.
    pub fn shuffle_and_load(&mut self, mut cards: Vec<Card>, rng: &mut GameRng) {
        rng.shuffle(&mut cards);
        self.cards.append(&mut cards);
    }

    /// Remove and return the top card.
    pub fn deal(&mut self) -> Result<Dealt> {
        let card = self.cards.pop().ok_or(GameError::EmptyDeck)?;
        if card.is_monster() {
            Ok(Dealt::Monster(card))
        } else {
            Ok(Dealt::Card(card))
        }
    }

    /// The next `n` cards, top first, without removing them.
    ///
    /// Returns fewer than `n` when the pile is shorter.
    #[must_use]
    pub fn peek_next(&self, n: usize) -> Vec<&Card> {
        self.cards.iter().rev().take(n).collect()
    }

    /// Pull a specific card out of the pile, wherever it is.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Empty the pile.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ActionKind, HeroType};

    fn hand_cards() -> Vec<Card> {
        vec![
            Card::hero(CardId::new(1), "Knight", HeroType::Knight, 1),
            Card::item(CardId::new(2), "Sword", 2),
            Card::action(CardId::new(3), "Stop", ActionKind::Stop),
        ]
    }

    #[test]
    fn test_deal_until_empty() {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(3);
        deck.shuffle_and_load(hand_cards(), &mut rng);

        let mut seen: Vec<_> = (0..3).map(|_| deck.deal().unwrap().into_card().id.raw()).collect();
        seen.sort();

        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(deck.deal(), Err(GameError::EmptyDeck));
    }

    #[test]
    fn test_later_batch_sits_on_top() {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(3);
        deck.shuffle_and_load(hand_cards(), &mut rng);
        deck.shuffle_and_load(
            vec![
                Card::monster(CardId::new(10), "Orc", 4),
                Card::monster(CardId::new(11), "Troll", 5),
            ],
            &mut rng,
        );

        assert!(deck.deal().unwrap().is_invasion());
        assert!(deck.deal().unwrap().is_invasion());
        assert!(!deck.deal().unwrap().is_invasion());
    }

    #[test]
    fn test_peek_next_is_top_first_and_non_destructive() {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(9);
        deck.shuffle_and_load(hand_cards(), &mut rng);

        let peeked: Vec<CardId> = deck.peek_next(2).into_iter().map(|c| c.id).collect();
        assert_eq!(deck.len(), 3);

        let dealt: Vec<CardId> = (0..2).map(|_| deck.deal().unwrap().card().id).collect();
        assert_eq!(peeked, dealt);
    }

    #[test]
    fn test_peek_past_the_end() {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(9);
        deck.shuffle_and_load(hand_cards(), &mut rng);

        assert_eq!(deck.peek_next(10).len(), 3);
        deck.clear();
        assert!(deck.peek_next(3).is_empty());
        assert!(deck.is_empty());
    }

    #[test]
    fn test_remove_specific_card() {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(9);
        deck.shuffle_and_load(hand_cards(), &mut rng);

        let stop = deck.remove(CardId::new(3)).unwrap();
        assert_eq!(stop.action_kind(), Some(ActionKind::Stop));
        assert_eq!(deck.len(), 2);
        assert!(deck.remove(CardId::new(3)).is_none());
    }
}
