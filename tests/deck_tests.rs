//! Deck integration tests.
//!
//! Dealing order, exhaustion and invasion reporting.

use proptest::prelude::*;

use monster_duel::cards::{Card, CardId};
use monster_duel::core::{GameError, GameRng};
use monster_duel::zones::{Dealt, Deck};

/// Items with every fourth card a monster.
fn mixed(n: usize) -> Vec<Card> {
    (1..=n as u32)
        .map(|i| {
            if i % 4 == 0 {
                Card::monster(CardId::new(i), "Goblin", 3)
            } else {
                Card::item(CardId::new(i), "Shield", 1)
            }
        })
        .collect()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Every loaded card comes out exactly once, then the deck is empty.
    #[test]
    fn prop_every_card_dealt_once(n in 0usize..60, seed in any::<u64>()) {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(seed);
        deck.shuffle_and_load(mixed(n), &mut rng);

        let mut seen = Vec::new();
        for _ in 0..n {
            let dealt = deck.deal().unwrap();
            prop_assert_eq!(dealt.is_invasion(), dealt.card().is_monster());
            seen.push(dealt.into_card().id.raw());
        }
        prop_assert_eq!(deck.deal(), Err(GameError::EmptyDeck));

        seen.sort_unstable();
        prop_assert_eq!(seen, (1..=n as u32).collect::<Vec<_>>());
    }

    /// Peeking never changes what is dealt next.
    #[test]
    fn prop_peek_matches_deal(n in 1usize..30, depth in 0usize..10, seed in any::<u64>()) {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(seed);
        deck.shuffle_and_load(mixed(n), &mut rng);

        let peeked: Vec<CardId> = deck.peek_next(depth).into_iter().map(|c| c.id).collect();
        prop_assert_eq!(peeked.len(), depth.min(n));

        let dealt: Vec<CardId> = (0..peeked.len()).map(|_| deck.deal().unwrap().card().id).collect();
        prop_assert_eq!(peeked, dealt);
    }
}

// =============================================================================
// Setup Order
// =============================================================================

/// Same seed, same order.
#[test]
fn test_shuffle_is_deterministic() {
    let order = |seed| {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(seed);
        deck.shuffle_and_load(mixed(20), &mut rng);
        deck.iter().map(|c| c.id).collect::<Vec<_>>()
    };

    assert_eq!(order(42), order(42));
    assert_ne!(order(42), order(43));
}

/// Monsters loaded after the hand cards are dealt before any of them.
#[test]
fn test_monster_batch_on_top() {
    let mut deck = Deck::new();
    let mut rng = GameRng::new(5);
    deck.shuffle_and_load(
        (1..=6).map(|i| Card::item(CardId::new(i), "Sword", 2)).collect(),
        &mut rng,
    );
    deck.shuffle_and_load(
        (7..=9).map(|i| Card::monster(CardId::new(i), "Orc", 4)).collect(),
        &mut rng,
    );

    for _ in 0..3 {
        assert!(matches!(deck.deal(), Ok(Dealt::Monster(_))));
    }
    for _ in 0..6 {
        assert!(matches!(deck.deal(), Ok(Dealt::Card(_))));
    }
    assert!(deck.is_empty());
}
