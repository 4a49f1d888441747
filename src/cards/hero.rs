//! A hero in play together with the items it carries.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardKind, HeroType};
use crate::core::{GameError, Result};

/// A hero card placed in front of a player, with its equipped items.
///
/// Items are only added through [`EquippedHero::equip`]; they leave only
/// when the whole hero leaves play (retreat, bomb, lost battle or attack).
///
/// ```
/// use monster_duel::cards::{Card, CardId, EquippedHero, HeroType};
///
/// let mut hero = EquippedHero::new(Card::hero(CardId::new(1), "Ranger", HeroType::Ranger, 2)).unwrap();
/// hero.equip(Card::item(CardId::new(2), "Bow", 3), 3).unwrap();
/// assert_eq!(hero.total_point(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedHero {
    card: Card,
    items: Vec<Card>,
}

impl EquippedHero {
    /// Put a hero card into play with no items.
    pub fn new(card: Card) -> Result<Self> {
        card.ensure_kind(CardKind::Hero)?;
        Ok(Self {
            card,
            items: Vec::new(),
        })
    }

    /// The hero card itself.
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    #[must_use]
    pub fn hero_type(&self) -> Option<HeroType> {
        self.card.hero_type()
    }

    /// Equipped items in equip order.
    #[must_use]
    pub fn items(&self) -> &[Card] {
        &self.items
    }

    /// Hero point plus the points of every equipped item.
    #[must_use]
    pub fn total_point(&self) -> i32 {
        self.card.point() + self.items.iter().map(Card::point).sum::<i32>()
    }

    /// Check that `item` could be equipped without changing anything.
    pub fn can_equip(&self, item: &Card, max_items: usize) -> Result<()> {
        item.ensure_kind(CardKind::Item)?;
        if self.items.len() >= max_items {
            return Err(GameError::HeroFull { max: max_items });
        }
        Ok(())
    }

    /// Attach an item card.
    pub fn equip(&mut self, item: Card, max_items: usize) -> Result<()> {
        self.can_equip(&item, max_items)?;
        self.items.push(item);
        Ok(())
    }

    /// Break the hero apart: items in equip order, then the hero card.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        let mut cards = self.items;
        cards.push(self.card);
        cards
    }

    /// Number of cards this hero holds in play (hero plus items).
    #[must_use]
    pub fn card_count(&self) -> usize {
        1 + self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ActionKind, CardId};

    fn knight(point: i32) -> Card {
        Card::hero(CardId::new(1), "Knight", HeroType::Knight, point)
    }

    #[test]
    fn test_only_heroes_can_be_equipped_heroes() {
        let item = Card::item(CardId::new(2), "Axe", 1);
        assert!(matches!(
            EquippedHero::new(item),
            Err(GameError::WrongCardKind { .. })
        ));
    }

    #[test]
    fn test_total_point_sums_items() {
        let mut hero = EquippedHero::new(knight(2)).unwrap();
        assert_eq!(hero.total_point(), 2);

        hero.equip(Card::item(CardId::new(2), "Axe", 1), 3).unwrap();
        hero.equip(Card::item(CardId::new(3), "Helm", 2), 3).unwrap();

        assert_eq!(hero.total_point(), 5);
        assert_eq!(hero.items().len(), 2);
        assert_eq!(hero.card_count(), 3);
    }

    #[test]
    fn test_equip_rejects_non_items_and_full_heroes() {
        let mut hero = EquippedHero::new(knight(1)).unwrap();
        let stop = Card::action(CardId::new(9), "Stop", ActionKind::Stop);
        assert!(matches!(
            hero.equip(stop, 3),
            Err(GameError::WrongCardKind { .. })
        ));

        hero.equip(Card::item(CardId::new(2), "Axe", 1), 1).unwrap();
        assert_eq!(
            hero.equip(Card::item(CardId::new(3), "Helm", 1), 1),
            Err(GameError::HeroFull { max: 1 })
        );
        assert_eq!(hero.items().len(), 1);
    }

    #[test]
    fn test_into_cards_items_first() {
        let mut hero = EquippedHero::new(knight(1)).unwrap();
        hero.equip(Card::item(CardId::new(2), "Axe", 1), 3).unwrap();
        hero.equip(Card::item(CardId::new(3), "Helm", 1), 3).unwrap();

        let ids: Vec<_> = hero.into_cards().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CardId::new(2), CardId::new(3), CardId::new(1)]);
    }
}
