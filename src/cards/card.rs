//! Cards: identity plus a kind-specific body.
//!
//! The four card kinds differ only in a handful of attributes, so a card is
//! one record (`id`, `name`) with a `CardBody` sum type instead of a type
//! per kind. Matching on the body is exhaustive, which is where the rules
//! engine gets its safety from.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result};

/// Unique identifier of a card within one game.
///
/// Allocated sequentially by `new_game`; stable for the card's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The kind of a card; decides which commands accept it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Hero,
    Item,
    Action,
    Monster,
}

/// Hero class. Cosmetic for the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroType {
    Knight,
    Wizard,
    Ranger,
}

/// What an action card does when its round resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Kill the active monster for the player and wipe every hero.
    AtomicBomb,
    /// Cancel the pending action (or cancel a cancellation).
    Stop,
    /// Look at the next cards of the deck.
    Radar,
    /// Take a card from the opponent's hand.
    Steal,
    /// Take your hero and its items back into your hand.
    Retreat,
    /// Bring a monster from the available pool into play.
    Provoke,
    /// Heroes fight each other; the weaker one leaves play.
    Attack,
}

impl ActionKind {
    /// Every action kind, in declaration order.
    pub const ALL: [ActionKind; 7] = [
        ActionKind::AtomicBomb,
        ActionKind::Stop,
        ActionKind::Radar,
        ActionKind::Steal,
        ActionKind::Retreat,
        ActionKind::Provoke,
        ActionKind::Attack,
    ];
}

/// Kind-specific attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardBody {
    Hero { hero_type: HeroType, point: i32 },
    Item { point: i32 },
    Action { action: ActionKind },
    Monster { point: i32 },
}

impl CardBody {
    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self {
            CardBody::Hero { .. } => CardKind::Hero,
            CardBody::Item { .. } => CardKind::Item,
            CardBody::Action { .. } => CardKind::Action,
            CardBody::Monster { .. } => CardKind::Monster,
        }
    }
}

/// A card in play.
///
/// ## Example
///
/// ```
/// use monster_duel::cards::{Card, CardId, CardKind, HeroType};
///
/// let knight = Card::hero(CardId::new(1), "Knight", HeroType::Knight, 2);
/// assert_eq!(knight.kind(), CardKind::Hero);
/// assert_eq!(knight.point(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub body: CardBody,
}

impl Card {
    #[must_use]
    pub fn hero(id: CardId, name: impl Into<String>, hero_type: HeroType, point: i32) -> Self {
        Self {
            id,
            name: name.into(),
            body: CardBody::Hero { hero_type, point },
        }
    }

    #[must_use]
    pub fn item(id: CardId, name: impl Into<String>, point: i32) -> Self {
        Self {
            id,
            name: name.into(),
            body: CardBody::Item { point },
        }
    }

    #[must_use]
    pub fn action(id: CardId, name: impl Into<String>, action: ActionKind) -> Self {
        Self {
            id,
            name: name.into(),
            body: CardBody::Action { action },
        }
    }

    #[must_use]
    pub fn monster(id: CardId, name: impl Into<String>, point: i32) -> Self {
        Self {
            id,
            name: name.into(),
            body: CardBody::Monster { point },
        }
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.body.kind()
    }

    /// Combat strength. Action cards have none and report 0.
    #[must_use]
    pub fn point(&self) -> i32 {
        match self.body {
            CardBody::Hero { point, .. } | CardBody::Item { point } | CardBody::Monster { point } => point,
            CardBody::Action { .. } => 0,
        }
    }

    /// The action kind, if this is an action card.
    #[must_use]
    pub fn action_kind(&self) -> Option<ActionKind> {
        match self.body {
            CardBody::Action { action } => Some(action),
            _ => None,
        }
    }

    /// The hero class, if this is a hero card.
    #[must_use]
    pub fn hero_type(&self) -> Option<HeroType> {
        match self.body {
            CardBody::Hero { hero_type, .. } => Some(hero_type),
            _ => None,
        }
    }

    /// The action kind, or `WrongCardKind` for any other card.
    pub fn require_action(&self) -> Result<ActionKind> {
        match self.body {
            CardBody::Action { action } => Ok(action),
            _ => Err(GameError::WrongCardKind {
                card: self.id,
                expected: CardKind::Action,
                found: self.kind(),
            }),
        }
    }

    #[must_use]
    pub fn is_monster(&self) -> bool {
        self.kind() == CardKind::Monster
    }

    /// Fail with `WrongCardKind` unless this card is of `expected` kind.
    pub fn ensure_kind(&self, expected: CardKind) -> Result<()> {
        let found = self.kind();
        if found == expected {
            Ok(())
        } else {
            Err(GameError::WrongCardKind {
                card: self.id,
                expected,
                found,
            })
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}", self.name, self.id.0)
    }
}
