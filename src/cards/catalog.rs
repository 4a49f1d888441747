//! Card catalog: the templates a new game is dealt from.
//!
//! The catalog is split by category because setup shuffles them as separate
//! piles: heroes, items and skills go in first and starting hands are dealt
//! from them, monsters are loaded afterwards.
//!
//! `CardCatalog::standard()` is the built-in set. Frontends can ship their
//! own as JSON:
//!
//! ```
//! use monster_duel::cards::CardCatalog;
//!
//! let json = r#"{
//!     "heroes":   [{ "name": "Knight", "body": { "Hero": { "hero_type": "Knight", "point": 2 } }, "count": 2 }],
//!     "items":    [{ "name": "Sword",  "body": { "Item": { "point": 1 } } }],
//!     "skills":   [{ "name": "Stop",   "body": { "Action": { "action": "Stop" } }, "count": 3 }],
//!     "monsters": [{ "name": "Slime",  "body": { "Monster": { "point": 2 } } }]
//! }"#;
//! let catalog = CardCatalog::from_json(json).unwrap();
//! assert_eq!(catalog.card_count(), 7);
//! ```

use serde::{Deserialize, Serialize};

use super::card::{ActionKind, Card, CardBody, CardId, CardKind, HeroType};
use crate::core::{GameError, Result};

fn one() -> u32 {
    1
}

/// A card design and how many copies of it go into the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    pub name: String,
    pub body: CardBody,
    #[serde(default = "one")]
    pub count: u32,
}

impl CardTemplate {
    #[must_use]
    pub fn new(name: impl Into<String>, body: CardBody, count: u32) -> Self {
        Self {
            name: name.into(),
            body,
            count,
        }
    }

    fn kind(&self) -> CardKind {
        self.body.kind()
    }
}

/// Card templates grouped by setup pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCatalog {
    #[serde(default)]
    pub heroes: Vec<CardTemplate>,
    #[serde(default)]
    pub items: Vec<CardTemplate>,
    #[serde(default)]
    pub skills: Vec<CardTemplate>,
    #[serde(default)]
    pub monsters: Vec<CardTemplate>,
}

/// Concrete cards minted from a catalog, still grouped by pile.
#[derive(Clone, Debug, Default)]
pub struct CardSet {
    pub heroes: Vec<Card>,
    pub items: Vec<Card>,
    pub skills: Vec<Card>,
    pub monsters: Vec<Card>,
}

impl CardSet {
    /// Heroes, items and skills: the pile starting hands are dealt from.
    #[must_use]
    pub fn take_hand_pile(&mut self) -> Vec<Card> {
        let mut pile = std::mem::take(&mut self.heroes);
        pile.append(&mut self.items);
        pile.append(&mut self.skills);
        pile
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heroes.len() + self.items.len() + self.skills.len() + self.monsters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CardCatalog {
    /// The built-in card set.
    #[must_use]
    pub fn standard() -> Self {
        let hero = |name: &str, hero_type, point, count| {
            CardTemplate::new(name, CardBody::Hero { hero_type, point }, count)
        };
        let item = |name: &str, point, count| CardTemplate::new(name, CardBody::Item { point }, count);
        let skill = |name: &str, action, count| CardTemplate::new(name, CardBody::Action { action }, count);
        let monster = |name: &str, point| CardTemplate::new(name, CardBody::Monster { point }, 1);

        Self {
            heroes: vec![
                hero("Squire", HeroType::Knight, 1, 2),
                hero("Paladin", HeroType::Knight, 2, 1),
                hero("Apprentice", HeroType::Wizard, 1, 2),
                hero("Archmage", HeroType::Wizard, 2, 1),
                hero("Scout", HeroType::Ranger, 1, 2),
                hero("Hunter", HeroType::Ranger, 3, 1),
            ],
            items: vec![
                item("Sword", 2, 3),
                item("Shield", 1, 3),
                item("Staff", 2, 2),
                item("Bow", 3, 2),
                item("Armor", 1, 2),
            ],
            skills: vec![
                skill("Atomic Bomb", ActionKind::AtomicBomb, 2),
                skill("Stop", ActionKind::Stop, 6),
                skill("Radar", ActionKind::Radar, 3),
                skill("Steal", ActionKind::Steal, 3),
                skill("Retreat", ActionKind::Retreat, 3),
                skill("Provoke", ActionKind::Provoke, 3),
                skill("Attack", ActionKind::Attack, 3),
            ],
            monsters: vec![
                monster("Slime", 2),
                monster("Goblin", 3),
                monster("Orc", 4),
                monster("Troll", 5),
                monster("Ogre", 6),
                monster("Wyvern", 7),
                monster("Golem", 8),
                monster("Dragon", 9),
                monster("Hydra", 10),
            ],
        }
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check every template sits in the pile matching its kind.
    pub fn validate(&self) -> Result<()> {
        let piles = [
            ("heroes", &self.heroes, CardKind::Hero),
            ("items", &self.items, CardKind::Item),
            ("skills", &self.skills, CardKind::Action),
            ("monsters", &self.monsters, CardKind::Monster),
        ];
        for (pile, templates, kind) in piles {
            if let Some(bad) = templates.iter().find(|t| t.kind() != kind) {
                return Err(GameError::Config(format!(
                    "{} is a {:?} card but listed under {}",
                    bad.name,
                    bad.kind(),
                    pile
                )));
            }
        }
        Ok(())
    }

    /// Number of cards the catalog mints.
    #[must_use]
    pub fn card_count(&self) -> usize {
        [&self.heroes, &self.items, &self.skills, &self.monsters]
            .iter()
            .flat_map(|pile| pile.iter())
            .map(|t| t.count as usize)
            .sum()
    }

    /// Mint fresh cards with sequential ids starting at 1.
    #[must_use]
    pub fn mint(&self) -> CardSet {
        let mut next_id = 1u32;
        let mut mint_pile = |templates: &[CardTemplate]| {
            let mut cards = Vec::new();
            for template in templates {
                for _ in 0..template.count {
                    cards.push(Card {
                        id: CardId::new(next_id),
                        name: template.name.clone(),
                        body: template.body.clone(),
                    });
                    next_id += 1;
                }
            }
            cards
        };

        let heroes = mint_pile(self.heroes.as_slice());
        let items = mint_pile(self.items.as_slice());
        let skills = mint_pile(self.skills.as_slice());
        let monsters = mint_pile(self.monsters.as_slice());

        CardSet {
            heroes,
            items,
            skills,
            monsters,
        }
    }
}
