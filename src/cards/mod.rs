//! Card model: cards, heroes in play, and the catalog games are dealt from.
//!
//! ## Key Types
//!
//! - `CardId`: identifier of a card within one game
//! - `Card`: id, display name and a kind-specific `CardBody`
//! - `EquippedHero`: a hero card in play with its items
//! - `CardCatalog`: card templates, minted into a `CardSet` by `new_game`

pub mod card;
pub mod catalog;
pub mod hero;

pub use card::{ActionKind, Card, CardBody, CardId, CardKind, HeroType};
pub use catalog::{CardCatalog, CardSet, CardTemplate};
pub use hero::EquippedHero;
