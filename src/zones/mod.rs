//! Card locations.
//!
//! - `Deck`: the shared draw pile
//! - `Table`: everything on the board that effects operate on (deck, both
//!   players, the encounter slot, the available monsters, the discard pile)

mod deck;
mod table;

pub use deck::{Dealt, Deck};
pub use table::{Encounter, Player, Table};
