//! Action resolution.
//!
//! Action cards do not take effect when played. They open an
//! [`ActionRound`] that the other player can answer with Stop cards; the
//! round resolves once every player has ended their response. See
//! `round.rs` for the parity and barrier rules.

mod round;

pub use round::{ActionResult, ActionRound, PlayedAction, RoundResolution};
