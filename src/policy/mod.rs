//! The scripted opponent.
//!
//! The engine asks an [`OpponentPolicy`] for a move whenever the NPC seat
//! has one to make: during its own turn (`take_round`) and whenever an
//! action round is waiting for its answer (`react_to_action`). The returned
//! moves go through the same validation as human commands.
//!
//! [`SimpleOpponent`] is a small rule-based policy, enough to play full
//! games headless.

mod simple;
mod view;

pub use simple::SimpleOpponent;
pub use view::GameView;

use crate::cards::{Card, CardId};
use crate::core::{ActionArg, Command};

/// Answer to an open action round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction {
    /// Play this Stop card.
    Stop(CardId),
    /// End the response (`end_action`).
    Pass,
}

/// Move selection for a policy-controlled seat.
pub trait OpponentPolicy {
    /// Next move of the seat's own turn. Asked while the seat is active
    /// and no round is open. `None` means nothing more to do right now.
    fn take_round(&mut self, view: &GameView<'_>) -> Option<Command>;

    /// Answer to the pending round opened with `played`.
    fn react_to_action(&mut self, view: &GameView<'_>, played: &Card, args: &[ActionArg]) -> Reaction;
}
