//! End of game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::zones::Table;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Most monsters killed.
    Winner(PlayerId),
    /// Equal kill counts.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Score a table by kill count.
    #[must_use]
    pub fn score(table: &Table) -> Self {
        let human = table.player(PlayerId::HUMAN).kill_count();
        let npc = table.player(PlayerId::NPC).kill_count();
        match human.cmp(&npc) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::HUMAN),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::NPC),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }
}

/// Whether the game has run its course: nothing left to draw, no monster
/// to fight. The caller also has to know no action round is open.
#[must_use]
pub fn is_exhausted(table: &Table) -> bool {
    table.deck.is_empty() && table.encounter.is_none()
}
