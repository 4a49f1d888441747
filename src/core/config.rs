//! Game configuration.
//!
//! `GameConfig` carries the tunables of a session. Everything has a default
//! matching the original table game, and the whole struct round-trips
//! through JSON so a frontend can ship its own settings file.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Session tunables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for all deck shuffles.
    pub seed: u64,

    /// Cards dealt to each player by `new_game`.
    pub starting_hand_size: usize,

    /// Item slots on a hero.
    pub max_hero_items: usize,

    /// Cards revealed by Radar.
    pub radar_depth: usize,

    /// Upper bound on opponent moves chained from a single command.
    pub max_policy_moves: usize,

    /// Pull a Steal card from the deck into the opponent's opening hand
    /// when it was not dealt one.
    pub npc_starts_with_steal: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            starting_hand_size: 5,
            max_hero_items: 3,
            radar_depth: 3,
            max_policy_moves: 64,
            npc_starts_with_steal: true,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use monster_duel::core::GameConfig;
    ///
    /// let config = GameConfig::from_json(r#"{ "seed": 9, "radar_depth": 2 }"#).unwrap();
    /// assert_eq!(config.seed, 9);
    /// assert_eq!(config.radar_depth, 2);
    /// assert_eq!(config.starting_hand_size, 5);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))
    }

    /// Set the seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
