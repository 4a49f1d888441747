//! Assembling a `Game`.

use super::engine::Game;
use crate::cards::CardCatalog;
use crate::core::{GameConfig, Result};
use crate::effects::ActionRegistry;
use crate::events::{EventBus, GameListener};
use crate::policy::OpponentPolicy;

/// Builder for a [`Game`].
///
/// Anything not set falls back to the built-in default: `GameConfig`
/// defaults, the standard catalog, the standard effects and no opponent
/// policy (the caller drives both seats).
///
/// ```
/// use monster_duel::game::GameBuilder;
/// use monster_duel::policy::SimpleOpponent;
///
/// let mut game = GameBuilder::new()
///     .seed(7)
///     .policy(SimpleOpponent)
///     .build()
///     .unwrap();
/// game.new_game().unwrap();
/// assert_eq!(game.player(monster_duel::core::PlayerId::HUMAN).hand().len(), 5);
/// ```
#[derive(Default)]
pub struct GameBuilder {
    config: GameConfig,
    catalog: Option<CardCatalog>,
    registry: Option<ActionRegistry>,
    policy: Option<Box<dyn OpponentPolicy>>,
    bus: EventBus,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[must_use]
    pub fn catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use a custom effect set instead of `ActionRegistry::standard`.
    #[must_use]
    pub fn registry(mut self, registry: ActionRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// The policy playing the NPC seat.
    #[must_use]
    pub fn policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    #[must_use]
    pub fn listener(mut self, listener: impl GameListener + 'static) -> Self {
        self.bus.subscribe(listener);
        self
    }

    /// Validate the catalog and assemble the game. No cards are dealt until
    /// `new_game`.
    pub fn build(self) -> Result<Game> {
        let catalog = self.catalog.unwrap_or_else(CardCatalog::standard);
        catalog.validate()?;
        let registry = self
            .registry
            .unwrap_or_else(|| ActionRegistry::standard(self.config.radar_depth));

        Ok(Game::from_parts(
            self.config,
            catalog,
            registry,
            self.bus,
            self.policy,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardBody, CardTemplate};
    use crate::core::GameError;
    use crate::game::GameStatus;

    #[test]
    fn test_defaults() {
        let game = GameBuilder::new().build().unwrap();
        assert_eq!(game.config(), &GameConfig::default());
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.stage(), None);
    }

    #[test]
    fn test_rejects_misfiled_catalog() {
        let mut catalog = CardCatalog::standard();
        catalog
            .heroes
            .push(CardTemplate::new("Sword", CardBody::Item { point: 2 }, 1));

        let err = GameBuilder::new().catalog(catalog).build().unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_catalog_too_small_for_hands() {
        let catalog = CardCatalog {
            items: vec![CardTemplate::new("Sword", CardBody::Item { point: 2 }, 3)],
            ..CardCatalog::default()
        };
        let mut game = GameBuilder::new().catalog(catalog).build().unwrap();

        assert!(matches!(game.new_game(), Err(GameError::Config(_))));
        assert_eq!(game.status(), GameStatus::NotStarted);
    }
}
