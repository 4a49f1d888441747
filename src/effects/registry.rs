//! Lookup from action kind to effect.
//!
//! The registry is an ordinary value built before the game and handed to
//! it; different games (or tests) can run with different effect sets.

use rustc_hash::FxHashMap;

use super::builtin::{
    AtomicBombEffect, AttackEffect, ProvokeEffect, RadarEffect, RetreatEffect, StealEffect,
};
use super::effect::ActionEffect;
use crate::cards::ActionKind;
use crate::core::{GameError, Result};

/// Effects keyed by the action kind they implement.
///
/// Stop never has an entry: cancellation belongs to the action round.
///
/// ```
/// use monster_duel::cards::ActionKind;
/// use monster_duel::effects::ActionRegistry;
///
/// let registry = ActionRegistry::standard(3);
/// assert!(registry.contains(ActionKind::Steal));
/// assert!(!registry.contains(ActionKind::Stop));
/// ```
#[derive(Default)]
pub struct ActionRegistry {
    effects: FxHashMap<ActionKind, Box<dyn ActionEffect>>,
}

impl ActionRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in effect. Radar reveals `radar_depth` cards.
    #[must_use]
    pub fn standard(radar_depth: usize) -> Self {
        Self::new()
            .with(AtomicBombEffect)
            .with(ProvokeEffect)
            .with(RadarEffect { depth: radar_depth })
            .with(StealEffect)
            .with(RetreatEffect)
            .with(AttackEffect)
    }

    /// Register an effect under its own kind, replacing any previous one.
    pub fn register(&mut self, effect: impl ActionEffect + 'static) -> Option<Box<dyn ActionEffect>> {
        self.effects.insert(effect.kind(), Box::new(effect))
    }

    /// Register an effect (builder pattern).
    #[must_use]
    pub fn with(mut self, effect: impl ActionEffect + 'static) -> Self {
        self.register(effect);
        self
    }

    /// The effect for `kind`.
    pub fn get(&self, kind: ActionKind) -> Result<&dyn ActionEffect> {
        self.effects
            .get(&kind)
            .map(Box::as_ref)
            .ok_or(GameError::UnknownAction(kind))
    }

    #[must_use]
    pub fn contains(&self, kind: ActionKind) -> bool {
        self.effects.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.effects.keys().collect();
        kinds.sort_by_key(|k| ActionKind::ALL.iter().position(|a| a == *k));
        f.debug_struct("ActionRegistry").field("kinds", &kinds).finish()
    }
}
