//! Action card effects.
//!
//! - `ActionEffect`: the two-phase contract (check when played, apply when
//!   the round resolves)
//! - `ActionRegistry`: kind to effect lookup, passed to the game explicitly
//! - the built-in effects for every action kind except Stop

mod builtin;
mod effect;
mod registry;

pub use builtin::{
    AtomicBombEffect, AttackEffect, ProvokeEffect, RadarEffect, RetreatEffect, StealEffect,
};
pub use effect::{ActionEffect, ActionOutcome};
pub use registry::ActionRegistry;
