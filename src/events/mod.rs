//! Typed notifications to the presentation layer.
//!
//! The engine publishes a [`GameEvent`] for everything a frontend would
//! animate. Listeners are called synchronously, in registration order,
//! before the command that caused the event returns.

mod event;
mod listener;

pub use event::GameEvent;
pub use listener::{EventBus, EventLog, GameListener};
