//! Listener trait, fan-out bus and a recording listener.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use super::event::GameEvent;
use crate::cards::Card;
use crate::core::PlayerId;
use crate::rules::BattleReport;
use crate::stack::RoundResolution;

/// Receiver of game notifications.
///
/// Every method defaults to doing nothing, so a listener only implements
/// what it cares about. `on_event` sees every event before it is split
/// into the specific methods; override it to handle events generically.
pub trait GameListener {
    fn on_event(&mut self, event: &GameEvent) {
        event.dispatch(self);
    }

    fn on_game_started(&mut self) {}

    fn on_monster_invade(&mut self, _monster: &Card) {}

    fn on_done_draw_from_deck(&mut self, _player: PlayerId, _card: &Card) {}

    fn on_set_hero(&mut self, _player: PlayerId, _hero: &Card) {}

    fn on_equip_hero(&mut self, _player: PlayerId, _item: &Card) {}

    fn on_action_start(&mut self, _player: PlayerId, _card: &Card) {}

    fn on_action_done(&mut self, _resolution: &RoundResolution) {}

    fn on_battle_done(&mut self, _report: &BattleReport) {}

    fn on_turn_ended(&mut self, _player: PlayerId, _next: PlayerId) {}
}

/// Shared listeners: the game holds one handle, the caller keeps another
/// to read what was received.
impl<T: GameListener> GameListener for Rc<RefCell<T>> {
    fn on_event(&mut self, event: &GameEvent) {
        self.borrow_mut().on_event(event);
    }
}

/// Synchronous fan-out in registration order.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Box<dyn GameListener>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl GameListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn publish(&mut self, event: &GameEvent) {
        trace!(event = event.name(), listeners = self.listeners.len(), "publish");
        for listener in &mut self.listeners {
            listener.on_event(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Records every event it receives.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use monster_duel::events::{EventBus, EventLog, GameEvent};
///
/// let log = Rc::new(RefCell::new(EventLog::new()));
/// let mut bus = EventBus::new();
/// bus.subscribe(Rc::clone(&log));
/// bus.publish(&GameEvent::GameStarted);
///
/// assert_eq!(log.borrow().events(), &[GameEvent::GameStarted]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Event names in order received.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.events.iter().map(GameEvent::name).collect()
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameListener for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
