//! Notifications sent to the presentation layer.

use crate::cards::Card;
use crate::core::PlayerId;
use crate::rules::BattleReport;
use crate::stack::RoundResolution;

use super::listener::GameListener;

/// Something the presentation layer should know about.
///
/// Each variant matches one [`GameListener`] method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh game was dealt.
    GameStarted,

    /// A monster came into play, drawn or provoked.
    MonsterInvade { monster: Card },

    /// A player drew a non-monster card.
    DoneDrawFromDeck { player: PlayerId, card: Card },

    /// A hero card was put into play.
    SetHero { player: PlayerId, hero: Card },

    /// An item was attached to a player's hero.
    EquipHero { player: PlayerId, item: Card },

    /// An action card (Stop included) was played.
    ActionStart { player: PlayerId, card: Card },

    /// An action round closed.
    ActionDone(RoundResolution),

    /// A battle was fought.
    BattleDone(BattleReport),

    /// `player` handed the turn to `next`.
    TurnEnded { player: PlayerId, next: PlayerId },
}

impl GameEvent {
    /// Call the listener method matching this event.
    pub fn dispatch<L: GameListener + ?Sized>(&self, listener: &mut L) {
        match self {
            GameEvent::GameStarted => listener.on_game_started(),
            GameEvent::MonsterInvade { monster } => listener.on_monster_invade(monster),
            GameEvent::DoneDrawFromDeck { player, card } => {
                listener.on_done_draw_from_deck(*player, card);
            }
            GameEvent::SetHero { player, hero } => listener.on_set_hero(*player, hero),
            GameEvent::EquipHero { player, item } => listener.on_equip_hero(*player, item),
            GameEvent::ActionStart { player, card } => listener.on_action_start(*player, card),
            GameEvent::ActionDone(resolution) => listener.on_action_done(resolution),
            GameEvent::BattleDone(report) => listener.on_battle_done(report),
            GameEvent::TurnEnded { player, next } => listener.on_turn_ended(*player, *next),
        }
    }

    /// Short name, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::GameStarted => "GameStarted",
            GameEvent::MonsterInvade { .. } => "MonsterInvade",
            GameEvent::DoneDrawFromDeck { .. } => "DoneDrawFromDeck",
            GameEvent::SetHero { .. } => "SetHero",
            GameEvent::EquipHero { .. } => "EquipHero",
            GameEvent::ActionStart { .. } => "ActionStart",
            GameEvent::ActionDone(_) => "ActionDone",
            GameEvent::BattleDone(_) => "BattleDone",
            GameEvent::TurnEnded { .. } => "TurnEnded",
        }
    }
}
