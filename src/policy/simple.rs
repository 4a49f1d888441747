//! Rule-based reference opponent.

use super::view::GameView;
use super::{OpponentPolicy, Reaction};
use crate::cards::{ActionKind, Card, CardKind};
use crate::core::{ActionArg, Command};

/// Plays the obvious move in a fixed order of preference:
///
/// 1. fight (or bomb) the active monster
/// 2. draw
/// 3. put the strongest hero into play, then equip the strongest items
/// 4. steal, provoke a monster it can beat, attack a weaker hero
/// 5. end the turn
///
/// It stops an opponent's action when that action would hurt it, and
/// answers a Stop on its own action with another Stop when it can.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleOpponent;

fn strongest(hand: &[Card], kind: CardKind) -> Option<&Card> {
    hand.iter()
        .filter(|c| c.kind() == kind)
        .max_by_key(|c| (c.point(), std::cmp::Reverse(c.id)))
}

fn action_card(hand: &[Card], action: ActionKind) -> Option<&Card> {
    hand.iter().find(|c| c.action_kind() == Some(action))
}

impl SimpleOpponent {
    /// Hero set-up: a hero first, then items while there is room.
    fn build_hero(view: &GameView<'_>) -> Option<Command> {
        let me = view.my_player();
        match me.hero() {
            None => strongest(me.hand(), CardKind::Hero).map(|c| Command::SetHero(c.id)),
            Some(hero) if hero.items().len() < view.max_hero_items() => {
                strongest(me.hand(), CardKind::Item).map(|c| Command::EquipHero(c.id))
            }
            Some(_) => None,
        }
    }

    fn confront(view: &GameView<'_>, monster: &Card) -> Command {
        let me = view.my_player();
        let mine = me.hero_point();
        let theirs = view.opponent().hero_point();
        // Ties go to the active player, which is us.
        let best = match (mine, theirs) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        if best.map_or(true, |point| monster.point() > point) {
            let may_build = me.has_drawn() || view.deck_size() == 0;
            if let Some(command) = may_build.then(|| Self::build_hero(view)).flatten() {
                return command;
            }
            if let Some(bomb) = action_card(me.hand(), ActionKind::AtomicBomb) {
                return Command::play(bomb.id);
            }
        }
        Command::Battle
    }

    fn pick_action(view: &GameView<'_>) -> Option<Command> {
        let me = view.my_player();
        let opponent = view.opponent();
        let my_point = me.hero_point();

        if let Some(steal) = action_card(me.hand(), ActionKind::Steal) {
            if !opponent.hand().is_empty() {
                return Some(Command::play_with(steal.id, &[ActionArg::Index(0)]));
            }
        }

        if let (Some(provoke), Some(point)) = (action_card(me.hand(), ActionKind::Provoke), my_point) {
            let target = view
                .available_monsters()
                .iter()
                .filter(|m| m.point() <= point)
                .max_by_key(|m| m.point());
            if let Some(target) = target {
                return Some(Command::play_with(provoke.id, &[ActionArg::Card(target.id)]));
            }
        }

        if let (Some(attack), Some(mine), Some(theirs)) = (
            action_card(me.hand(), ActionKind::Attack),
            my_point,
            opponent.hero_point(),
        ) {
            if mine > theirs {
                return Some(Command::play(attack.id));
            }
        }

        None
    }

    /// Whether `played` going through would hurt this seat.
    fn is_harmful(view: &GameView<'_>, played: &Card) -> bool {
        match played.action_kind() {
            Some(ActionKind::Steal) => !view.my_player().hand().is_empty(),
            Some(ActionKind::AtomicBomb) => view.my_player().hero().is_some() || view.monster().is_some(),
            Some(ActionKind::Attack) => match (view.my_player().hero_point(), view.opponent().hero_point()) {
                (Some(mine), Some(theirs)) => mine <= theirs,
                _ => false,
            },
            Some(ActionKind::Provoke) => view.my_player().hero().is_none(),
            _ => false,
        }
    }
}

impl OpponentPolicy for SimpleOpponent {
    fn take_round(&mut self, view: &GameView<'_>) -> Option<Command> {
        if !view.is_my_turn() || view.round().is_open() {
            return None;
        }
        if let Some(monster) = view.monster() {
            return Some(Self::confront(view, monster));
        }

        let me = view.my_player();
        if !me.has_drawn() && view.deck_size() > 0 {
            return Some(Command::Draw);
        }

        Self::build_hero(view)
            .or_else(|| Self::pick_action(view))
            .or(Some(Command::EndTurn))
    }

    fn react_to_action(&mut self, view: &GameView<'_>, played: &Card, _args: &[ActionArg]) -> Reaction {
        let Some(pending) = view.pending_action() else {
            return Reaction::Pass;
        };
        let wants_it = pending.player == view.me() || !Self::is_harmful(view, played);
        let goes_through = !view.round().is_cancelled();
        if wants_it == goes_through {
            return Reaction::Pass;
        }
        match action_card(view.my_player().hand(), ActionKind::Stop) {
            Some(stop) => Reaction::Stop(stop.id),
            None => Reaction::Pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, EquippedHero, HeroType};
    use crate::core::{ActionArgs, PlayerId};
    use crate::stack::{ActionRound, PlayedAction};
    use crate::zones::{Encounter, Table};

    fn npc_turn() -> Table {
        let mut table = Table::new();
        table.set_active(PlayerId::NPC);
        table
    }

    fn give(table: &mut Table, player: PlayerId, card: Card) {
        table.player_mut(player).add_to_hand(card);
    }

    fn ask(table: &Table, round: &ActionRound) -> Option<Command> {
        SimpleOpponent.take_round(&GameView::new(table, round, PlayerId::NPC, 3))
    }

    #[test]
    fn test_draws_first() {
        let mut table = npc_turn();
        let mut rng = crate::core::GameRng::new(1);
        table
            .deck
            .shuffle_and_load(vec![Card::item(CardId::new(1), "Sword", 2)], &mut rng);

        assert_eq!(ask(&table, &ActionRound::new()), Some(Command::Draw));
    }

    #[test]
    fn test_sets_strongest_hero_then_equips() {
        let mut table = npc_turn();
        table.player_mut(PlayerId::NPC).has_drawn = true;
        give(&mut table, PlayerId::NPC, Card::hero(CardId::new(1), "Squire", HeroType::Knight, 1));
        give(&mut table, PlayerId::NPC, Card::hero(CardId::new(2), "Hunter", HeroType::Ranger, 3));
        give(&mut table, PlayerId::NPC, Card::item(CardId::new(3), "Bow", 3));

        let round = ActionRound::new();
        assert_eq!(ask(&table, &round), Some(Command::SetHero(CardId::new(2))));

        let hero = table.player_mut(PlayerId::NPC).take_from_hand(CardId::new(2)).unwrap();
        table.player_mut(PlayerId::NPC).hero = Some(EquippedHero::new(hero).unwrap());
        assert_eq!(ask(&table, &round), Some(Command::EquipHero(CardId::new(3))));
    }

    #[test]
    fn test_battles_monster_it_can_beat() {
        let mut table = npc_turn();
        let hero = Card::hero(CardId::new(1), "Hunter", HeroType::Ranger, 5);
        table.player_mut(PlayerId::NPC).hero = Some(EquippedHero::new(hero).unwrap());
        table.encounter = Some(Encounter {
            monster: Card::monster(CardId::new(9), "Orc", 4),
            provoked: false,
        });

        assert_eq!(ask(&table, &ActionRound::new()), Some(Command::Battle));
    }

    #[test]
    fn test_bombs_monster_it_cannot_beat() {
        let mut table = npc_turn();
        table.player_mut(PlayerId::NPC).has_drawn = true;
        give(&mut table, PlayerId::NPC, Card::action(CardId::new(5), "Atomic Bomb", ActionKind::AtomicBomb));
        table.encounter = Some(Encounter {
            monster: Card::monster(CardId::new(9), "Hydra", 10),
            provoked: false,
        });

        assert_eq!(ask(&table, &ActionRound::new()), Some(Command::play(CardId::new(5))));
    }

    #[test]
    fn test_ends_turn_with_nothing_to_do() {
        let mut table = npc_turn();
        table.player_mut(PlayerId::NPC).has_drawn = true;
        assert_eq!(ask(&table, &ActionRound::new()), Some(Command::EndTurn));
    }

    #[test]
    fn test_silent_outside_own_turn() {
        let mut table = Table::new();
        table.set_active(PlayerId::HUMAN);
        assert_eq!(ask(&table, &ActionRound::new()), None);
    }

    #[test]
    fn test_stops_a_steal() {
        let mut table = npc_turn();
        give(&mut table, PlayerId::NPC, Card::action(CardId::new(4), "Stop", ActionKind::Stop));
        let steal = Card::action(CardId::new(7), "Steal", ActionKind::Steal);
        let mut round = ActionRound::new();
        round
            .push(
                &mut table,
                PlayedAction::new(PlayerId::HUMAN, steal.clone(), ActionArgs::new()),
            )
            .unwrap();

        let view = GameView::new(&table, &round, PlayerId::NPC, 3);
        assert_eq!(
            SimpleOpponent.react_to_action(&view, &steal, &[]),
            Reaction::Stop(CardId::new(4))
        );
    }

    #[test]
    fn test_passes_on_harmless_action() {
        let mut table = npc_turn();
        give(&mut table, PlayerId::NPC, Card::action(CardId::new(4), "Stop", ActionKind::Stop));
        let radar = Card::action(CardId::new(7), "Radar", ActionKind::Radar);
        let mut round = ActionRound::new();
        round
            .push(
                &mut table,
                PlayedAction::new(PlayerId::HUMAN, radar.clone(), ActionArgs::new()),
            )
            .unwrap();

        let view = GameView::new(&table, &round, PlayerId::NPC, 3);
        assert_eq!(SimpleOpponent.react_to_action(&view, &radar, &[]), Reaction::Pass);
    }
}
