//! The built-in action effects.

use tracing::debug;

use super::effect::{card_arg, index_arg, ActionEffect, ActionOutcome};
use crate::cards::{ActionKind, CardKind};
use crate::core::{ActionArg, GameError, PlayerId, Result};
use crate::zones::{Encounter, Table};

/// Kill the active monster for the actor and send every hero to discard.
#[derive(Clone, Copy, Debug, Default)]
pub struct AtomicBombEffect;

impl ActionEffect for AtomicBombEffect {
    fn kind(&self) -> ActionKind {
        ActionKind::AtomicBomb
    }

    fn check(&self, _table: &Table, _actor: PlayerId, _args: &[ActionArg]) -> Result<()> {
        Ok(())
    }

    fn apply(&self, table: &mut Table, actor: PlayerId, _args: &[ActionArg]) -> Result<ActionOutcome> {
        let monster_killed = match table.encounter.take() {
            Some(encounter) => {
                debug!(%actor, monster = %encounter.monster, "bomb kills monster");
                table.record_kill(actor, encounter.monster);
                true
            }
            None => false,
        };
        table.clear_all_heroes();
        Ok(ActionOutcome::Bombed { monster_killed })
    }
}

/// Pull a beaten-back monster from the available pool into the encounter.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProvokeEffect;

impl ProvokeEffect {
    fn target_position(table: &Table, args: &[ActionArg]) -> Result<usize> {
        if let Some(current) = table.monster() {
            return Err(GameError::target(format!("{} is already in play", current)));
        }
        let id = card_arg(args)?;
        let position = table
            .available_monsters
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| GameError::target(format!("{} is not an available monster", id)))?;
        if table.available_monsters[position].kind() != CardKind::Monster {
            return Err(GameError::target(format!("{} is not a monster", id)));
        }
        Ok(position)
    }
}

impl ActionEffect for ProvokeEffect {
    fn kind(&self) -> ActionKind {
        ActionKind::Provoke
    }

    fn check(&self, table: &Table, _actor: PlayerId, args: &[ActionArg]) -> Result<()> {
        Self::target_position(table, args).map(|_| ())
    }

    fn apply(&self, table: &mut Table, _actor: PlayerId, args: &[ActionArg]) -> Result<ActionOutcome> {
        let position = Self::target_position(table, args)?;
        let monster = table.available_monsters.remove(position);
        table.encounter = Some(Encounter {
            monster: monster.clone(),
            provoked: true,
        });
        Ok(ActionOutcome::Provoked(monster))
    }
}

/// Reveal the top of the deck.
#[derive(Clone, Copy, Debug)]
pub struct RadarEffect {
    pub depth: usize,
}

impl Default for RadarEffect {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

impl ActionEffect for RadarEffect {
    fn kind(&self) -> ActionKind {
        ActionKind::Radar
    }

    fn check(&self, _table: &Table, _actor: PlayerId, _args: &[ActionArg]) -> Result<()> {
        Ok(())
    }

    fn apply(&self, table: &mut Table, _actor: PlayerId, _args: &[ActionArg]) -> Result<ActionOutcome> {
        let cards = table.deck.peek_next(self.depth).into_iter().cloned().collect();
        Ok(ActionOutcome::Revealed(cards))
    }
}

/// Take the card at an index of the opponent's hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct StealEffect;

impl StealEffect {
    fn target(table: &Table, actor: PlayerId, args: &[ActionArg]) -> Result<(PlayerId, usize)> {
        let index = index_arg(args)?;
        let victim = table.player(actor).next_player();
        let hand_size = table.player(victim).hand().len();
        if index >= hand_size {
            return Err(GameError::target(format!(
                "index {} out of range for a hand of {}",
                index, hand_size
            )));
        }
        Ok((victim, index))
    }
}

impl ActionEffect for StealEffect {
    fn kind(&self) -> ActionKind {
        ActionKind::Steal
    }

    fn check(&self, table: &Table, actor: PlayerId, args: &[ActionArg]) -> Result<()> {
        Self::target(table, actor, args).map(|_| ())
    }

    fn apply(&self, table: &mut Table, actor: PlayerId, args: &[ActionArg]) -> Result<ActionOutcome> {
        let (victim, index) = Self::target(table, actor, args)?;
        let card = table.player_mut(victim).hand.remove(index);
        table.player_mut(actor).add_to_hand(card.clone());
        Ok(ActionOutcome::Stolen(card))
    }
}

/// Take the actor's hero and items back into hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct RetreatEffect;

impl ActionEffect for RetreatEffect {
    fn kind(&self) -> ActionKind {
        ActionKind::Retreat
    }

    fn check(&self, _table: &Table, _actor: PlayerId, _args: &[ActionArg]) -> Result<()> {
        Ok(())
    }

    fn apply(&self, table: &mut Table, actor: PlayerId, _args: &[ActionArg]) -> Result<ActionOutcome> {
        let player = table.player_mut(actor);
        match player.take_hero() {
            Some(hero) => {
                player.hand.extend(hero.into_cards());
                Ok(ActionOutcome::Retreated)
            }
            None => Ok(ActionOutcome::Nothing),
        }
    }
}

/// The two heroes fight; the weaker leaves play, both on a tie.
#[derive(Clone, Copy, Debug, Default)]
pub struct AttackEffect;

impl ActionEffect for AttackEffect {
    fn kind(&self) -> ActionKind {
        ActionKind::Attack
    }

    fn check(&self, _table: &Table, _actor: PlayerId, _args: &[ActionArg]) -> Result<()> {
        Ok(())
    }

    fn apply(&self, table: &mut Table, actor: PlayerId, _args: &[ActionArg]) -> Result<ActionOutcome> {
        let defender = table.player(actor).next_player();
        let (Some(own), Some(other)) = (
            table.player(actor).hero_point(),
            table.player(defender).hero_point(),
        ) else {
            return Ok(ActionOutcome::Attacked(Vec::new()));
        };

        let removed = match own.cmp(&other) {
            std::cmp::Ordering::Equal => vec![actor, defender],
            std::cmp::Ordering::Less => vec![actor],
            std::cmp::Ordering::Greater => vec![defender],
        };
        for &id in &removed {
            table.clear_hero(id);
        }
        Ok(ActionOutcome::Attacked(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, EquippedHero, HeroType};

    fn hero_with(id: u32, point: i32, items: &[(u32, i32)]) -> EquippedHero {
        let mut hero = EquippedHero::new(Card::hero(CardId::new(id), "Hero", HeroType::Knight, point)).unwrap();
        for &(item_id, item_point) in items {
            hero.equip(Card::item(CardId::new(item_id), "Item", item_point), 3).unwrap();
        }
        hero
    }

    fn table_with_heroes(human: i32, npc: i32) -> Table {
        let mut table = Table::new();
        table.player_mut(PlayerId::HUMAN).hero = Some(hero_with(1, human, &[]));
        table.player_mut(PlayerId::NPC).hero = Some(hero_with(2, npc, &[]));
        table
    }

    #[test]
    fn test_bomb_kills_monster_and_clears_heroes() {
        let mut table = table_with_heroes(3, 4);
        table.encounter = Some(Encounter {
            monster: Card::monster(CardId::new(9), "Troll", 5),
            provoked: false,
        });

        let outcome = AtomicBombEffect.apply(&mut table, PlayerId::NPC, &[]).unwrap();

        assert_eq!(outcome, ActionOutcome::Bombed { monster_killed: true });
        assert!(table.encounter.is_none());
        assert_eq!(table.player(PlayerId::NPC).kill_count(), 1);
        assert!(table.player(PlayerId::HUMAN).hero().is_none());
        assert!(table.player(PlayerId::NPC).hero().is_none());
        assert_eq!(table.discard.len(), 2);
    }

    #[test]
    fn test_bomb_without_monster() {
        let mut table = table_with_heroes(3, 4);
        let outcome = AtomicBombEffect.apply(&mut table, PlayerId::HUMAN, &[]).unwrap();
        assert_eq!(outcome, ActionOutcome::Bombed { monster_killed: false });
        assert_eq!(table.player(PlayerId::HUMAN).kill_count(), 0);
    }

    #[test]
    fn test_provoke_moves_monster_into_play() {
        let mut table = Table::new();
        table.available_monsters.push(Card::monster(CardId::new(7), "Ogre", 6));
        let args = [ActionArg::Card(CardId::new(7))];

        assert!(ProvokeEffect.check(&table, PlayerId::HUMAN, &args).is_ok());
        let outcome = ProvokeEffect.apply(&mut table, PlayerId::HUMAN, &args).unwrap();

        assert!(matches!(outcome, ActionOutcome::Provoked(ref c) if c.id == CardId::new(7)));
        assert!(table.available_monsters.is_empty());
        assert!(table.encounter.as_ref().is_some_and(|e| e.provoked));
    }

    #[test]
    fn test_provoke_rejects_bad_targets() {
        let mut table = Table::new();
        table.available_monsters.push(Card::monster(CardId::new(7), "Ogre", 6));

        for args in [
            vec![],
            vec![ActionArg::Index(0)],
            vec![ActionArg::Card(CardId::new(8))],
        ] {
            assert!(matches!(
                ProvokeEffect.check(&table, PlayerId::HUMAN, &args),
                Err(GameError::InvalidTarget(_))
            ));
        }

        table.encounter = Some(Encounter {
            monster: Card::monster(CardId::new(9), "Slime", 2),
            provoked: false,
        });
        let args = [ActionArg::Card(CardId::new(7))];
        assert!(matches!(
            ProvokeEffect.apply(&mut table, PlayerId::HUMAN, &args),
            Err(GameError::InvalidTarget(_))
        ));
        assert_eq!(table.available_monsters.len(), 1);
    }

    #[test]
    fn test_radar_reveals_without_mutation() {
        let mut table = Table::new();
        let mut rng = crate::core::GameRng::new(5);
        table.deck.shuffle_and_load(
            (1..=5).map(|i| Card::item(CardId::new(i), "Item", 1)).collect(),
            &mut rng,
        );
        let expected: Vec<CardId> = table.deck.peek_next(3).into_iter().map(|c| c.id).collect();

        let outcome = RadarEffect::default().apply(&mut table, PlayerId::HUMAN, &[]).unwrap();

        match outcome {
            ActionOutcome::Revealed(cards) => {
                assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), expected);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(table.deck.len(), 5);
    }

    #[test]
    fn test_steal_takes_indexed_card() {
        let mut table = Table::new();
        table.player_mut(PlayerId::NPC).add_to_hand(Card::item(CardId::new(1), "Sword", 2));
        table.player_mut(PlayerId::NPC).add_to_hand(Card::item(CardId::new(2), "Bow", 3));

        let outcome = StealEffect
            .apply(&mut table, PlayerId::HUMAN, &[ActionArg::Index(1)])
            .unwrap();

        assert!(matches!(outcome, ActionOutcome::Stolen(ref c) if c.id == CardId::new(2)));
        assert_eq!(table.player(PlayerId::NPC).hand().len(), 1);
        assert_eq!(table.player(PlayerId::HUMAN).hand()[0].id, CardId::new(2));
    }

    #[test]
    fn test_steal_out_of_range_leaves_hands() {
        let mut table = Table::new();
        table.player_mut(PlayerId::NPC).add_to_hand(Card::item(CardId::new(1), "Sword", 2));

        let err = StealEffect
            .apply(&mut table, PlayerId::HUMAN, &[ActionArg::Index(1)])
            .unwrap_err();

        assert!(matches!(err, GameError::InvalidTarget(_)));
        assert_eq!(table.player(PlayerId::NPC).hand().len(), 1);
        assert!(table.player(PlayerId::HUMAN).hand().is_empty());
    }

    #[test]
    fn test_retreat_returns_items_then_hero() {
        let mut table = Table::new();
        table.player_mut(PlayerId::HUMAN).hero = Some(hero_with(1, 2, &[(2, 1), (3, 2)]));

        let outcome = RetreatEffect.apply(&mut table, PlayerId::HUMAN, &[]).unwrap();

        assert_eq!(outcome, ActionOutcome::Retreated);
        let ids: Vec<u32> = table.player(PlayerId::HUMAN).hand().iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(table.player(PlayerId::HUMAN).hero().is_none());

        let again = RetreatEffect.apply(&mut table, PlayerId::HUMAN, &[]).unwrap();
        assert_eq!(again, ActionOutcome::Nothing);
    }

    #[test]
    fn test_retreat_then_rebuild_restores_points() {
        let mut table = Table::new();
        let hero = hero_with(1, 2, &[(2, 1), (3, 2)]);
        let before = hero.total_point();
        table.player_mut(PlayerId::HUMAN).hero = Some(hero);

        RetreatEffect.apply(&mut table, PlayerId::HUMAN, &[]).unwrap();

        let player = table.player_mut(PlayerId::HUMAN);
        let card = player.take_from_hand(CardId::new(1)).unwrap();
        let mut rebuilt = EquippedHero::new(card).unwrap();
        for id in [2, 3] {
            rebuilt.equip(player.take_from_hand(CardId::new(id)).unwrap(), 3).unwrap();
        }
        assert_eq!(rebuilt.total_point(), before);
        assert!(player.hand().is_empty());
    }

    #[test]
    fn test_attack_tie_clears_both() {
        let mut table = table_with_heroes(7, 7);
        let outcome = AttackEffect.apply(&mut table, PlayerId::HUMAN, &[]).unwrap();

        assert_eq!(outcome, ActionOutcome::Attacked(vec![PlayerId::HUMAN, PlayerId::NPC]));
        assert!(table.player(PlayerId::HUMAN).hero().is_none());
        assert!(table.player(PlayerId::NPC).hero().is_none());
    }

    #[test]
    fn test_attack_clears_only_weaker() {
        let mut table = table_with_heroes(9, 5);
        let outcome = AttackEffect.apply(&mut table, PlayerId::NPC, &[]).unwrap();

        assert_eq!(outcome, ActionOutcome::Attacked(vec![PlayerId::NPC]));
        assert!(table.player(PlayerId::HUMAN).hero().is_some());
        assert!(table.player(PlayerId::NPC).hero().is_none());
    }

    #[test]
    fn test_attack_needs_two_heroes() {
        let mut table = Table::new();
        table.player_mut(PlayerId::HUMAN).hero = Some(hero_with(1, 4, &[]));

        let outcome = AttackEffect.apply(&mut table, PlayerId::HUMAN, &[]).unwrap();

        assert_eq!(outcome, ActionOutcome::Attacked(Vec::new()));
        assert!(table.player(PlayerId::HUMAN).hero().is_some());
    }
}
