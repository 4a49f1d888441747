//! Monster confrontation.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::Card;
use crate::core::{GameError, PlayerId, Result};
use crate::zones::Table;

/// Who came out on top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleWinner {
    Player(PlayerId),
    Monster(Card),
}

/// Result of one battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub player_won: bool,
    pub winner: BattleWinner,
    /// The player whose turn it was.
    pub active: PlayerId,
    /// The monster that was fought.
    pub monster: Card,
}

/// The player fighting for the table: highest hero total, ties to the
/// active player. `None` when nobody has a hero.
#[must_use]
pub fn champion(table: &Table, active: PlayerId) -> Option<(PlayerId, i32)> {
    let order = std::iter::once(active).chain(PlayerId::all().filter(move |&id| id != active));
    let mut best: Option<(PlayerId, i32)> = None;
    for id in order {
        if let Some(point) = table.player(id).hero_point() {
            if best.map_or(true, |(_, top)| point > top) {
                best = Some((id, point));
            }
        }
    }
    best
}

/// Fight the active monster.
///
/// The monster wins when no player has a hero or its point is strictly
/// greater than the champion's total: it goes back to the available pool
/// and every hero leaves play. Otherwise the champion keeps their hero and
/// takes the monster as a kill. The encounter slot is empty afterwards.
pub fn resolve_battle(table: &mut Table, active: PlayerId) -> Result<BattleReport> {
    let monster_point = table.monster().ok_or(GameError::NoActiveMonster)?.point();
    let champion = champion(table, active);
    let encounter = table.encounter.take().ok_or(GameError::NoActiveMonster)?;
    let monster = encounter.monster;

    let report = match champion {
        Some((winner, point)) if point >= monster_point => {
            info!(%winner, point, monster = %monster, "monster defeated");
            table.record_kill(winner, monster.clone());
            BattleReport {
                player_won: true,
                winner: BattleWinner::Player(winner),
                active,
                monster,
            }
        }
        _ => {
            info!(monster = %monster, "heroes defeated");
            table.available_monsters.push(monster.clone());
            table.clear_all_heroes();
            BattleReport {
                player_won: false,
                winner: BattleWinner::Monster(monster.clone()),
                active,
                monster,
            }
        }
    };
    Ok(report)
}
