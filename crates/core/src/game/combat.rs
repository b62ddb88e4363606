//! Damage resolution and kill rewards shared by melee, throws and bombs.

use tracing::debug;

use super::*;
use crate::content::MELEE_RANGE;

impl Game {
    /// True when any tile of the enemy's footprint is within melee reach.
    pub(super) fn player_adjacent_to(&self, enemy_id: EntityId) -> bool {
        let Some(enemy) = self.floor.enemies.get(enemy_id) else {
            return false;
        };
        enemy.footprint().cells().any(|cell| self.player.pos.distance(cell) <= MELEE_RANGE)
    }

    pub(super) fn player_attack(&mut self, enemy_id: EntityId) {
        let damage = self.player.attack;
        self.log.push(LogEvent::PlayerAttacked { enemy: enemy_id, damage });
        self.damage_enemy(enemy_id, damage);
    }

    /// Applies damage and, on a kill, removes the enemy and pays out score,
    /// experience and boss credit. Returns true on a kill.
    pub(super) fn damage_enemy(&mut self, enemy_id: EntityId, damage: i32) -> bool {
        let Some(enemy) = self.floor.enemies.get_mut(enemy_id) else {
            return false;
        };
        enemy.hp -= damage;
        if enemy.hp > 0 {
            return false;
        }

        let Some(dead) = self.floor.enemies.remove(enemy_id) else {
            return false;
        };
        self.score += u64::from(dead.points);
        if dead.kind.is_boss() {
            self.bosses_defeated += 1;
        }
        self.log.push(LogEvent::EnemyKilled { kind: dead.kind, points: dead.points });
        debug!(kind = ?dead.kind, points = dead.points, score = self.score, "enemy killed");

        let levels = self.player.add_xp(dead.points);
        let reached = self.player.level;
        for level in (reached + 1 - levels)..=reached {
            self.log.push(LogEvent::LevelUp { level });
        }
        true
    }
}
