//! Per-tick handlers for the non-interactive turn states plus the game-over
//! and restart transitions.

use tracing::{debug, warn};

use super::ai::TurnContext;
use super::*;
use crate::state::{Footprint, Projectile};

impl Game {
    pub(super) fn step_player_moving(&mut self) {
        let Some(&next) = self.player.pending_path.front() else {
            self.player.pending_target = None;
            self.set_state(TurnState::PlayerInput);
            return;
        };

        if let Some(enemy_id) = self.floor.enemy_at(next) {
            if self.player_adjacent_to(enemy_id) {
                self.player_attack(enemy_id);
            }
            self.player.clear_pending();
            self.set_state(TurnState::EnemyTurn);
            return;
        }

        self.player.pending_path.pop_front();
        self.player.pos = next;
        self.pick_up_item();

        if self.floor.stairs_visible && next == self.floor.stairs {
            self.set_state(TurnState::NewFloor);
        } else {
            self.set_state(TurnState::EnemyTurn);
        }
    }

    fn pick_up_item(&mut self) {
        if self.player.inventory_full() {
            return;
        }
        let Some(item_id) = self.floor.item_at(self.player.pos) else {
            return;
        };
        if let Some(item) = self.floor.items.remove(item_id) {
            self.player.inventory.push(item.kind);
            self.log.push(LogEvent::ItemPickedUp { kind: item.kind });
        }
    }

    pub(super) fn step_enemy_turn(&mut self) {
        self.floor.projectiles.clear();
        let mut occupancy = self.occupancy();
        let acting: Vec<EntityId> = self.floor.enemies.keys().collect();

        for enemy_id in acting {
            let Some(enemy) = self.floor.enemies.get(enemy_id) else {
                continue;
            };
            let ctx = TurnContext { player: self.player.pos, map: &self.floor.map, occupancy: &occupancy };
            let action = enemy.behavior().decide(enemy_id, enemy, &ctx);
            self.apply_enemy_action(enemy_id, action, &mut occupancy);
        }

        if self.floor.projectiles.is_empty() {
            self.finish_enemy_phase();
        } else {
            self.set_state(TurnState::ProjectileAnimation);
        }
    }

    fn apply_enemy_action(&mut self, enemy_id: EntityId, action: Action, occupancy: &mut OccupancyView) {
        let Some(enemy) = self.floor.enemies.get_mut(enemy_id) else {
            return;
        };
        match action {
            Action::Move { dx, dy } => {
                let from = enemy.footprint();
                enemy.pos = enemy.pos.offset(dx, dy);
                let to = Footprint { origin: enemy.pos, size: from.size };
                occupancy.relocate(Occupant::Enemy(enemy_id), from, to);
            }
            Action::Attack { damage } => {
                self.player.hp -= damage;
                self.log.push(LogEvent::PlayerHurt { damage });
            }
            Action::Fire { target, damage } => {
                let from = enemy.pos;
                self.floor.projectiles.push(Projectile::launch(from, target, damage, &self.config));
                self.log.push(LogEvent::ProjectileFired { from, target });
            }
            Action::Idle => {}
        }
    }

    pub(super) fn step_projectiles(&mut self) {
        let config = &self.config;
        let player_pos = self.player.pos;
        let mut hits = Vec::new();
        self.floor.projectiles.retain_mut(|shot| {
            if !shot.update(config) {
                return true;
            }
            // The shot lands on the tile it was aimed at; it only hurts if the
            // player is still standing close enough to that point.
            if shot.distance_to_tile(player_pos, config) < config.projectile_hit_radius {
                hits.push(shot.damage);
            }
            false
        });

        for damage in hits {
            self.player.hp -= damage;
            self.log.push(LogEvent::ProjectileHit { damage });
        }
        if self.floor.projectiles.is_empty() {
            self.finish_enemy_phase();
        }
    }

    pub(super) fn step_screen_flash(&mut self) {
        self.flash_ticks_left = self.flash_ticks_left.saturating_sub(1);
        if self.flash_ticks_left == 0 {
            self.set_state(TurnState::EnemyTurn);
        }
    }

    /// Shared tail of the enemy phase: reveal the stairs on a cleared floor,
    /// then hand control back to the player or resume a queued walk.
    /// A walk toward an enemy ends beside it; the strike is a fresh input.
    fn finish_enemy_phase(&mut self) {
        if !self.floor.stairs_visible && self.floor.enemies.is_empty() {
            self.floor.stairs_visible = true;
            self.log.push(LogEvent::StairsRevealed);
        }
        if self.player.pending_path.is_empty() {
            self.player.pending_target = None;
            self.set_state(TurnState::PlayerInput);
        } else {
            self.set_state(TurnState::PlayerMoving);
        }
    }

    pub(super) fn enter_game_over(&mut self) {
        if self.turn_state == TurnState::GameOver {
            return;
        }
        self.player.clear_pending();
        self.player.pending_throw = None;
        self.floor.projectiles.clear();
        self.log.push(LogEvent::GameOver { score: self.score });
        self.set_state(TurnState::GameOver);

        if self.score > self.high_score {
            match self.scores.save(self.score) {
                Ok(()) => self.log.push(LogEvent::HighScoreSaved { score: self.score }),
                Err(err) => warn!(%err, score = self.score, "high score not persisted"),
            }
            self.high_score = self.score;
        }
    }

    pub(super) fn restart(&mut self) {
        debug!(seed = self.seed, "restarting run");
        self.floor_index = 0;
        self.score = 0;
        self.bosses_defeated = 0;
        self.player = Player::new(self.player.pos);
        self.floor.projectiles.clear();
        self.flash_ticks_left = 0;
        self.log.push(LogEvent::Restarted);
        self.set_state(TurnState::NewFloor);
    }
}
