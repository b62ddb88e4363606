//! Player choices made in `PlayerInput` and `Targeting`.

use tracing::debug;

use super::pathfinding::{find_path, find_path_to_adjacent};
use super::*;
use crate::content::{BOMB_DAMAGE, POTION_HEAL, THROW_RANGE, throw_damage};

impl Game {
    pub(super) fn select_tile(&mut self, pos: Pos) -> InputOutcome {
        if let Some(enemy_id) = self.floor.enemy_at(pos) {
            if self.player_adjacent_to(enemy_id) {
                self.player_attack(enemy_id);
                self.player.clear_pending();
                self.set_state(TurnState::EnemyTurn);
                return InputOutcome::Applied;
            }
            let footprint = self.floor.enemies[enemy_id].footprint();
            let path = find_path_to_adjacent(
                &self.floor.map,
                self.player.pos,
                footprint,
                &self.occupancy(),
                &[Occupant::Player, Occupant::Enemy(enemy_id)],
            );
            return self.start_walking(pos, path, Some(enemy_id));
        }

        if pos == self.player.pos {
            self.player.clear_pending();
            return InputOutcome::NoEffect;
        }
        if !self.floor.map.is_walkable(pos) {
            return InputOutcome::NoEffect;
        }
        let path =
            find_path(&self.floor.map, self.player.pos, pos, &self.occupancy(), &[Occupant::Player]);
        self.start_walking(pos, path, None)
    }

    fn start_walking(
        &mut self,
        target: Pos,
        path: Vec<Pos>,
        enemy: Option<EntityId>,
    ) -> InputOutcome {
        self.player.clear_pending();
        if path.is_empty() {
            self.log.push(LogEvent::NoPath { target });
            return InputOutcome::NoEffect;
        }
        self.log.push(LogEvent::PathPlanned { target, steps: path.len() });
        self.player.pending_path = path.into();
        self.player.pending_target = enemy;
        self.set_state(TurnState::PlayerMoving);
        InputOutcome::Applied
    }

    pub(super) fn use_item(&mut self, slot: usize, kind: ItemKind) -> InputOutcome {
        match kind {
            ItemKind::Potion => {
                if self.player.hp >= self.player.max_hp {
                    return InputOutcome::NoEffect;
                }
                let restored = self.player.heal(POTION_HEAL);
                debug!(restored, hp = self.player.hp, "potion");
                self.consume_slot(slot, kind);
                self.set_state(TurnState::EnemyTurn);
            }
            ItemKind::Rock | ItemKind::HolyGrenade => {
                self.player.pending_throw = Some(slot);
                self.set_state(TurnState::Targeting);
            }
            ItemKind::Bomb => {
                let targets: Vec<EntityId> = self.floor.enemies.keys().collect();
                for enemy_id in targets {
                    self.damage_enemy(enemy_id, BOMB_DAMAGE);
                }
                self.consume_slot(slot, kind);
                self.flash_ticks_left = self.config.flash_ticks;
                self.set_state(if self.flash_ticks_left > 0 {
                    TurnState::ScreenFlash
                } else {
                    TurnState::EnemyTurn
                });
            }
        }
        InputOutcome::Applied
    }

    /// Second half of a throw: the clicked tile must hold an enemy within
    /// range, otherwise the throw is called off and the item kept.
    pub(super) fn resolve_throw(&mut self, pos: Pos) -> InputOutcome {
        let thrown = self
            .player
            .pending_throw
            .take()
            .and_then(|slot| self.player.inventory.get(slot).map(|&kind| (slot, kind)))
            .and_then(|(slot, kind)| throw_damage(kind).map(|damage| (slot, kind, damage)));

        let target = self.floor.enemy_at(pos);
        match (thrown, target) {
            (Some((slot, kind, damage)), Some(enemy_id))
                if self.player.pos.distance(pos) <= THROW_RANGE =>
            {
                self.consume_slot(slot, kind);
                self.damage_enemy(enemy_id, damage);
                self.set_state(TurnState::EnemyTurn);
                InputOutcome::Applied
            }
            _ => {
                self.log.push(LogEvent::ThrowCancelled);
                self.set_state(TurnState::PlayerInput);
                InputOutcome::Applied
            }
        }
    }

    fn consume_slot(&mut self, slot: usize, kind: ItemKind) {
        self.player.inventory.remove(slot);
        self.log.push(LogEvent::ItemUsed { kind });
    }
}
