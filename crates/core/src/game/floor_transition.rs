//! Floor setup: asks the generator for the next floor and installs it.

use slotmap::SlotMap;
use tracing::info;

use super::*;
use crate::mapgen::{FloorLayout, FloorRequest, GeneratedFloor};
use crate::state::{Enemy, Item};

impl Game {
    pub(super) fn enter_next_floor(&mut self) {
        self.floor_index += 1;
        let request = FloorRequest {
            width: self.config.map_width,
            height: self.config.map_height,
            floor_index: self.floor_index,
            bosses_defeated: self.bosses_defeated,
        };
        let generated = self.generator.generate(&request);
        let monster_house = generated.layout == FloorLayout::MonsterHouse;
        self.install_floor(generated);

        self.high_score = self.scores.load().max(self.high_score);
        self.log.push(LogEvent::FloorEntered { floor: self.floor_index, monster_house });
        info!(
            floor = self.floor_index,
            enemies = self.floor.enemies.len(),
            monster_house,
            "entered floor"
        );
        self.set_state(TurnState::PlayerInput);
    }

    fn install_floor(&mut self, generated: GeneratedFloor) {
        let mut enemies = SlotMap::with_key();
        for spawn in generated.enemies {
            enemies.insert(Enemy::spawn(spawn.kind, spawn.pos, self.bosses_defeated));
        }
        let mut items = SlotMap::with_key();
        for spawn in generated.items {
            items.insert(Item { kind: spawn.kind, pos: spawn.pos });
        }

        self.floor = FloorState {
            map: generated.map,
            enemies,
            items,
            projectiles: Vec::new(),
            stairs: generated.stairs,
            stairs_visible: generated.stairs_visible,
        };

        self.player.pos = generated.player_start;
        self.player.clear_pending();
        self.player.pending_throw = None;
        self.player.hp = self.player.max_hp;
        self.flash_ticks_left = 0;
    }
}
