//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_u8(self.turn_state as u8);
        hasher.write_u32(self.floor_index);
        hasher.write_u64(self.score);
        hasher.write_u32(self.bosses_defeated);
        hasher.write_u32(self.flash_ticks_left);

        let player = &self.player;
        hasher.write_i32(player.pos.x);
        hasher.write_i32(player.pos.y);
        hasher.write_i32(player.hp);
        hasher.write_i32(player.max_hp);
        hasher.write_i32(player.attack);
        hasher.write_u32(player.level);
        hasher.write_u32(player.xp);
        hasher.write_u32(player.xp_to_next);
        hasher.write_usize(player.inventory.len());
        for &kind in &player.inventory {
            hasher.write_u8(kind as u8);
        }
        hasher.write_usize(player.pending_path.len());
        for step in &player.pending_path {
            hasher.write_i32(step.x);
            hasher.write_i32(step.y);
        }
        hasher.write_u8(u8::from(player.pending_target.is_some()));
        hasher.write_u64(player.pending_throw.map_or(u64::MAX, |slot| slot as u64));

        let floor = &self.floor;
        hasher.write_usize(floor.map.width);
        hasher.write_usize(floor.map.height);
        for &tile in &floor.map.tiles {
            hasher.write_u8(tile as u8);
        }
        hasher.write_usize(floor.enemies.len());
        for enemy in floor.enemies.values() {
            hasher.write_u8(enemy.kind as u8);
            hasher.write_i32(enemy.pos.x);
            hasher.write_i32(enemy.pos.y);
            hasher.write_i32(enemy.hp);
        }
        hasher.write_usize(floor.items.len());
        for item in floor.items.values() {
            hasher.write_u8(item.kind as u8);
            hasher.write_i32(item.pos.x);
            hasher.write_i32(item.pos.y);
        }
        hasher.write_usize(floor.projectiles.len());
        for shot in &floor.projectiles {
            hasher.write_u64(shot.x.to_bits());
            hasher.write_u64(shot.y.to_bits());
        }
        hasher.write_i32(floor.stairs.x);
        hasher.write_i32(floor.stairs.y);
        hasher.write_u8(u8::from(floor.stairs_visible));
        hasher.finish()
    }
}
