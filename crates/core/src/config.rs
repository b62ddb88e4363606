//! Tuning knobs for a run. Every field has a default so partial settings
//! files deserialize cleanly.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map_width: usize,
    pub map_height: usize,
    /// Length units per tile, used for projectile flight.
    pub tile_size: f64,
    pub projectile_speed: f64,
    pub projectile_hit_radius: f64,
    pub flash_ticks: u32,
    pub boss_floor_interval: u32,
    pub monster_house_percent: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width: 25,
            map_height: 15,
            tile_size: 48.0,
            projectile_speed: 15.0,
            projectile_hit_radius: 20.0,
            flash_ticks: 6,
            boss_floor_interval: 5,
            monster_house_percent: 15,
        }
    }
}

impl GameConfig {
    pub fn tile_center(&self, x: i32, y: i32) -> (f64, f64) {
        let half = (self.tile_size / 2.0).floor();
        (f64::from(x) * self.tile_size + half, f64::from(y) * self.tile_size + half)
    }
}
