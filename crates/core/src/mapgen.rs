//! Procedural floor generation split into coherent submodules.

pub mod model;

mod layout;
mod seed;
mod spawns;
mod special;

use tracing::debug;

use crate::config::GameConfig;
use crate::state::Map;
use crate::types::TileKind;

pub use model::{EnemySpawn, FloorLayout, FloorRequest, GeneratedFloor, ItemSpawn};

/// Source of floors for the turn controller.
pub trait FloorGenerator {
    fn generate(&mut self, request: &FloorRequest) -> GeneratedFloor;
}

impl<F> FloorGenerator for F
where
    F: FnMut(&FloorRequest) -> GeneratedFloor,
{
    fn generate(&mut self, request: &FloorRequest) -> GeneratedFloor {
        self(request)
    }
}

/// Seeded generator: rooms and corridors, with periodic boss lairs and the
/// occasional monster house.
#[derive(Clone, Debug)]
pub struct RandomFloorGenerator {
    run_seed: u64,
    generation: u64,
    boss_floor_interval: u32,
    monster_house_percent: u32,
}

impl RandomFloorGenerator {
    pub fn new(run_seed: u64, config: &GameConfig) -> Self {
        Self {
            run_seed,
            generation: 0,
            boss_floor_interval: config.boss_floor_interval,
            monster_house_percent: config.monster_house_percent,
        }
    }

    pub fn is_boss_floor(&self, floor_index: u32) -> bool {
        self.boss_floor_interval > 0
            && floor_index > 0
            && floor_index.is_multiple_of(self.boss_floor_interval)
    }
}

impl FloorGenerator for RandomFloorGenerator {
    fn generate(&mut self, request: &FloorRequest) -> GeneratedFloor {
        let mut rng = seed::FloorRng::new(seed::derive_floor_seed(self.run_seed, self.generation));
        self.generation += 1;

        let floor = if self.is_boss_floor(request.floor_index) {
            special::boss_lair(request.width, request.height)
        } else if request.floor_index > 1
            && rng.chance(f64::from(self.monster_house_percent) / 100.0)
        {
            special::monster_house(request.width, request.height, &mut rng)
        } else {
            rooms_and_corridors(request, &mut rng)
        };
        debug!(
            floor = request.floor_index,
            layout = ?floor.layout,
            enemies = floor.enemies.len(),
            items = floor.items.len(),
            "generated floor"
        );
        floor
    }
}

fn rooms_and_corridors(request: &FloorRequest, rng: &mut seed::FloorRng) -> GeneratedFloor {
    let mut map = Map::filled(request.width, request.height, TileKind::Wall);
    let rooms = layout::place_rooms(&mut map, rng);
    layout::connect_rooms(&mut map, &rooms, rng);
    let enemies = spawns::roll_enemies(&rooms, request.floor_index, rng);
    let items = spawns::roll_items(&rooms, rng);
    GeneratedFloor {
        map,
        player_start: rooms[0].center(),
        enemies,
        items,
        stairs: spawns::farthest_room_center(&rooms),
        stairs_visible: true,
        layout: FloorLayout::Rooms,
    }
}
