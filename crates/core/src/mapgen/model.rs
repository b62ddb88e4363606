//! Data handed from a floor generator to the turn controller.

use crate::state::Map;
use crate::types::{EnemyKind, ItemKind, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloorRequest {
    pub width: usize,
    pub height: usize,
    pub floor_index: u32,
    pub bosses_defeated: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemySpawn {
    pub kind: EnemyKind,
    /// Top-left tile of the enemy's footprint.
    pub pos: Pos,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemSpawn {
    pub kind: ItemKind,
    pub pos: Pos,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FloorLayout {
    #[default]
    Rooms,
    BossLair,
    MonsterHouse,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFloor {
    pub map: Map,
    pub player_start: Pos,
    pub enemies: Vec<EnemySpawn>,
    pub items: Vec<ItemSpawn>,
    pub stairs: Pos,
    pub stairs_visible: bool,
    pub layout: FloorLayout,
}

impl GeneratedFloor {
    /// A floor with no enemies or items and visible stairs, handy for
    /// hand-built maps.
    pub fn bare(map: Map, player_start: Pos, stairs: Pos) -> Self {
        Self {
            map,
            player_start,
            enemies: Vec::new(),
            items: Vec::new(),
            stairs,
            stairs_visible: true,
            layout: FloorLayout::Rooms,
        }
    }
}
