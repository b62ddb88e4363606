//! Owned, read-only view of the game for presentation layers.

use serde::Serialize;

use super::*;
use crate::content::{THROW_RANGE, assets, enemy_asset, item_asset};
use crate::state::{DIRECTIONS, Map};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TileHint {
    Move,
    Attack,
    ThrowRange,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub inventory: Vec<ItemKind>,
    pub pending_throw: Option<usize>,
    pub asset: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub kind: EnemyKind,
    pub pos: Pos,
    pub size: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub asset: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemView {
    pub kind: ItemKind,
    pub pos: Pos,
    pub asset: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectileView {
    pub x: f64,
    pub y: f64,
    pub asset: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub turn_state: TurnState,
    pub floor_index: u32,
    pub score: u64,
    pub high_score: u64,
    pub bosses_defeated: u32,
    pub map: Map,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub items: Vec<ItemView>,
    pub projectiles: Vec<ProjectileView>,
    pub stairs: Option<Pos>,
    pub stairs_asset: &'static str,
    pub pending_path: Vec<Pos>,
    pub hints: Vec<(Pos, TileHint)>,
}

impl Game {
    pub fn snapshot(&self) -> Snapshot {
        let player = &self.player;
        Snapshot {
            tick: self.tick,
            turn_state: self.turn_state,
            floor_index: self.floor_index,
            score: self.score,
            high_score: self.high_score,
            bosses_defeated: self.bosses_defeated,
            map: self.floor.map.clone(),
            player: PlayerView {
                pos: player.pos,
                hp: player.hp,
                max_hp: player.max_hp,
                attack: player.attack,
                level: player.level,
                xp: player.xp,
                xp_to_next: player.xp_to_next,
                inventory: player.inventory.clone(),
                pending_throw: player.pending_throw,
                asset: assets::PLAYER,
            },
            enemies: self
                .floor
                .enemies
                .iter()
                .map(|(id, enemy)| EnemyView {
                    id,
                    kind: enemy.kind,
                    pos: enemy.pos,
                    size: enemy.kind.footprint_size(),
                    hp: enemy.hp,
                    max_hp: enemy.max_hp,
                    asset: enemy_asset(enemy.kind),
                })
                .collect(),
            items: self
                .floor
                .items
                .values()
                .map(|item| ItemView { kind: item.kind, pos: item.pos, asset: item_asset(item.kind) })
                .collect(),
            projectiles: self
                .floor
                .projectiles
                .iter()
                .map(|shot| ProjectileView { x: shot.x, y: shot.y, asset: shot.asset })
                .collect(),
            stairs: self.floor.stairs_visible.then_some(self.floor.stairs),
            stairs_asset: assets::STAIRS,
            pending_path: player.pending_path.iter().copied().collect(),
            hints: self.tile_hints(),
        }
    }

    fn tile_hints(&self) -> Vec<(Pos, TileHint)> {
        let map = &self.floor.map;
        match self.turn_state {
            TurnState::PlayerInput if self.player.pending_path.is_empty() => DIRECTIONS
                .iter()
                .map(|&(dx, dy)| self.player.pos.offset(dx, dy))
                .filter(|pos| map.in_bounds(*pos))
                .filter_map(|pos| {
                    if self.floor.enemy_at(pos).is_some() {
                        Some((pos, TileHint::Attack))
                    } else if map.is_walkable(pos) {
                        Some((pos, TileHint::Move))
                    } else {
                        None
                    }
                })
                .collect(),
            TurnState::Targeting => {
                let mut hints = Vec::new();
                for y in 0..map.height as i32 {
                    for x in 0..map.width as i32 {
                        let pos = Pos { y, x };
                        if map.is_walkable(pos) && self.player.pos.distance(pos) <= THROW_RANGE {
                            hints.push((pos, TileHint::ThrowRange));
                        }
                    }
                }
                hints
            }
            _ => Vec::new(),
        }
    }
}
