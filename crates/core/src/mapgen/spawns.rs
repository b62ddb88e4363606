//! Enemy and item placement for room-and-corridor floors.

use crate::types::{EnemyKind, ItemKind, Pos};

use super::layout::Room;
use super::model::{EnemySpawn, ItemSpawn};
use super::seed::FloorRng;

/// Every room except the first may hold one enemy at its centre. Deeper
/// floors are both busier and heavier on orcs.
pub(super) fn roll_enemies(rooms: &[Room], floor_index: u32, rng: &mut FloorRng) -> Vec<EnemySpawn> {
    let depth = f64::from(floor_index);
    let mut spawns = Vec::new();
    for room in rooms.iter().skip(1) {
        if !rng.chance(0.5 + depth * 0.02) {
            continue;
        }
        let roll = rng.unit();
        let kind = if roll < 0.2 + depth * 0.05 {
            EnemyKind::Orc
        } else if roll < 0.5 {
            EnemyKind::GoblinSlinger
        } else {
            EnemyKind::Goblin
        };
        spawns.push(EnemySpawn { kind, pos: room.center() });
    }
    spawns
}

const ITEM_TABLE: [(ItemKind, f64, (i32, i32)); 4] = [
    (ItemKind::Potion, 0.10, (1, 0)),
    (ItemKind::Rock, 0.20, (-1, 0)),
    (ItemKind::Bomb, 0.07, (0, 1)),
    (ItemKind::HolyGrenade, 0.05, (0, 1)),
];

pub(super) fn roll_items(rooms: &[Room], rng: &mut FloorRng) -> Vec<ItemSpawn> {
    let mut spawns = Vec::new();
    for room in rooms {
        let center = room.center();
        for (kind, probability, (dx, dy)) in ITEM_TABLE {
            if rng.chance(probability) {
                spawns.push(ItemSpawn { kind, pos: center.offset(dx, dy) });
            }
        }
    }
    spawns
}

/// Centre of the room farthest from the first room's centre; ties keep the
/// earliest room.
pub(super) fn farthest_room_center(rooms: &[Room]) -> Pos {
    let start = rooms[0].center();
    let mut best = start;
    let mut best_distance = -1.0;
    for room in rooms {
        let distance = start.distance(room.center());
        if distance > best_distance {
            best = room.center();
            best_distance = distance;
        }
    }
    best
}
