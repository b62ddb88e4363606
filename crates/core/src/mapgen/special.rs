//! Single-room floors: the boss lair and the monster house.

use crate::state::Map;
use crate::types::{EnemyKind, Pos, TileKind};

use super::layout::Room;
use super::model::{EnemySpawn, FloorLayout, GeneratedFloor};
use super::seed::FloorRng;

const ARENA_MARGIN: i32 = 3;

fn arena(width: usize, height: usize) -> (Map, Room) {
    let mut map = Map::filled(width, height, TileKind::Wall);
    let w = (width as i32 - 2 * ARENA_MARGIN).max(2);
    let h = (height as i32 - 2 * ARENA_MARGIN).max(2);
    let room = Room::new(ARENA_MARGIN, ARENA_MARGIN, w, h);
    room.carve(&mut map);
    (map, room)
}

fn arena_start(room: Room) -> Pos {
    Pos { y: room.y2 - 2, x: room.center().x }
}

pub(super) fn boss_lair(width: usize, height: usize) -> GeneratedFloor {
    let (map, room) = arena(width, height);
    let center = room.center();
    let boss = EnemySpawn { kind: EnemyKind::StoneGolem, pos: Pos { y: room.y1 + 1, x: center.x - 1 } };
    GeneratedFloor {
        map,
        player_start: arena_start(room),
        enemies: vec![boss],
        items: Vec::new(),
        stairs: center,
        stairs_visible: true,
        layout: FloorLayout::BossLair,
    }
}

pub(super) fn monster_house(width: usize, height: usize, rng: &mut FloorRng) -> GeneratedFloor {
    let (map, room) = arena(width, height);
    let player_start = arena_start(room);
    let attempts = rng.range(8, 12);
    let mut enemies: Vec<EnemySpawn> = Vec::new();

    for _ in 0..attempts {
        let pos = Pos { x: rng.range(room.x1, room.x2 - 1), y: rng.range(room.y1, room.y2 - 1) };
        if pos == player_start || enemies.iter().any(|spawn| spawn.pos == pos) {
            continue;
        }
        let roll = rng.unit();
        let kind = if roll < 0.3 {
            EnemyKind::GoblinSlinger
        } else if roll < 0.6 {
            EnemyKind::Orc
        } else {
            EnemyKind::Goblin
        };
        enemies.push(EnemySpawn { kind, pos });
    }

    GeneratedFloor {
        map,
        player_start,
        enemies,
        items: Vec::new(),
        stairs: room.center(),
        stairs_visible: false,
        layout: FloorLayout::MonsterHouse,
    }
}
