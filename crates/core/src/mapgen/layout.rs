//! Rectangular rooms joined by L-shaped corridors.

use crate::state::Map;
use crate::types::{Pos, TileKind};

use super::seed::FloorRng;

const MAX_ROOMS: usize = 12;
const PLACEMENT_ATTEMPTS: usize = MAX_ROOMS * 10;
const MIN_ROOM_SIZE: i32 = 4;
const MAX_ROOM_SIZE: i32 = 7;

/// Half-open rectangle: covers `x1..x2` by `y1..y2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Room {
    pub(super) x1: i32,
    pub(super) y1: i32,
    pub(super) x2: i32,
    pub(super) y2: i32,
}

impl Room {
    pub(super) fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x1: x, y1: y, x2: x + width, y2: y + height }
    }

    pub(super) fn center(self) -> Pos {
        Pos { y: (self.y1 + self.y2) / 2, x: (self.x1 + self.x2) / 2 }
    }

    /// Overlap test with a one-tile margin so rooms never share a wall.
    fn intersects(self, other: Room) -> bool {
        self.x1 <= other.x2 + 1
            && self.x2 >= other.x1 - 1
            && self.y1 <= other.y2 + 1
            && self.y2 >= other.y1 - 1
    }

    pub(super) fn carve(self, map: &mut Map) {
        for y in self.y1..self.y2 {
            for x in self.x1..self.x2 {
                map.set_tile(Pos { y, x }, TileKind::Floor);
            }
        }
    }
}

/// Places up to twelve rooms on a solid map. Falls back to one room filling
/// the interior when nothing fits.
pub(super) fn place_rooms(map: &mut Map, rng: &mut FloorRng) -> Vec<Room> {
    let width = map.width as i32;
    let height = map.height as i32;
    let mut rooms: Vec<Room> = Vec::new();

    for _ in 0..PLACEMENT_ATTEMPTS {
        let w = rng.range(MIN_ROOM_SIZE, MAX_ROOM_SIZE);
        let h = rng.range(MIN_ROOM_SIZE, MAX_ROOM_SIZE);
        if width - w - 2 < 1 || height - h - 2 < 1 {
            continue;
        }
        let x = rng.range(1, width - w - 2);
        let y = rng.range(1, height - h - 2);
        let room = Room::new(x, y, w, h);
        if rooms.iter().any(|other| room.intersects(*other)) {
            continue;
        }
        room.carve(map);
        rooms.push(room);
        if rooms.len() >= MAX_ROOMS {
            break;
        }
    }

    if rooms.is_empty() {
        let room = Room::new(1, 1, (width - 2).max(1), (height - 2).max(1));
        room.carve(map);
        rooms.push(room);
    }
    rooms
}

/// Joins every room to the growing network through its nearest
/// already-connected neighbour.
pub(super) fn connect_rooms(map: &mut Map, rooms: &[Room], rng: &mut FloorRng) {
    if rooms.is_empty() {
        return;
    }
    let mut connected = vec![false; rooms.len()];
    connected[0] = true;

    for _ in 1..rooms.len() {
        let mut best: Option<(usize, usize, f64)> = None;
        for (i, from) in rooms.iter().enumerate().filter(|(i, _)| connected[*i]) {
            for (j, to) in rooms.iter().enumerate().filter(|(j, _)| !connected[*j]) {
                let distance = from.center().distance(to.center());
                if best.is_none_or(|(_, _, shortest)| distance < shortest) {
                    best = Some((i, j, distance));
                }
            }
        }
        let Some((i, j, _)) = best else { break };
        carve_corridor(map, rooms[i].center(), rooms[j].center(), rng.coin());
        connected[j] = true;
    }
}

fn carve_corridor(map: &mut Map, from: Pos, to: Pos, horizontal_first: bool) {
    let (xs, ys) = (from.x.min(to.x)..=from.x.max(to.x), from.y.min(to.y)..=from.y.max(to.y));
    if horizontal_first {
        for x in xs {
            map.set_tile(Pos { y: from.y, x }, TileKind::Floor);
        }
        for y in ys {
            map.set_tile(Pos { y, x: to.x }, TileKind::Floor);
        }
    } else {
        for y in ys {
            map.set_tile(Pos { y, x: from.x }, TileKind::Floor);
        }
        for x in xs {
            map.set_tile(Pos { y: to.y, x }, TileKind::Floor);
        }
    }
}
