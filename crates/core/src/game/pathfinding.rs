//! Breadth-first routing over the floor grid.
//! Neighbours expand in `DIRECTIONS` order, so equal-length routes always
//! resolve the same way. Diagonal steps never check the two orthogonal tiles.

use std::collections::{BTreeMap, VecDeque};

use super::occupancy::{Occupant, OccupancyView};
use crate::state::{DIRECTIONS, Footprint, Map};
use crate::types::Pos;

/// Shortest route from `start` to `goal`, excluding `start` and ending on
/// `goal`. Empty when `start == goal` or when `goal` cannot be reached.
/// Tiles held by anyone outside `ignored` are impassable.
pub fn find_path(
    map: &Map,
    start: Pos,
    goal: Pos,
    occupancy: &OccupancyView,
    ignored: &[Occupant],
) -> Vec<Pos> {
    if start == goal {
        return Vec::new();
    }

    let mut came_from: BTreeMap<Pos, Pos> = BTreeMap::new();
    let mut queue = VecDeque::from([start]);
    came_from.insert(start, start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return unwind(&came_from, start, goal);
        }
        for (dx, dy) in DIRECTIONS {
            let next = current.offset(dx, dy);
            if came_from.contains_key(&next)
                || !map.is_walkable(next)
                || occupancy.blocks(next, ignored)
            {
                continue;
            }
            came_from.insert(next, current);
            queue.push_back(next);
        }
    }

    Vec::new()
}

/// Shortest route ending on any walkable tile bordering `target`. Among
/// equally short routes the first border tile in ring order wins.
pub fn find_path_to_adjacent(
    map: &Map,
    start: Pos,
    target: Footprint,
    occupancy: &OccupancyView,
    ignored: &[Occupant],
) -> Vec<Pos> {
    let mut best: Option<Vec<Pos>> = None;
    for candidate in target.surrounding() {
        if !map.is_walkable(candidate) {
            continue;
        }
        let path = find_path(map, start, candidate, occupancy, ignored);
        if path.is_empty() {
            continue;
        }
        if best.as_ref().is_none_or(|current| path.len() < current.len()) {
            best = Some(path);
        }
    }
    best.unwrap_or_default()
}

fn unwind(came_from: &BTreeMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut cursor = goal;
    while cursor != start {
        path.push(cursor);
        match came_from.get(&cursor) {
            Some(&prev) => cursor = prev,
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
