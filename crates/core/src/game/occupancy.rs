//! Tile → occupant index shared by pathfinding, movement and targeting.
//! Boss footprints are expanded so every covered tile maps to the boss.

use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::state::{Enemy, Footprint, Player};
use crate::types::{EntityId, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Occupant {
    Player,
    Enemy(EntityId),
}

#[derive(Clone, Debug, Default)]
pub struct OccupancyView {
    cells: BTreeMap<Pos, Occupant>,
}

impl OccupancyView {
    pub fn build(player: &Player, enemies: &SlotMap<EntityId, Enemy>) -> Self {
        let mut view = Self::default();
        for (id, enemy) in enemies {
            view.insert(Occupant::Enemy(id), enemy.footprint());
        }
        view.insert(Occupant::Player, Footprint::single(player.pos));
        view
    }

    pub fn occupant(&self, pos: Pos) -> Option<Occupant> {
        self.cells.get(&pos).copied()
    }

    /// True when something other than the `ignored` occupants stands on `pos`.
    pub fn blocks(&self, pos: Pos, ignored: &[Occupant]) -> bool {
        self.occupant(pos).is_some_and(|occupant| !ignored.contains(&occupant))
    }

    pub fn insert(&mut self, occupant: Occupant, footprint: Footprint) {
        for cell in footprint.cells() {
            self.cells.insert(cell, occupant);
        }
    }

    pub fn remove(&mut self, occupant: Occupant, footprint: Footprint) {
        for cell in footprint.cells() {
            if self.cells.get(&cell) == Some(&occupant) {
                self.cells.remove(&cell);
            }
        }
    }

    pub fn relocate(&mut self, occupant: Occupant, from: Footprint, to: Footprint) {
        self.remove(occupant, from);
        self.insert(occupant, to);
    }
}
