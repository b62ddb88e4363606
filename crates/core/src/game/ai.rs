//! Enemy turn decisions. Each behaviour reads the current floor through a
//! [`TurnContext`] and returns one [`Action`]; movement is only proposed when
//! the destination is free, so applying an action never has to re-check.

use super::occupancy::{Occupant, OccupancyView};
use crate::content::{AGGRO_RANGE, MELEE_RANGE, RANGED_MAX_FIRE_DISTANCE, RANGED_RETREAT_DISTANCE};
use crate::state::{Enemy, Footprint, Map};
use crate::types::{Action, EnemyBehavior, EntityId, Pos};

pub struct TurnContext<'a> {
    pub player: Pos,
    pub map: &'a Map,
    pub occupancy: &'a OccupancyView,
}

impl EnemyBehavior {
    pub fn decide(self, id: EntityId, enemy: &Enemy, ctx: &TurnContext<'_>) -> Action {
        match self {
            Self::Melee => melee_turn(id, enemy, ctx),
            Self::Ranged => ranged_turn(id, enemy, ctx),
            Self::Boss => boss_turn(id, enemy, ctx),
        }
    }
}

fn melee_turn(id: EntityId, enemy: &Enemy, ctx: &TurnContext<'_>) -> Action {
    let distance = enemy.pos.distance(ctx.player);
    if distance >= AGGRO_RANGE {
        return Action::Idle;
    }
    if distance <= MELEE_RANGE {
        return Action::Attack { damage: enemy.attack };
    }
    let (dx, dy) = toward(enemy.pos, ctx.player);
    step_if_free(id, enemy, dx, dy, ctx)
}

fn ranged_turn(id: EntityId, enemy: &Enemy, ctx: &TurnContext<'_>) -> Action {
    let distance = enemy.pos.distance(ctx.player);
    let aligned = enemy.pos.x == ctx.player.x || enemy.pos.y == ctx.player.y;
    if aligned && distance > 1.0 && distance < RANGED_MAX_FIRE_DISTANCE {
        return Action::Fire { target: ctx.player, damage: enemy.attack };
    }
    let (dx, dy) = toward(enemy.pos, ctx.player);
    if distance <= RANGED_RETREAT_DISTANCE {
        return step_if_free(id, enemy, -dx, -dy, ctx);
    }
    if distance < AGGRO_RANGE {
        return step_if_free(id, enemy, dx, dy, ctx);
    }
    Action::Idle
}

fn boss_turn(id: EntityId, enemy: &Enemy, ctx: &TurnContext<'_>) -> Action {
    let footprint = enemy.footprint();
    if footprint.touches_ring(ctx.player) {
        return Action::Attack { damage: enemy.attack };
    }
    if footprint.distance_from_center(ctx.player) >= AGGRO_RANGE {
        return Action::Idle;
    }
    let (cx, cy) = footprint.center();
    let dx = axis_step(f64::from(ctx.player.x) - cx);
    let dy = axis_step(f64::from(ctx.player.y) - cy);
    step_if_free(id, enemy, dx, dy, ctx)
}

fn toward(from: Pos, to: Pos) -> (i32, i32) {
    ((to.x - from.x).signum(), (to.y - from.y).signum())
}

fn axis_step(delta: f64) -> i32 {
    if delta > 0.0 {
        1
    } else if delta < 0.0 {
        -1
    } else {
        0
    }
}

fn step_if_free(id: EntityId, enemy: &Enemy, dx: i32, dy: i32, ctx: &TurnContext<'_>) -> Action {
    if dx == 0 && dy == 0 {
        return Action::Idle;
    }
    let destination = Footprint { origin: enemy.pos.offset(dx, dy), size: enemy.kind.footprint_size() };
    if can_occupy(ctx.map, ctx.occupancy, Occupant::Enemy(id), destination) {
        Action::Move { dx, dy }
    } else {
        Action::Idle
    }
}

/// Every tile of `footprint` is floor and held by nobody but `mover`.
pub fn can_occupy(map: &Map, occupancy: &OccupancyView, mover: Occupant, footprint: Footprint) -> bool {
    footprint.cells().all(|cell| map.is_walkable(cell) && !occupancy.blocks(cell, &[mover]))
}
