use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    pub struct EntityId;
    pub struct ItemId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }

    /// Straight-line distance in tiles.
    pub fn distance(self, other: Pos) -> f64 {
        f64::from(self.x - other.x).hypot(f64::from(self.y - other.y))
    }

    pub fn chebyshev(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Floor,
    Wall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Goblin,
    Orc,
    GoblinSlinger,
    StoneGolem,
}

/// Turn behaviour shared by several enemy kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyBehavior {
    Melee,
    Ranged,
    Boss,
}

impl EnemyKind {
    pub fn behavior(self) -> EnemyBehavior {
        match self {
            Self::Goblin | Self::Orc => EnemyBehavior::Melee,
            Self::GoblinSlinger => EnemyBehavior::Ranged,
            Self::StoneGolem => EnemyBehavior::Boss,
        }
    }

    pub fn footprint_size(self) -> i32 {
        match self.behavior() {
            EnemyBehavior::Boss => 2,
            EnemyBehavior::Melee | EnemyBehavior::Ranged => 1,
        }
    }

    pub fn is_boss(self) -> bool {
        self.behavior() == EnemyBehavior::Boss
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Potion,
    Rock,
    HolyGrenade,
    Bomb,
}

impl ItemKind {
    pub fn is_throwable(self) -> bool {
        matches!(self, Self::Rock | Self::HolyGrenade)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    #[default]
    NewFloor,
    PlayerInput,
    PlayerMoving,
    EnemyTurn,
    ProjectileAnimation,
    ScreenFlash,
    Targeting,
    GameOver,
}

impl TurnState {
    pub fn accepts_input(self) -> bool {
        matches!(self, Self::PlayerInput | Self::Targeting | Self::GameOver)
    }
}

/// One decision produced by an enemy for the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move { dx: i32, dy: i32 },
    Attack { damage: i32 },
    Fire { target: Pos, damage: i32 },
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    SelectTile { pos: Pos },
    SelectSlot { slot: usize },
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("input is not accepted while in {0:?}")]
    NotAcceptingInput(TurnState),
    #[error("tile ({}, {}) is outside the map", .0.x, .0.y)]
    OutOfBounds(Pos),
    #[error("inventory slot {0} is empty")]
    EmptySlot(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    FloorEntered { floor: u32, monster_house: bool },
    PathPlanned { target: Pos, steps: usize },
    NoPath { target: Pos },
    PlayerAttacked { enemy: EntityId, damage: i32 },
    EnemyKilled { kind: EnemyKind, points: u32 },
    LevelUp { level: u32 },
    ItemPickedUp { kind: ItemKind },
    ItemUsed { kind: ItemKind },
    ThrowCancelled,
    ProjectileFired { from: Pos, target: Pos },
    ProjectileHit { damage: i32 },
    PlayerHurt { damage: i32 },
    StairsRevealed,
    GameOver { score: u64 },
    HighScoreSaved { score: u64 },
    Restarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_counts_diagonals_once() {
        let a = Pos { y: 0, x: 0 };
        assert_eq!(a.chebyshev(Pos { y: 3, x: 5 }), 5);
        assert_eq!(a.chebyshev(Pos { y: -4, x: 1 }), 4);
    }

    #[test]
    fn only_input_states_accept_input() {
        let accepting: Vec<TurnState> = [
            TurnState::NewFloor,
            TurnState::PlayerInput,
            TurnState::PlayerMoving,
            TurnState::EnemyTurn,
            TurnState::ProjectileAnimation,
            TurnState::ScreenFlash,
            TurnState::Targeting,
            TurnState::GameOver,
        ]
        .into_iter()
        .filter(|state| state.accepts_input())
        .collect();
        assert_eq!(
            accepting,
            vec![TurnState::PlayerInput, TurnState::Targeting, TurnState::GameOver]
        );
    }

    #[test]
    fn boss_is_the_only_multi_cell_enemy() {
        assert_eq!(EnemyKind::StoneGolem.footprint_size(), 2);
        assert_eq!(EnemyKind::Goblin.footprint_size(), 1);
        assert_eq!(EnemyKind::GoblinSlinger.behavior(), EnemyBehavior::Ranged);
    }
}
