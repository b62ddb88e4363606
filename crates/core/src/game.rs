use tracing::debug;

use crate::config::GameConfig;
use crate::mapgen::{FloorGenerator, RandomFloorGenerator};
use crate::score::{MemoryScoreStore, ScoreStore};
use crate::state::{FloorState, Player};
use crate::types::*;

pub mod ai;
pub mod occupancy;
pub mod pathfinding;
pub mod snapshot;

mod combat;
mod floor_transition;
mod hash;
mod input;
mod turns;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use occupancy::{Occupant, OccupancyView};
pub use snapshot::{EnemyView, ItemView, PlayerView, ProjectileView, Snapshot, TileHint};

/// What an accepted input did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// The input changed the game, possibly starting a turn.
    Applied,
    /// Accepted but nothing happened, e.g. a click on a wall.
    NoEffect,
}

/// The turn controller. Owns every piece of mutable run state and advances
/// it one tick at a time.
pub struct Game {
    seed: u64,
    config: GameConfig,
    tick: u64,
    turn_state: TurnState,
    floor_index: u32,
    score: u64,
    high_score: u64,
    bosses_defeated: u32,
    player: Player,
    floor: FloorState,
    flash_ticks_left: u32,
    log: Vec<LogEvent>,
    generator: Box<dyn FloorGenerator>,
    scores: Box<dyn ScoreStore>,
}

impl Game {
    /// A run driven by the seeded default generator and an in-memory score
    /// store.
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        Self::with_collaborators(
            seed,
            config,
            Box::new(RandomFloorGenerator::new(seed, config)),
            Box::new(MemoryScoreStore::default()),
        )
    }

    pub fn with_collaborators(
        seed: u64,
        config: &GameConfig,
        generator: Box<dyn FloorGenerator>,
        scores: Box<dyn ScoreStore>,
    ) -> Self {
        let high_score = scores.load();
        Self {
            seed,
            config: config.clone(),
            tick: 0,
            turn_state: TurnState::NewFloor,
            floor_index: 0,
            score: 0,
            high_score,
            bosses_defeated: 0,
            player: Player::new(Pos { y: 0, x: 0 }),
            floor: FloorState::empty(),
            flash_ticks_left: 0,
            log: Vec::new(),
            generator,
            scores,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    pub fn floor_index(&self) -> u32 {
        self.floor_index
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn bosses_defeated(&self) -> u32 {
        self.bosses_defeated
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn floor(&self) -> &FloorState {
        &self.floor
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Applies one player input immediately. Rejected inputs leave the game
    /// untouched.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<InputOutcome, GameError> {
        let state = self.turn_state;
        if !state.accepts_input() {
            return Err(GameError::NotAcceptingInput(state));
        }
        match event {
            InputEvent::Restart if state == TurnState::GameOver => {
                self.restart();
                Ok(InputOutcome::Applied)
            }
            InputEvent::Restart => Err(GameError::NotAcceptingInput(state)),
            _ if state == TurnState::GameOver || !self.player.is_alive() => {
                Err(GameError::NotAcceptingInput(state))
            }
            InputEvent::SelectTile { pos } => {
                if !self.floor.map.in_bounds(pos) {
                    return Err(GameError::OutOfBounds(pos));
                }
                Ok(match state {
                    TurnState::Targeting => self.resolve_throw(pos),
                    _ => self.select_tile(pos),
                })
            }
            InputEvent::SelectSlot { slot } => {
                if state != TurnState::PlayerInput {
                    return Err(GameError::NotAcceptingInput(state));
                }
                let Some(&kind) = self.player.inventory.get(slot) else {
                    return Err(GameError::EmptySlot(slot));
                };
                Ok(self.use_item(slot, kind))
            }
        }
    }

    /// Advances the simulation by one tick and returns the resulting state.
    pub fn tick(&mut self) -> TurnState {
        self.tick += 1;

        if self.turn_state == TurnState::NewFloor {
            self.enter_next_floor();
            return self.turn_state;
        }
        if !self.player.is_alive() {
            self.enter_game_over();
            return self.turn_state;
        }

        match self.turn_state {
            TurnState::PlayerMoving => self.step_player_moving(),
            TurnState::EnemyTurn => self.step_enemy_turn(),
            TurnState::ProjectileAnimation => self.step_projectiles(),
            TurnState::ScreenFlash => self.step_screen_flash(),
            TurnState::NewFloor
            | TurnState::PlayerInput
            | TurnState::Targeting
            | TurnState::GameOver => {}
        }
        self.turn_state
    }

    /// Applies `inputs` in order, skipping rejected ones, then ticks once.
    /// Returns the inputs that were accepted.
    pub fn tick_with_inputs(&mut self, inputs: &[InputEvent]) -> Vec<InputEvent> {
        let mut accepted = Vec::new();
        for &event in inputs {
            match self.handle_input(event) {
                Ok(_) => accepted.push(event),
                Err(err) => debug!(tick = self.tick, %err, "input rejected"),
            }
        }
        self.tick();
        accepted
    }

    pub(crate) fn occupancy(&self) -> OccupancyView {
        OccupancyView::build(&self.player, &self.floor.enemies)
    }

    fn set_state(&mut self, next: TurnState) {
        if self.turn_state != next {
            debug!(tick = self.tick, from = ?self.turn_state, to = ?next, "turn state");
        }
        self.turn_state = next;
    }
}
