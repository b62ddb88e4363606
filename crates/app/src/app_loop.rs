//! Per-frame glue between captured input and the simulation: translates
//! keys and clicks into core inputs, journals the accepted ones and drives
//! the fixed-step clock.

use crawl_core::{Game, InputEvent, InputJournal, InputRecord, Pos};
use macroquad::prelude::KeyCode;
use tracing::debug;

/// Upper bound on ticks run for a single frame. Time beyond it is dropped
/// instead of being caught up later.
pub const MAX_TICKS_PER_FRAME: u32 = 8;

const SLOT_KEYS: [KeyCode; 5] =
    [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4, KeyCode::Key5];

/// Everything the player did during one rendered frame. `clicked_tile` is
/// already resolved to map coordinates; clicks outside the map never get here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameCommands {
    pub keys_pressed: Vec<KeyCode>,
    pub clicked_tile: Option<Pos>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Running,
    Exiting,
}

pub struct AppState {
    pub mode: AppMode,
    pub journal: InputJournal,
    /// Inputs accepted during the latest `apply_frame` call.
    pub accepted_inputs: Vec<InputRecord>,
    step_seconds: f64,
    accumulator: f64,
}

impl AppState {
    /// Starts journaling `game`, which must not have been fed any input yet.
    pub fn new(game: &Game, tick_hz: u32) -> Self {
        Self {
            mode: AppMode::default(),
            journal: InputJournal::new(game.seed(), game.config()),
            accepted_inputs: Vec::new(),
            step_seconds: 1.0 / f64::from(tick_hz.max(1)),
            accumulator: 0.0,
        }
    }

    pub fn step_seconds(&self) -> f64 {
        self.step_seconds
    }

    /// Feeds this frame's commands to the game. Accepted inputs are stamped
    /// with the tick they were applied at and appended to the journal.
    pub fn apply_frame(&mut self, game: &mut Game, frame: &FrameCommands) {
        self.accepted_inputs.clear();
        if frame.keys_pressed.contains(&KeyCode::Escape) {
            self.mode = AppMode::Exiting;
            return;
        }

        for event in translate_frame(frame) {
            let tick = game.current_tick();
            match game.handle_input(event) {
                Ok(outcome) => {
                    debug!(tick, ?event, ?outcome, "input accepted");
                    self.journal.record(tick, event);
                    self.accepted_inputs.push(InputRecord { tick, event });
                }
                Err(err) => debug!(tick, ?event, %err, "input dropped"),
            }
        }
    }

    /// Adds `frame_seconds` of wall time to the clock and runs one game tick
    /// per whole step. Returns the number of ticks run.
    pub fn advance(&mut self, game: &mut Game, frame_seconds: f64) -> u32 {
        self.accumulator += frame_seconds.max(0.0);
        let mut ticks = 0;
        while self.accumulator >= self.step_seconds && ticks < MAX_TICKS_PER_FRAME {
            game.tick();
            self.accumulator -= self.step_seconds;
            ticks += 1;
        }
        if self.accumulator >= self.step_seconds {
            debug!(dropped = self.accumulator, "frame overran the tick budget");
            self.accumulator = 0.0;
        }
        ticks
    }
}

/// Clicks become tile selections, `1`-`5` pick inventory slots and `R` or
/// `Enter` ask for a restart. The click is applied before any key.
pub fn translate_frame(frame: &FrameCommands) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if let Some(pos) = frame.clicked_tile {
        events.push(InputEvent::SelectTile { pos });
    }
    for key in &frame.keys_pressed {
        if let Some(slot) = SLOT_KEYS.iter().position(|slot_key| slot_key == key) {
            events.push(InputEvent::SelectSlot { slot });
        } else if matches!(key, KeyCode::R | KeyCode::Enter) {
            events.push(InputEvent::Restart);
        }
    }
    events
}
