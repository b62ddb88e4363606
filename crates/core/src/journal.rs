use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::InputEvent;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Every accepted player input of a run, keyed by the tick it was applied
/// at. Together with the seed and config it reproduces the run exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    /// Journals written without a config table replay with the defaults.
    #[serde(default)]
    pub config: GameConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Value of `Game::current_tick` when the input was applied, i.e. before
    /// the tick that consumed it.
    pub tick: u64,
    pub event: InputEvent,
}

impl InputJournal {
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            seed,
            config: config.clone(),
            inputs: Vec::new(),
        }
    }

    pub fn record(&mut self, tick: u64, event: InputEvent) {
        self.inputs.push(InputRecord { tick, event });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
