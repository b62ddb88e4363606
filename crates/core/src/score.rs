//! Persistent best score. The controller reads it when a floor starts and
//! writes it at most once per game over.

use std::cell::Cell;
use std::io;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("failed to write high score: {0}")]
    Io(#[from] io::Error),
}

pub trait ScoreStore {
    /// Best score on record, 0 when nothing readable is stored.
    fn load(&self) -> u64;
    fn save(&mut self, score: u64) -> Result<(), ScoreStoreError>;
}

/// Store that lives only as long as the process. Clones share the same
/// record, so a test can keep a handle after giving one to a game.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    best: Rc<Cell<u64>>,
    saves: Rc<Cell<u32>>,
}

impl MemoryScoreStore {
    pub fn with_best(best: u64) -> Self {
        Self { best: Rc::new(Cell::new(best)), saves: Rc::default() }
    }

    /// Number of successful writes.
    pub fn saves(&self) -> u32 {
        self.saves.get()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u64 {
        self.best.get()
    }

    fn save(&mut self, score: u64) -> Result<(), ScoreStoreError> {
        self.best.set(score);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
