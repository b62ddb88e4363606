use thiserror::Error;
use tracing::debug;

use crate::game::Game;
use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};
use crate::types::{GameError, TurnState};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error(
        "journal format version {found} is not supported (expected {expected})",
        expected = JOURNAL_FORMAT_VERSION
    )]
    UnsupportedVersion { found: u16 },
    #[error("journal input #{index} is recorded for tick {tick}, which has already passed")]
    OutOfOrder { index: usize, tick: u64 },
    #[error("journal input #{index} at tick {tick} was rejected: {source}")]
    InputRejected {
        index: usize,
        tick: u64,
        #[source]
        source: GameError,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_tick: u64,
    pub final_state: TurnState,
    pub floor_index: u32,
    pub score: u64,
    pub final_snapshot_hash: u64,
}

impl ReplayResult {
    fn capture(game: &Game) -> Self {
        Self {
            final_tick: game.current_tick(),
            final_state: game.turn_state(),
            floor_index: game.floor_index(),
            score: game.score(),
            final_snapshot_hash: game.snapshot_hash(),
        }
    }
}

/// Rebuilds a run from its seed and config, feeding each journaled input at
/// the tick it was recorded for, and stops after `max_ticks` ticks.
pub fn replay_to_end(journal: &InputJournal, max_ticks: u64) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion { found: journal.format_version });
    }

    let mut game = Game::new(journal.seed, &journal.config);
    let mut records = journal.inputs.iter().enumerate().peekable();

    while game.current_tick() < max_ticks {
        let now = game.current_tick();
        while let Some((index, record)) = records.next_if(|(_, record)| record.tick <= now) {
            if record.tick < now {
                return Err(ReplayError::OutOfOrder { index, tick: record.tick });
            }
            game.handle_input(record.event).map_err(|source| ReplayError::InputRejected {
                index,
                tick: record.tick,
                source,
            })?;
        }
        game.tick();
    }

    debug!(
        ticks = game.current_tick(),
        unused_inputs = records.count(),
        "replay finished"
    );
    Ok(ReplayResult::capture(&game))
}
