pub mod config;
pub mod content;
pub mod game;
pub mod journal;
pub mod mapgen;
pub mod replay;
pub mod score;
pub mod state;
pub mod types;

pub use config::GameConfig;
pub use game::{Game, InputOutcome, Snapshot, TileHint};
pub use journal::{InputJournal, InputRecord};
pub use mapgen::{FloorGenerator, FloorRequest, GeneratedFloor, RandomFloorGenerator};
pub use replay::*;
pub use score::{MemoryScoreStore, ScoreStore, ScoreStoreError};
pub use state::{FloorState, Map, Player};
pub use types::*;
