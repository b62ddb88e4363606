use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use game_core::{GameConfig, InputJournal, ReplayResult, replay_to_end};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Replays a recorded input journal headlessly and prints where the run ended.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// Ticks to simulate; defaults to one past the last recorded input
    #[arg(short, long)]
    ticks: Option<u64>,
    /// Game configuration as JSON, replacing the one recorded in the journal
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Fail unless the final snapshot hash matches, e.g. 0x00000000deadbeef
    #[arg(long)]
    expect_hash: Option<String>,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    inputs: usize,
    final_tick: u64,
    final_state: String,
    floor_index: u32,
    score: u64,
    snapshot_hash: String,
}

impl Report {
    fn new(journal: &InputJournal, result: &ReplayResult) -> Self {
        Self {
            seed: journal.seed,
            inputs: journal.inputs.len(),
            final_tick: result.final_tick,
            final_state: format!("{:?}", result.final_state),
            floor_index: result.floor_index,
            score: result.score,
            snapshot_hash: format!("0x{:016x}", result.final_snapshot_hash),
        }
    }
}

fn parse_hash(raw: &str) -> Result<u64> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    u64::from_str_radix(digits, 16).with_context(|| format!("'{raw}' is not a hex hash"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let mut journal: InputJournal =
        serde_json::from_str(&journal_data).context("Failed to deserialize journal JSON")?;

    if let Some(path) = &args.config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: GameConfig =
            serde_json::from_str(&text).context("Failed to deserialize config JSON")?;
        if config != journal.config {
            warn!(path = %path.display(), "config differs from the recorded run; hashes will not match");
        }
        journal.config = config;
    }

    let ticks = args
        .ticks
        .unwrap_or_else(|| journal.inputs.last().map_or(0, |record| record.tick) + 1);
    info!(seed = journal.seed, inputs = journal.inputs.len(), ticks, "replaying");

    let result = replay_to_end(&journal, ticks).context("Replay failed")?;
    let report = Report::new(&journal, &result);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Replay complete.");
        println!("Seed: {}", report.seed);
        println!("Final Tick: {}", report.final_tick);
        println!("State: {}", report.final_state);
        println!("Floor: {}", report.floor_index);
        println!("Score: {}", report.score);
        println!("Snapshot Hash: {}", report.snapshot_hash);
    }

    if let Some(expected) = &args.expect_hash
        && parse_hash(expected)? != result.final_snapshot_hash
    {
        bail!("snapshot hash {} does not match expected {expected}", report.snapshot_hash);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_hash;

    #[test]
    fn hashes_parse_with_or_without_prefix() {
        assert_eq!(parse_hash("0x00000000deadbeef").expect("prefixed"), 0xdead_beef);
        assert_eq!(parse_hash("ff").expect("bare"), 255);
        assert!(parse_hash("0xnope").is_err());
    }
}
