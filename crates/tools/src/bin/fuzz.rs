use std::collections::BTreeSet;
use std::io;

use anyhow::{Context, Result, bail};
use clap::Parser;
use game_core::content::INVENTORY_CAPACITY;
use game_core::{Game, GameConfig, InputEvent, Pos, TurnState};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Soaks the simulation with random clicks and slot presses, checking
/// invariants after every tick.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 5000)]
    ticks: u64,
    /// Number of consecutive seeds to run, starting at `seed`
    #[arg(short, long, default_value_t = 1)]
    runs: u64,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_input(rng: &mut ChaCha8Rng, game: &Game) -> InputEvent {
    let floor = game.floor();
    match choose(rng, &["slot", "enemy", "enemy", "tile", "stairs"]) {
        "slot" => InputEvent::SelectSlot { slot: rng.next_u64() as usize % INVENTORY_CAPACITY },
        "enemy" if !floor.enemies.is_empty() => {
            let targets: Vec<Pos> = floor.enemies.values().map(|enemy| enemy.pos).collect();
            InputEvent::SelectTile { pos: choose(rng, &targets) }
        }
        "stairs" => InputEvent::SelectTile { pos: floor.stairs },
        _ => {
            let x = (rng.next_u64() % floor.map.width.max(1) as u64) as i32;
            let y = (rng.next_u64() % floor.map.height.max(1) as u64) as i32;
            InputEvent::SelectTile { pos: Pos { y, x } }
        }
    }
}

fn check_invariants(game: &Game) -> Result<()> {
    let player = game.player();
    let floor = game.floor();
    let tick = game.current_tick();

    if player.hp > player.max_hp {
        bail!("tick {tick}: player hp {} above max {}", player.hp, player.max_hp);
    }
    if player.inventory.len() > INVENTORY_CAPACITY {
        bail!("tick {tick}: inventory holds {} items", player.inventory.len());
    }
    if game.turn_state() == TurnState::NewFloor {
        return Ok(());
    }
    if !floor.map.is_walkable(player.pos) {
        bail!("tick {tick}: player inside a wall at {:?}", player.pos);
    }

    let mut taken = BTreeSet::from([player.pos]);
    for enemy in floor.enemies.values() {
        for cell in enemy.footprint().cells() {
            if !floor.map.is_walkable(cell) {
                bail!("tick {tick}: {:?} inside a wall at {cell:?}", enemy.kind);
            }
            if !taken.insert(cell) {
                bail!("tick {tick}: two occupants share {cell:?}");
            }
        }
    }
    Ok(())
}

fn run(seed: u64, ticks: u64) -> Result<Game> {
    let mut game = Game::new(seed, &GameConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    while game.current_tick() < ticks {
        let inputs = match game.turn_state() {
            TurnState::GameOver => vec![InputEvent::Restart],
            state if state.accepts_input() => vec![random_input(&mut rng, &game)],
            _ => Vec::new(),
        };
        let accepted = game.tick_with_inputs(&inputs);
        debug!(
            tick = game.current_tick(),
            accepted = accepted.len(),
            state = ?game.turn_state(),
            "tick"
        );
        check_invariants(&game)?;
    }
    Ok(game)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    println!(
        "Starting fuzz harness on {} seed(s) from {} for {} ticks each...",
        args.runs, args.seed, args.ticks
    );
    for seed in args.seed..args.seed.saturating_add(args.runs) {
        let game = run(seed, args.ticks)
            .with_context(|| format!("invariant broken on seed {seed}"))?;
        info!(
            seed,
            floor = game.floor_index(),
            score = game.score(),
            high_score = game.high_score(),
            hash = %format!("0x{:016x}", game.snapshot_hash()),
            "run survived"
        );
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
