use std::collections::BTreeSet;

use crawl_core::content::INVENTORY_CAPACITY;
use crawl_core::{Game, GameConfig, InputEvent, Pos, TurnState};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_input(rng: &mut ChaCha8Rng, game: &Game) -> InputEvent {
    let map = &game.floor().map;
    match choose(rng, &[0, 1, 1, 1, 2]) {
        0 => InputEvent::SelectSlot { slot: rng.next_u64() as usize % 6 },
        1 if !game.floor().enemies.is_empty() => {
            let targets: Vec<Pos> = game.floor().enemies.values().map(|enemy| enemy.pos).collect();
            InputEvent::SelectTile { pos: choose(rng, &targets) }
        }
        _ => {
            // Occasionally one tile past the edge to exercise rejection.
            let x = (rng.next_u64() % (map.width as u64 + 1)) as i32;
            let y = (rng.next_u64() % (map.height as u64 + 1)) as i32;
            InputEvent::SelectTile { pos: Pos { y, x } }
        }
    }
}

fn check_invariants(game: &Game, seed: u64) -> Result<(), String> {
    let player = game.player();
    let floor = game.floor();
    if player.hp > player.max_hp {
        return Err(format!("player hp above max on seed {seed}"));
    }
    if player.inventory.len() > INVENTORY_CAPACITY {
        return Err(format!("inventory overflow on seed {seed}"));
    }
    if game.turn_state() != TurnState::NewFloor && !floor.map.is_walkable(player.pos) {
        return Err(format!("player inside a wall at {:?} on seed {seed}", player.pos));
    }

    let mut taken = BTreeSet::from([player.pos]);
    for enemy in floor.enemies.values() {
        if enemy.hp <= 0 {
            return Err(format!("dead {:?} left on the floor on seed {seed}", enemy.kind));
        }
        for cell in enemy.footprint().cells() {
            if !floor.map.is_walkable(cell) {
                return Err(format!("{:?} inside a wall at {cell:?} on seed {seed}", enemy.kind));
            }
            if !taken.insert(cell) {
                return Err(format!("two occupants share {cell:?} on seed {seed}"));
            }
        }
    }
    Ok(())
}

fn run_fuzz_simulation(map_seed: u64, input_seed: u64, max_ticks: u64) -> Result<(), String> {
    let mut game = Game::new(map_seed, &GameConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(input_seed);

    while game.current_tick() < max_ticks {
        let inputs = match game.turn_state() {
            TurnState::GameOver => vec![InputEvent::Restart],
            state if state.accepts_input() => vec![random_input(&mut rng, &game)],
            _ => Vec::new(),
        };
        game.tick_with_inputs(&inputs);
        check_invariants(&game, map_seed)?;
    }
    Ok(())
}

#[test]
fn test_fuzz_game_simulation() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(20));
    let seeds = (any::<u64>(), any::<u64>());

    runner
        .run(&seeds, |(map_seed, input_seed)| {
            run_fuzz_simulation(map_seed, input_seed, 1_500).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("semantic fuzz simulation should preserve invariants");
}
