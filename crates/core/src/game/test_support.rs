//! Shared fixtures for the `game` test suites.

use super::*;
use crate::mapgen::{EnemySpawn, FloorRequest, GeneratedFloor, ItemSpawn};
use crate::state::Map;

pub(super) fn open_floor(width: usize, height: usize, player_start: Pos) -> GeneratedFloor {
    GeneratedFloor::bare(
        Map::open(width, height),
        player_start,
        Pos { y: height as i32 - 1, x: width as i32 - 1 },
    )
}

pub(super) fn with_enemy(mut floor: GeneratedFloor, kind: EnemyKind, pos: Pos) -> GeneratedFloor {
    floor.enemies.push(EnemySpawn { kind, pos });
    floor
}

pub(super) fn with_item(mut floor: GeneratedFloor, kind: ItemKind, pos: Pos) -> GeneratedFloor {
    floor.items.push(ItemSpawn { kind, pos });
    floor
}

/// A game that gets `floor` on every descent, already ticked onto floor 1.
pub(super) fn game_on(floor: GeneratedFloor) -> (Game, MemoryScoreStore) {
    let scores = MemoryScoreStore::default();
    let generator = move |_: &FloorRequest| floor.clone();
    let mut game = Game::with_collaborators(
        7,
        &GameConfig::default(),
        Box::new(generator),
        Box::new(scores.clone()),
    );
    game.tick();
    assert_eq!(game.turn_state(), TurnState::PlayerInput);
    (game, scores)
}

pub(super) fn enemy_ids(game: &Game) -> Vec<EntityId> {
    game.floor.enemies.keys().collect()
}

pub(super) fn click(game: &mut Game, x: i32, y: i32) -> Result<InputOutcome, GameError> {
    game.handle_input(InputEvent::SelectTile { pos: Pos { y, x } })
}

/// Ticks until the game waits for input again, bounded so a stuck state
/// fails the test instead of hanging it.
pub(super) fn run_until_input(game: &mut Game) -> TurnState {
    for _ in 0..500 {
        let state = game.tick();
        if state.accepts_input() {
            return state;
        }
    }
    panic!("game never returned to an input state");
}
