use crawl_core::mapgen::{EnemySpawn, FloorRequest, GeneratedFloor, ItemSpawn};
use crawl_core::{
    EnemyKind, Game, GameConfig, InputEvent, InputOutcome, ItemKind, LogEvent, Map,
    MemoryScoreStore, Pos, ScoreStore, TurnState,
};

fn scripted(floor: GeneratedFloor, scores: &MemoryScoreStore) -> Game {
    let generator = move |_: &FloorRequest| floor.clone();
    let mut game = Game::with_collaborators(
        11,
        &GameConfig::default(),
        Box::new(generator),
        Box::new(scores.clone()),
    );
    assert_eq!(game.tick(), TurnState::PlayerInput);
    game
}

fn select(game: &mut Game, x: i32, y: i32) -> InputOutcome {
    game.handle_input(InputEvent::SelectTile { pos: Pos { y, x } }).expect("input accepted")
}

fn settle(game: &mut Game) -> TurnState {
    for _ in 0..500 {
        let state = game.tick();
        if state.accepts_input() {
            return state;
        }
    }
    panic!("simulation never settled");
}

fn floor_with(player: Pos, enemies: &[(EnemyKind, Pos)]) -> GeneratedFloor {
    let mut floor = GeneratedFloor::bare(Map::open(10, 10), player, Pos { y: 9, x: 9 });
    floor.enemies = enemies.iter().map(|&(kind, pos)| EnemySpawn { kind, pos }).collect();
    floor
}

#[test]
fn distant_enemy_selection_walks_to_an_adjacent_tile() {
    let floor = floor_with(Pos { y: 0, x: 0 }, &[(EnemyKind::Goblin, Pos { y: 5, x: 5 })]);
    let mut game = scripted(floor, &MemoryScoreStore::default());

    assert_eq!(select(&mut game, 5, 5), InputOutcome::Applied);

    assert_eq!(game.turn_state(), TurnState::PlayerMoving);
    let path = &game.player().pending_path;
    assert!(!path.is_empty());
    let last = *path.back().expect("non-empty path");
    assert_ne!(last, Pos { y: 5, x: 5 });
    assert_eq!(last.chebyshev(Pos { y: 5, x: 5 }), 1);
}

#[test]
fn boss_next_to_player_is_attacked_without_moving() {
    let floor = floor_with(Pos { y: 5, x: 4 }, &[(EnemyKind::StoneGolem, Pos { y: 5, x: 5 })]);
    let mut game = scripted(floor, &MemoryScoreStore::default());

    select(&mut game, 5, 5);

    assert_eq!(game.turn_state(), TurnState::EnemyTurn);
    assert_eq!(game.player().pos, Pos { y: 5, x: 4 });
    let boss = game.floor().enemies.values().next().expect("boss alive");
    assert_eq!(boss.hp, boss.max_hp - game.player().attack);
}

#[test]
fn death_persists_a_new_record_exactly_once() {
    let floor = floor_with(
        Pos { y: 5, x: 4 },
        &[(EnemyKind::Goblin, Pos { y: 5, x: 3 }), (EnemyKind::StoneGolem, Pos { y: 5, x: 5 })],
    );
    let scores = MemoryScoreStore::default();
    let mut game = scripted(floor, &scores);

    // Two swings kill the goblin, then the golem finishes the player off.
    select(&mut game, 3, 5);
    settle(&mut game);
    select(&mut game, 3, 5);
    assert_eq!(game.score(), 50);
    let mut state = settle(&mut game);
    while state == TurnState::PlayerInput && game.player().is_alive() {
        select(&mut game, 5, 5);
        state = settle(&mut game);
    }
    assert_eq!(settle_into_game_over(&mut game), TurnState::GameOver);

    for _ in 0..10 {
        game.tick();
    }
    assert_eq!(scores.saves(), 1);
    assert_eq!(scores.load(), 50);
    assert!(game.log().contains(&LogEvent::HighScoreSaved { score: 50 }));
}

fn settle_into_game_over(game: &mut Game) -> TurnState {
    if game.turn_state() == TurnState::GameOver {
        return TurnState::GameOver;
    }
    game.tick()
}

#[test]
fn bomb_consumes_one_slot_and_damages_everyone() {
    let mut floor = floor_with(
        Pos { y: 0, x: 0 },
        &[
            (EnemyKind::GoblinSlinger, Pos { y: 9, x: 9 }),
            (EnemyKind::Goblin, Pos { y: 9, x: 0 }),
            (EnemyKind::Orc, Pos { y: 0, x: 9 }),
        ],
    );
    floor.items = vec![
        ItemSpawn { kind: ItemKind::Bomb, pos: Pos { y: 0, x: 1 } },
        ItemSpawn { kind: ItemKind::Rock, pos: Pos { y: 1, x: 1 } },
    ];
    let mut game = scripted(floor, &MemoryScoreStore::default());

    select(&mut game, 1, 0);
    settle(&mut game);
    select(&mut game, 1, 1);
    settle(&mut game);
    assert_eq!(game.player().inventory, vec![ItemKind::Bomb, ItemKind::Rock]);

    let before: Vec<i32> = game.floor().enemies.values().map(|enemy| enemy.hp).collect();
    game.handle_input(InputEvent::SelectSlot { slot: 0 }).expect("bomb");
    let after: Vec<i32> = game.floor().enemies.values().map(|enemy| enemy.hp).collect();

    assert_eq!(game.player().inventory, vec![ItemKind::Rock]);
    assert_eq!(game.turn_state(), TurnState::ScreenFlash);
    let expected: Vec<i32> = before.iter().map(|hp| hp - 20).filter(|hp| *hp > 0).collect();
    assert_eq!(after, expected);
}
