use super::support::*;

#[test]
fn clicking_distant_enemy_plans_route_to_its_side() {
    let floor = with_enemy(open_floor(10, 10, Pos { y: 1, x: 1 }), EnemyKind::Goblin, Pos { y: 5, x: 5 });
    let (mut game, _) = game_on(floor);

    assert_eq!(click(&mut game, 5, 5), Ok(InputOutcome::Applied));

    assert_eq!(game.turn_state(), TurnState::PlayerMoving);
    let path: Vec<Pos> = game.player().pending_path.iter().copied().collect();
    assert_eq!(path.len(), 3);
    let last = *path.last().expect("route");
    assert!(last.distance(Pos { y: 5, x: 5 }) <= 1.5);
    assert!(game.player().pending_target.is_some());
}

#[test]
fn clicking_boss_from_its_ring_attacks_immediately() {
    let floor =
        with_enemy(open_floor(12, 12, Pos { y: 4, x: 4 }), EnemyKind::StoneGolem, Pos { y: 5, x: 5 });
    let (mut game, _) = game_on(floor);
    let boss = enemy_ids(&game)[0];

    // Any tile of the footprint selects the boss.
    click(&mut game, 6, 6).expect("attack accepted");

    assert_eq!(game.floor.enemies[boss].hp, 300 - content::PLAYER_BASE_ATTACK);
    assert_eq!(game.turn_state(), TurnState::EnemyTurn);
    assert!(game.player().pending_path.is_empty());
}

#[test]
fn clicking_floor_walks_one_step_per_tick() {
    let (mut game, _) = game_on(open_floor(8, 8, Pos { y: 0, x: 0 }));

    click(&mut game, 3, 0).expect("move accepted");
    assert_eq!(game.player().pending_path.len(), 3);

    assert_eq!(game.tick(), TurnState::EnemyTurn);
    assert_eq!(game.player().pos, Pos { y: 0, x: 1 });
    assert_eq!(game.tick(), TurnState::PlayerMoving);
    game.tick();
    game.tick();
    game.tick();
    game.tick();
    assert_eq!(game.player().pos, Pos { y: 0, x: 3 });
    assert_eq!(game.tick(), TurnState::PlayerInput);
}

#[test]
fn clicking_own_tile_or_wall_changes_nothing() {
    let mut floor = open_floor(6, 6, Pos { y: 2, x: 2 });
    floor.map.set_tile(Pos { y: 0, x: 0 }, TileKind::Wall);
    let (mut game, _) = game_on(floor);
    let before = game.snapshot_hash();

    assert_eq!(click(&mut game, 2, 2), Ok(InputOutcome::NoEffect));
    assert_eq!(click(&mut game, 0, 0), Ok(InputOutcome::NoEffect));

    assert_eq!(game.turn_state(), TurnState::PlayerInput);
    assert_eq!(game.snapshot_hash(), before);
}

#[test]
fn unreachable_tile_leaves_player_waiting() {
    let mut floor = open_floor(7, 3, Pos { y: 1, x: 0 });
    for y in 0..3 {
        floor.map.set_tile(Pos { y, x: 3 }, TileKind::Wall);
    }
    let (mut game, _) = game_on(floor);

    assert_eq!(click(&mut game, 6, 1), Ok(InputOutcome::NoEffect));
    assert_eq!(game.turn_state(), TurnState::PlayerInput);
    assert!(game.log().contains(&LogEvent::NoPath { target: Pos { y: 1, x: 6 } }));
}

#[test]
fn out_of_bounds_click_is_rejected() {
    let (mut game, _) = game_on(open_floor(5, 5, Pos { y: 2, x: 2 }));
    let before = game.snapshot_hash();

    assert_eq!(click(&mut game, 5, 0), Err(GameError::OutOfBounds(Pos { y: 0, x: 5 })));
    assert_eq!(click(&mut game, -1, 2), Err(GameError::OutOfBounds(Pos { y: 2, x: -1 })));
    assert_eq!(game.snapshot_hash(), before);
}

#[test]
fn input_is_rejected_while_the_world_moves() {
    let (mut game, _) = game_on(open_floor(8, 8, Pos { y: 0, x: 0 }));
    click(&mut game, 4, 0).expect("move accepted");

    assert_eq!(
        click(&mut game, 0, 4),
        Err(GameError::NotAcceptingInput(TurnState::PlayerMoving))
    );
    game.tick();
    assert_eq!(
        game.handle_input(InputEvent::SelectSlot { slot: 0 }),
        Err(GameError::NotAcceptingInput(TurnState::EnemyTurn))
    );
}

#[test]
fn step_into_newly_occupied_tile_attacks_instead() {
    let floor = with_enemy(open_floor(10, 3, Pos { y: 1, x: 0 }), EnemyKind::Goblin, Pos { y: 1, x: 9 });
    let (mut game, _) = game_on(floor);
    let goblin = enemy_ids(&game)[0];

    click(&mut game, 6, 1).expect("walk");
    let next = game.player().pending_path[0];
    game.floor.enemies[goblin].pos = next;
    assert_eq!(game.tick(), TurnState::EnemyTurn);

    assert_eq!(game.player().pos, Pos { y: 1, x: 0 });
    assert_eq!(game.floor.enemies[goblin].hp, 30 - content::PLAYER_BASE_ATTACK);
    assert!(game.player().pending_path.is_empty());
}

#[test]
fn walking_at_an_enemy_stops_beside_it_and_lets_it_answer() {
    let floor = with_enemy(open_floor(10, 3, Pos { y: 1, x: 5 }), EnemyKind::Orc, Pos { y: 1, x: 7 });
    let (mut game, _) = game_on(floor);
    let orc = enemy_ids(&game)[0];

    assert_eq!(click(&mut game, 7, 1), Ok(InputOutcome::Applied));
    assert_eq!(game.tick(), TurnState::EnemyTurn);
    assert!(game.player().pos.distance(Pos { y: 1, x: 7 }) <= 1.5);

    assert_eq!(game.tick(), TurnState::PlayerInput);
    assert_eq!(game.floor.enemies[orc].hp, game.floor.enemies[orc].max_hp);
    assert_eq!(game.player().hp, content::PLAYER_BASE_HP - game.floor.enemies[orc].attack);
    assert!(game.player().pending_target.is_none());

    // The strike is the next input and costs a turn of its own.
    click(&mut game, 7, 1).expect("strike");
    assert_eq!(game.turn_state(), TurnState::EnemyTurn);
    assert_eq!(game.floor.enemies[orc].hp, 50 - content::PLAYER_BASE_ATTACK);
}
