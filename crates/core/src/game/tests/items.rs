use super::support::*;

fn select_slot(game: &mut Game, slot: usize) -> Result<InputOutcome, GameError> {
    game.handle_input(InputEvent::SelectSlot { slot })
}

#[test]
fn bomb_hits_every_enemy_and_pays_for_each_kill() {
    let floor = open_floor(10, 10, Pos { y: 0, x: 0 });
    let floor = with_enemy(floor, EnemyKind::Goblin, Pos { y: 5, x: 5 });
    let floor = with_enemy(floor, EnemyKind::Goblin, Pos { y: 7, x: 7 });
    let floor = with_enemy(floor, EnemyKind::Goblin, Pos { y: 2, x: 9 });
    let (mut game, _) = game_on(floor);
    let ids = enemy_ids(&game);
    for (&id, hp) in ids.iter().zip([15, 25, 5]) {
        game.floor.enemies[id].hp = hp;
    }
    game.player.inventory.push(ItemKind::Bomb);

    assert_eq!(select_slot(&mut game, 0), Ok(InputOutcome::Applied));

    assert_eq!(game.floor.enemies.len(), 1);
    assert_eq!(game.floor.enemies[ids[1]].hp, 5);
    assert_eq!(game.score(), 100);
    assert!(game.player().inventory.is_empty());
    assert_eq!(game.turn_state(), TurnState::ScreenFlash);

    for _ in 1..game.config().flash_ticks {
        assert_eq!(game.tick(), TurnState::ScreenFlash);
    }
    assert_eq!(game.tick(), TurnState::EnemyTurn);
}

#[test]
fn potion_at_full_health_is_kept() {
    let (mut game, _) = game_on(open_floor(5, 5, Pos { y: 2, x: 2 }));
    game.player.inventory.push(ItemKind::Potion);

    assert_eq!(select_slot(&mut game, 0), Ok(InputOutcome::NoEffect));
    assert_eq!(game.player().inventory, vec![ItemKind::Potion]);
    assert_eq!(game.turn_state(), TurnState::PlayerInput);
}

#[test]
fn potion_heals_and_ends_the_turn() {
    let (mut game, _) = game_on(open_floor(5, 5, Pos { y: 2, x: 2 }));
    game.player.inventory.extend([ItemKind::Rock, ItemKind::Potion]);
    game.player.hp = 50;

    select_slot(&mut game, 1).expect("drink");

    assert_eq!(game.player().hp, 50 + content::POTION_HEAL);
    assert_eq!(game.player().inventory, vec![ItemKind::Rock]);
    assert_eq!(game.turn_state(), TurnState::EnemyTurn);
}

#[test]
fn empty_slot_is_rejected() {
    let (mut game, _) = game_on(open_floor(5, 5, Pos { y: 2, x: 2 }));
    game.player.inventory.push(ItemKind::Rock);

    assert_eq!(select_slot(&mut game, 2), Err(GameError::EmptySlot(2)));
    assert_eq!(game.turn_state(), TurnState::PlayerInput);
}

#[test]
fn rock_kills_enemy_in_range() {
    let floor = with_enemy(open_floor(10, 10, Pos { y: 0, x: 0 }), EnemyKind::Goblin, Pos { y: 0, x: 3 });
    let (mut game, _) = game_on(floor);
    game.player.inventory.push(ItemKind::Rock);

    select_slot(&mut game, 0).expect("ready throw");
    assert_eq!(game.turn_state(), TurnState::Targeting);
    click(&mut game, 3, 0).expect("throw");

    assert!(game.floor.enemies.is_empty());
    assert_eq!(game.score(), 50);
    assert!(game.player().inventory.is_empty());
    assert_eq!(game.player().pending_throw, None);
    assert_eq!(game.turn_state(), TurnState::EnemyTurn);
}

#[test]
fn throw_out_of_range_is_cancelled_and_item_kept() {
    let floor = with_enemy(open_floor(10, 10, Pos { y: 0, x: 0 }), EnemyKind::Goblin, Pos { y: 0, x: 6 });
    let (mut game, _) = game_on(floor);
    game.player.inventory.push(ItemKind::Rock);

    select_slot(&mut game, 0).expect("ready throw");
    click(&mut game, 6, 0).expect("throw attempt");

    assert_eq!(game.turn_state(), TurnState::PlayerInput);
    assert_eq!(game.player().inventory, vec![ItemKind::Rock]);
    assert_eq!(game.floor.enemies.values().next().map(|enemy| enemy.hp), Some(30));
    assert_eq!(game.log().last(), Some(&LogEvent::ThrowCancelled));
}

#[test]
fn throw_at_empty_floor_is_cancelled() {
    let (mut game, _) = game_on(open_floor(10, 10, Pos { y: 0, x: 0 }));
    game.player.inventory.push(ItemKind::HolyGrenade);

    select_slot(&mut game, 0).expect("ready throw");
    click(&mut game, 1, 1).expect("throw attempt");

    assert_eq!(game.turn_state(), TurnState::PlayerInput);
    assert_eq!(game.player().inventory, vec![ItemKind::HolyGrenade]);
}

#[test]
fn holy_grenade_fells_the_boss() {
    let floor =
        with_enemy(open_floor(10, 10, Pos { y: 0, x: 0 }), EnemyKind::StoneGolem, Pos { y: 2, x: 2 });
    let (mut game, _) = game_on(floor);
    game.player.inventory.push(ItemKind::HolyGrenade);

    select_slot(&mut game, 0).expect("ready throw");
    click(&mut game, 2, 2).expect("throw");

    assert!(game.floor.enemies.is_empty());
    assert_eq!(game.bosses_defeated(), 1);
    assert_eq!(game.score(), 1_000);
    // 1000 XP crosses the 100, 150, 225 and 337 thresholds.
    assert_eq!(game.player().level, 5);
}

#[test]
fn walking_over_items_picks_them_up_until_full() {
    let floor = with_item(open_floor(6, 3, Pos { y: 0, x: 0 }), ItemKind::Rock, Pos { y: 0, x: 1 });
    let floor = with_item(floor, ItemKind::Potion, Pos { y: 0, x: 2 });
    let (mut game, _) = game_on(floor);
    game.player.inventory.extend([ItemKind::Bomb; 4]);

    click(&mut game, 1, 0).expect("step");
    run_until_input(&mut game);
    assert_eq!(game.player().inventory.len(), 5);
    assert_eq!(game.player().inventory[4], ItemKind::Rock);

    click(&mut game, 2, 0).expect("step");
    run_until_input(&mut game);
    assert_eq!(game.player().pos, Pos { y: 0, x: 2 });
    assert_eq!(game.floor.items.len(), 1);
}

#[test]
fn targeting_hints_cover_throw_range() {
    let (mut game, _) = game_on(open_floor(12, 12, Pos { y: 6, x: 6 }));
    game.player.inventory.push(ItemKind::Rock);
    select_slot(&mut game, 0).expect("ready throw");

    let hints = game.snapshot().hints;
    assert!(hints.iter().all(|(_, hint)| *hint == TileHint::ThrowRange));
    assert!(hints.iter().any(|(pos, _)| *pos == Pos { y: 6, x: 10 }));
    assert!(hints.iter().all(|(pos, _)| pos.distance(Pos { y: 6, x: 6 }) <= 4.0));
    // Lattice points within radius 4 of a point.
    assert_eq!(hints.len(), 49);
}
