//! Text for the status strip, the message line and the game-over overlay.

use app::{format_seed, format_snapshot_hash};
use crawl_core::content::{enemy_name, item_name};
use crawl_core::{ItemKind, LogEvent, Snapshot, TurnState};

pub fn stats_line(snapshot: &Snapshot) -> String {
    let player = &snapshot.player;
    format!(
        "HP {}/{}  Lv {}  XP {}/{}  ATK {}  Score {}  Best {}  Floor {}",
        player.hp.max(0),
        player.max_hp,
        player.level,
        player.xp,
        player.xp_to_next,
        player.attack,
        snapshot.score,
        snapshot.high_score,
        snapshot.floor_index
    )
}

pub fn inventory_label(slot: usize, kind: ItemKind) -> String {
    format!("{}:{}", slot + 1, item_name(kind))
}

pub fn state_hint(state: TurnState) -> &'static str {
    match state {
        TurnState::Targeting => "Click a target in range, or anywhere else to cancel",
        TurnState::PlayerInput => "Click to move or attack, 1-5 to use an item",
        TurnState::GameOver => "R or Enter to restart",
        TurnState::NewFloor
        | TurnState::PlayerMoving
        | TurnState::EnemyTurn
        | TurnState::ProjectileAnimation
        | TurnState::ScreenFlash => "",
    }
}

/// Message-line text for an event, `None` for bookkeeping events that are
/// not worth showing.
pub fn event_log_line(event: &LogEvent) -> Option<String> {
    let line = match event {
        LogEvent::FloorEntered { floor, monster_house: true } => {
            format!("Floor {floor}. It's a monster house!")
        }
        LogEvent::FloorEntered { floor, .. } => format!("Floor {floor}."),
        LogEvent::NoPath { .. } => "Can't get there.".to_owned(),
        LogEvent::PlayerAttacked { damage, .. } => format!("You hit for {damage}."),
        LogEvent::EnemyKilled { kind, points } => {
            format!("{} defeated! +{points}", enemy_name(*kind))
        }
        LogEvent::LevelUp { level } => format!("Level up! You are now level {level}."),
        LogEvent::ItemPickedUp { kind } => format!("Picked up a {}.", item_name(*kind)),
        LogEvent::ItemUsed { kind } => format!("Used a {}.", item_name(*kind)),
        LogEvent::ThrowCancelled => "Throw cancelled.".to_owned(),
        LogEvent::ProjectileHit { damage } => format!("A stone hits you for {damage}!"),
        LogEvent::PlayerHurt { damage } => format!("You take {damage} damage!"),
        LogEvent::StairsRevealed => "The stairs appear!".to_owned(),
        LogEvent::GameOver { score } => format!("You died with {score} points."),
        LogEvent::HighScoreSaved { score } => format!("New high score: {score}!"),
        LogEvent::Restarted => "A new run begins.".to_owned(),
        LogEvent::PathPlanned { .. } | LogEvent::ProjectileFired { .. } => return None,
    };
    Some(line)
}

pub fn latest_message(log: &[LogEvent]) -> Option<String> {
    log.iter().rev().find_map(event_log_line)
}

pub fn game_over_lines(snapshot: &Snapshot, run_seed: u64, snapshot_hash: u64) -> Vec<String> {
    vec![
        "GAME OVER".to_owned(),
        format!("Score: {}", snapshot.score),
        format!("Best: {}", snapshot.high_score),
        format!("Reached floor {}", snapshot.floor_index),
        format!("Seed: {}", format_seed(run_seed)),
        format!("Snapshot: {}", format_snapshot_hash(snapshot_hash)),
        state_hint(TurnState::GameOver).to_owned(),
    ]
}
