//! Draws a presentation snapshot. Reads nothing but the snapshot and the
//! asset registry.

use crawl_core::{Map, Pos, Snapshot, TileHint, TileKind, TurnState};
use macroquad::prelude::*;

use crate::assets::registry;
use crate::game_layout::{FrameLayout, MapGeometry, PanelRect};
use crate::ui_text::{inventory_label, state_hint, stats_line};

const FLOOR_COLOR: Color = Color { r: 0.16, g: 0.16, b: 0.18, a: 1.0 };
const WALL_COLOR: Color = Color { r: 0.35, g: 0.3, b: 0.26, a: 1.0 };
const PATH_COLOR: Color = Color { r: 0.3, g: 0.5, b: 0.9, a: 0.35 };
const MOVE_HINT: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 0.12 };
const ATTACK_HINT: Color = Color { r: 1.0, g: 0.2, b: 0.2, a: 0.3 };
const THROW_HINT: Color = Color { r: 1.0, g: 0.85, b: 0.2, a: 0.2 };
const FLASH_COLOR: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 0.7 };
const OVERLAY_COLOR: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.7 };
const HP_BAR_BACK: Color = Color { r: 0.3, g: 0.0, b: 0.0, a: 1.0 };
const HP_BAR_FRONT: Color = Color { r: 0.1, g: 0.85, b: 0.2, a: 1.0 };

pub struct FrameText<'a> {
    pub message: Option<String>,
    pub game_over: Option<&'a [String]>,
}

pub fn draw_frame(
    snapshot: &Snapshot,
    layout: &FrameLayout,
    geometry: &MapGeometry,
    text: &FrameText<'_>,
    tile_size: f32,
) {
    draw_tiles(&snapshot.map, geometry);
    draw_hints(snapshot, geometry);
    draw_path(&snapshot.pending_path, geometry);
    draw_entities(snapshot, geometry, tile_size);
    draw_status(snapshot, layout.ui, text.message.as_deref());

    if snapshot.turn_state == TurnState::ScreenFlash {
        draw_rectangle(layout.map.x, layout.map.y, layout.map.width, layout.map.height, FLASH_COLOR);
    }
    if let Some(lines) = text.game_over {
        draw_game_over(lines, layout.map);
    }
}

fn draw_tiles(map: &Map, geometry: &MapGeometry) {
    for y in 0..map.height as i32 {
        for x in 0..map.width as i32 {
            let pos = Pos { y, x };
            let color = match map.tile_at(pos) {
                TileKind::Floor => FLOOR_COLOR,
                TileKind::Wall => WALL_COLOR,
            };
            fill_tile(geometry, pos, color);
        }
    }
}

fn draw_hints(snapshot: &Snapshot, geometry: &MapGeometry) {
    for &(pos, hint) in &snapshot.hints {
        fill_tile(geometry, pos, hint_color(hint));
    }
}

fn draw_path(path: &[Pos], geometry: &MapGeometry) {
    for &pos in path {
        fill_tile(geometry, pos, PATH_COLOR);
    }
}

fn draw_entities(snapshot: &Snapshot, geometry: &MapGeometry, tile_size: f32) {
    if let Some(stairs) = snapshot.stairs {
        draw_glyph(geometry, stairs, 1, snapshot.stairs_asset);
    }
    for item in &snapshot.items {
        draw_glyph(geometry, item.pos, 1, item.asset);
    }
    for enemy in &snapshot.enemies {
        draw_glyph(geometry, enemy.pos, enemy.size, enemy.asset);
        draw_hp_bar(geometry, enemy.pos, enemy.size, hp_fraction(enemy.hp, enemy.max_hp));
    }
    draw_glyph(geometry, snapshot.player.pos, 1, snapshot.player.asset);

    for projectile in &snapshot.projectiles {
        let (x, y) = world_to_screen(geometry, tile_size, projectile.x, projectile.y);
        let style = registry().style(projectile.asset);
        draw_circle(x, y, geometry.cell * 0.15, style.color);
    }
}

fn draw_status(snapshot: &Snapshot, panel: PanelRect, message: Option<&str>) {
    draw_rectangle(panel.x, panel.y, panel.width, panel.height, BLACK);
    let left = panel.x + 10.0;
    draw_text(&stats_line(snapshot), left, panel.y + 20.0, 20.0, WHITE);

    let mut slot_x = left;
    for (slot, &kind) in snapshot.player.inventory.iter().enumerate() {
        let color = if snapshot.player.pending_throw == Some(slot) { YELLOW } else { LIGHTGRAY };
        let label = inventory_label(slot, kind);
        draw_text(&label, slot_x, panel.y + 42.0, 18.0, color);
        slot_x += measure_text(&label, None, 18, 1.0).width + 16.0;
    }

    let hint = state_hint(snapshot.turn_state);
    let line = message.unwrap_or(hint);
    draw_text(line, panel.x + panel.width * 0.55, panel.y + 42.0, 18.0, GRAY);
}

fn draw_game_over(lines: &[String], panel: PanelRect) {
    draw_rectangle(panel.x, panel.y, panel.width, panel.height, OVERLAY_COLOR);
    let mut y = panel.y + panel.height * 0.3;
    for (index, line) in lines.iter().enumerate() {
        let size = if index == 0 { 64.0 } else { 24.0 };
        let width = measure_text(line, None, size as u16, 1.0).width;
        let color = if index == 0 { RED } else { WHITE };
        draw_text(line, panel.x + (panel.width - width) / 2.0, y, size, color);
        y += size + 8.0;
    }
}

fn fill_tile(geometry: &MapGeometry, pos: Pos, color: Color) {
    let (x, y) = geometry.tile_origin(pos);
    draw_rectangle(x, y, geometry.cell, geometry.cell, color);
}

fn draw_glyph(geometry: &MapGeometry, pos: Pos, size: i32, asset: &str) {
    let style = registry().style(asset);
    let (x, y) = geometry.tile_origin(pos);
    let extent = geometry.cell * size as f32;
    let font_size = extent * 0.8;
    let dims = measure_text(style.glyph, None, font_size as u16, 1.0);
    draw_text(
        style.glyph,
        x + (extent - dims.width) / 2.0,
        y + (extent + dims.offset_y) / 2.0,
        font_size,
        style.color,
    );
}

fn draw_hp_bar(geometry: &MapGeometry, pos: Pos, size: i32, fraction: f32) {
    let (x, y) = geometry.tile_origin(pos);
    let width = geometry.cell * size as f32;
    let height = (geometry.cell * 0.08).max(2.0);
    draw_rectangle(x, y, width, height, HP_BAR_BACK);
    draw_rectangle(x, y, width * fraction, height, HP_BAR_FRONT);
}

fn hint_color(hint: TileHint) -> Color {
    match hint {
        TileHint::Move => MOVE_HINT,
        TileHint::Attack => ATTACK_HINT,
        TileHint::ThrowRange => THROW_HINT,
    }
}

fn hp_fraction(hp: i32, max_hp: i32) -> f32 {
    if max_hp <= 0 {
        return 0.0;
    }
    (hp as f32 / max_hp as f32).clamp(0.0, 1.0)
}

/// Projectiles fly in length units; the map is drawn at `geometry.cell`
/// pixels per `tile_size` units.
fn world_to_screen(geometry: &MapGeometry, tile_size: f32, x: f64, y: f64) -> (f32, f32) {
    let scale = geometry.cell / tile_size;
    (geometry.origin_x + x as f32 * scale, geometry.origin_y + y as f32 * scale)
}
