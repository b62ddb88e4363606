//! Keyboard and mouse collection for one rendered frame.

use app::app_loop::FrameCommands;
use macroquad::prelude::{KeyCode, MouseButton, is_key_pressed, is_mouse_button_pressed, mouse_position};

use crate::game_layout::MapGeometry;

const WATCHED_KEYS: [KeyCode; 8] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::R,
    KeyCode::Enter,
    KeyCode::Escape,
];

pub fn capture_frame_input(geometry: &MapGeometry) -> FrameCommands {
    let keys_pressed = WATCHED_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect();
    let clicked_tile = if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        geometry.tile_at(x, y)
    } else {
        None
    };
    FrameCommands { keys_pressed, clicked_tile }
}
