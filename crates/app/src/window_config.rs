//! Window configuration for the desktop app.

use app::APP_NAME;
use crawl_core::GameConfig;
use macroquad::window::Conf;

/// Height of the status strip under the map, in pixels.
pub const UI_PANEL_HEIGHT: f32 = 60.0;

/// One pixel per length unit: the map fills `tile_size` pixels per tile and
/// the status strip sits below it.
pub fn build_window_conf(config: &GameConfig) -> Conf {
    let width = config.tile_size * config.map_width as f64;
    let height = config.tile_size * config.map_height as f64 + f64::from(UI_PANEL_HEIGHT);
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: width.round() as i32,
        window_height: height.round() as i32,
        high_dpi: true,
        ..Default::default()
    }
}
