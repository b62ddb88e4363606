use std::env;
use std::io;
use std::sync::OnceLock;

use app::app_loop::{AppMode, AppState};
use app::high_score_file::HighScoreFile;
use app::seed::{generate_runtime_seed, resolve_seed_from_args};
use app::settings_file::{Settings, settings_path};
use app::{format_seed, journal_file};
use crawl_core::{Game, MemoryScoreStore, RandomFloorGenerator, ScoreStore, TurnState};
use macroquad::prelude::*;
use taffy::TaffyTree;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::frame_input::capture_frame_input;
use crate::game_layout::{FrameLayout, MapGeometry, compute_frame_layout, setup_layout};
use crate::ui_render::{FrameText, draw_frame};
use crate::ui_text::{game_over_lines, latest_message};

mod assets;
mod frame_input;
mod game_layout;
mod ui_render;
mod ui_text;
mod window_config;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| Settings::load_or_default(settings_path().as_deref()))
}

fn init_tracing() {
    // Ignored when a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn window_conf() -> Conf {
    init_tracing();
    window_config::build_window_conf(&settings().game)
}

fn score_store() -> Box<dyn ScoreStore> {
    match HighScoreFile::get_default_path() {
        Some(path) => Box::new(HighScoreFile::new(path)),
        None => {
            warn!("no data directory; high scores last for this session only");
            Box::new(MemoryScoreStore::default())
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let seed = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice.value(),
        Err(err) => {
            error!(%err, "invalid command line");
            return;
        }
    };
    let settings = settings();
    let config = &settings.game;
    info!(seed = %format_seed(seed), tick_hz = settings.window.tick_hz, "starting run");

    let generator = Box::new(RandomFloorGenerator::new(seed, config));
    let mut game = Game::with_collaborators(seed, config, generator, score_store());
    let mut app = AppState::new(&game, settings.window.tick_hz);

    let mut taffy = TaffyTree::new();
    let nodes = match setup_layout(&mut taffy) {
        Ok(nodes) => Some(nodes),
        Err(err) => {
            warn!(%err, "layout engine unavailable, using the fixed split");
            None
        }
    };

    while app.mode == AppMode::Running {
        let (width, height) = (screen_width(), screen_height());
        let layout = match &nodes {
            Some(nodes) => compute_frame_layout(&mut taffy, nodes, width, height)
                .unwrap_or_else(|_| FrameLayout::fallback(width, height)),
            None => FrameLayout::fallback(width, height),
        };
        let map = &game.floor().map;
        let geometry = MapGeometry::fit(layout.map, map.width, map.height);

        let frame = capture_frame_input(&geometry);
        app.apply_frame(&mut game, &frame);
        app.advance(&mut game, f64::from(get_frame_time()));

        let snapshot = game.snapshot();
        let game_over = (snapshot.turn_state == TurnState::GameOver)
            .then(|| game_over_lines(&snapshot, seed, game.snapshot_hash()));
        let text = FrameText { message: latest_message(game.log()), game_over: game_over.as_deref() };

        clear_background(BLACK);
        draw_frame(&snapshot, &layout, &geometry, &text, config.tile_size as f32);
        next_frame().await;
    }

    let Some(path) = journal_file::get_default_path() else {
        return;
    };
    match journal_file::write_atomic(&app.journal, &path) {
        Ok(()) => info!(path = %path.display(), inputs = app.journal.inputs.len(), "journal saved"),
        Err(err) => warn!(path = %path.display(), %err, "journal not saved"),
    }
}
