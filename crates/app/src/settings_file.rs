//! Optional TOML settings: a `[game]` table deserialized straight into
//! [`GameConfig`] and a `[window]` table for the front-end.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crawl_core::GameConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::APP_NAME;

/// Environment variable naming an alternative settings file.
pub const SETTINGS_ENV: &str = "CRAWL_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameConfig,
    pub window: WindowSettings,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Simulation ticks per second.
    pub tick_hz: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self { tick_hz: 60 }
    }
}

impl Settings {
    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Never fails: no path or no file gives defaults, a broken file gives
    /// defaults and a warning.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => {
                debug!(path = %path.display(), "settings loaded");
                settings
            }
            Err(SettingsError::Io(err)) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring settings file");
                Self::default()
            }
        }
    }
}

pub fn resolve_settings_path(env_override: Option<OsString>) -> Option<PathBuf> {
    match env_override {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join("settings.toml")),
    }
}

pub fn settings_path() -> Option<PathBuf> {
    resolve_settings_path(env::var_os(SETTINGS_ENV))
}
