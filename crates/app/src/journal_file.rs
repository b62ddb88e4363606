//! The last run's input journal, kept on disk so it can be replayed with
//! `crawl-replay`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crawl_core::InputJournal;
use directories::ProjectDirs;

use crate::APP_NAME;

pub fn get_default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().join("last_run.json"))
}

pub fn write_atomic(journal: &InputJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = journal.to_json().map_err(io::Error::other)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn load(path: &Path) -> io::Result<InputJournal> {
    let content = fs::read_to_string(path)?;
    InputJournal::from_json(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
