//! Best score persisted as a single decimal number in the user data dir.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crawl_core::{ScoreStore, ScoreStoreError};
use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::APP_NAME;

const FILE_NAME: &str = "highscore.txt";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for HighScoreFile {
    /// A missing file is a fresh install. Anything unreadable counts as 0.
    fn load(&self) -> u64 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return 0,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "high score unreadable");
                return 0;
            }
        };
        match text.trim().parse::<u64>() {
            Ok(score) => score,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "high score file is corrupt");
                0
            }
        }
    }

    fn save(&mut self, score: u64) -> Result<(), ScoreStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("txt.tmp");
        fs::write(&tmp_path, format!("{score}\n"))?;
        fs::rename(&tmp_path, &self.path)?;
        debug!(score, path = %self.path.display(), "high score written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_zero() {
        let dir = tempdir().expect("tempdir");
        let store = HighScoreFile::new(dir.path().join("nothing.txt"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(FILE_NAME);
        let mut store = HighScoreFile::new(&path);

        store.save(4_250).expect("save");

        assert_eq!(store.load(), 4_250);
        assert_eq!(fs::read_to_string(&path).expect("read"), "4250\n");
        assert!(!path.with_extension("txt.tmp").exists());
    }

    #[test]
    fn corrupt_contents_read_as_zero() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "lots").expect("write");

        assert_eq!(HighScoreFile::new(path).load(), 0);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "  900 \r\n").expect("write");

        assert_eq!(HighScoreFile::new(path).load(), 900);
    }

    #[test]
    fn save_into_a_file_path_fails() {
        let dir = tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").expect("write");
        let mut store = HighScoreFile::new(blocker.join(FILE_NAME));

        assert!(matches!(store.save(1), Err(ScoreStoreError::Io(_))));
    }
}
