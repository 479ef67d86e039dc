//! JSON file backend for native builds

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{ScoreStore, persist_json};
use crate::highscores::{HighScores, ScoreRecord};

/// Scores kept in a JSON file, rewritten on every append
#[derive(Debug, Clone)]
pub struct JsonFileScoreStore {
    path: PathBuf,
    scores: HighScores,
}

impl JsonFileScoreStore {
    /// Open the store at `path`. A missing or corrupt file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let scores = match Self::read(&path) {
            Ok(scores) => {
                log::info!("Loaded {} scores from {}", scores.len(), path.display());
                scores
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No scores at {}, starting fresh", path.display());
                HighScores::new()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable scores at {}: {}", path.display(), e);
                HighScores::new()
            }
        };
        Self { path, scores }
    }

    fn read(path: &Path) -> io::Result<HighScores> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn write(&self) -> bool {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("Failed to create {}: {}", parent.display(), e);
                return false;
            }
        }
        persist_json("scores", &self.scores, |json| fs::write(&self.path, json))
    }

    /// File the scores are written to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scores currently held
    pub fn scores(&self) -> &HighScores {
        &self.scores
    }
}

impl ScoreStore for JsonFileScoreStore {
    fn max_score(&self) -> u64 {
        self.scores.max_score()
    }

    fn append_score(&mut self, player_name: &str, score: u64) {
        self.scores.append(player_name, score);
        if self.write() {
            log::info!("Scores saved ({} entries)", self.scores.len());
        }
    }

    fn list_scores(&self) -> Vec<ScoreRecord> {
        self.scores.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("bubble-pop-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let store = JsonFileScoreStore::open(temp_path("missing.json"));
        assert_eq!(store.max_score(), 0);
        assert!(store.list_scores().is_empty());
    }

    #[test]
    fn test_append_persists_across_open() {
        let path = temp_path("persist.json");
        let _ = fs::remove_file(&path);

        let mut store = JsonFileScoreStore::open(&path);
        store.append_score("ana", 11);
        store.append_score("bo", 4);

        let reopened = JsonFileScoreStore::open(&path);
        assert_eq!(reopened.max_score(), 11);
        assert_eq!(reopened.list_scores(), store.list_scores());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_failed_write_keeps_scores_in_memory() {
        // Parent "directory" is a regular file, so nothing can be written
        let blocker = temp_path("blocker");
        fs::create_dir_all(blocker.parent().unwrap()).unwrap();
        fs::write(&blocker, "").unwrap();

        let mut store = JsonFileScoreStore::open(blocker.join("scores.json"));
        store.append_score("ana", 3);
        assert_eq!(store.max_score(), 3);
        assert!(!store.path().exists());

        let _ = fs::remove_file(&blocker);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let path = temp_path("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = JsonFileScoreStore::open(&path);
        assert!(store.scores().is_empty());

        let _ = fs::remove_file(&path);
    }
}
