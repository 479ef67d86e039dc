//! Score Store: where finished rounds are recorded
//!
//! Backends:
//! - `MemoryScoreStore`: in-process list (tests, headless runs)
//! - `JsonFileScoreStore`: JSON list on disk (native)
//! - `LocalStorageScoreStore`: JSON list under a LocalStorage key (wasm32)
//!
//! Load failures are logged and treated as an empty list.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileScoreStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageScoreStore;

use serde::Serialize;

use crate::highscores::{HighScores, ScoreRecord};

/// Storage key / file stem shared by the backends
pub const SCORES_KEY: &str = "PlayerScores";

/// Serialize `value` and hand the JSON to `write`.
///
/// Failures at either step are logged as warnings; returns true only when the
/// write went through.
pub fn persist_json<T, E, W>(what: &str, value: &T, write: W) -> bool
where
    T: Serialize + ?Sized,
    E: std::fmt::Debug,
    W: FnOnce(&str) -> Result<(), E>,
{
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to serialize {}: {}", what, e);
            return false;
        }
    };
    match write(&json) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to save {}: {:?}", what, e);
            false
        }
    }
}

/// Persistent list of (player name, score) records
pub trait ScoreStore {
    /// Best score ever recorded, 0 if none
    fn max_score(&self) -> u64;
    /// Record a finished round
    fn append_score(&mut self, player_name: &str, score: u64);
    /// Records in insertion order; callers sort for display
    fn list_scores(&self) -> Vec<ScoreRecord>;
}

/// Scores held in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    scores: HighScores,
}

impl MemoryScoreStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn max_score(&self) -> u64 {
        self.scores.max_score()
    }

    fn append_score(&mut self, player_name: &str, score: u64) {
        self.scores.append(player_name, score);
    }

    fn list_scores(&self) -> Vec<ScoreRecord> {
        self.scores.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryScoreStore::new();
        assert_eq!(store.max_score(), 0);

        store.append_score("ana", 5);
        store.append_score("bo", 9);
        store.append_score("ana", 3);

        assert_eq!(store.max_score(), 9);
        let names: Vec<_> = store
            .list_scores()
            .into_iter()
            .map(|r| r.player_name)
            .collect();
        assert_eq!(names, ["ana", "bo", "ana"]);
    }

    #[test]
    fn test_persist_json_reports_write_failure() {
        let mut written = String::new();
        assert!(persist_json("scores", &[1, 2], |json: &str| {
            written = json.to_string();
            Ok::<(), String>(())
        }));
        assert_eq!(written, "[1,2]");

        let failed = persist_json("scores", &[1, 2], |_: &str| Err("quota exceeded"));
        assert!(!failed);
    }

    #[test]
    fn test_persist_json_reports_serialize_failure() {
        use std::collections::HashMap;

        // Non-string map keys can't be JSON object keys
        let mut bad = HashMap::new();
        bad.insert((1, 2), 3);
        let mut called = false;
        let ok = persist_json("settings", &bad, |_: &str| {
            called = true;
            Ok::<(), String>(())
        });
        assert!(!ok);
        assert!(!called);
    }

    #[test]
    fn test_store_usable_as_trait_object() {
        let mut store: Box<dyn ScoreStore> = Box::new(MemoryScoreStore::new());
        store.append_score("cy", 1);
        assert_eq!(store.list_scores().len(), 1);
    }
}
