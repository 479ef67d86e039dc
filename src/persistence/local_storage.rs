//! LocalStorage backend for wasm32 builds

use super::{SCORES_KEY, ScoreStore, persist_json};
use crate::highscores::{HighScores, ScoreRecord};

/// Scores serialized as a JSON list under `SCORES_KEY`
#[derive(Debug, Clone, Default)]
pub struct LocalStorageScoreStore {
    scores: HighScores,
}

impl LocalStorageScoreStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }

    /// Load scores from LocalStorage
    pub fn load() -> Self {
        if let Some(storage) = Self::storage() {
            if let Ok(Some(json)) = storage.get_item(SCORES_KEY) {
                match serde_json::from_str::<HighScores>(&json) {
                    Ok(scores) => {
                        log::info!("Loaded {} scores", scores.len());
                        return Self { scores };
                    }
                    Err(e) => log::warn!("Ignoring corrupt scores: {}", e),
                }
            }
        }

        log::info!("No scores found, starting fresh");
        Self::default()
    }

    fn save(&self) {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, scores not saved");
            return;
        };
        if persist_json("scores", &self.scores, |json| storage.set_item(SCORES_KEY, json)) {
            log::info!("Scores saved ({} entries)", self.scores.len());
        }
    }
}

impl ScoreStore for LocalStorageScoreStore {
    fn max_score(&self) -> u64 {
        self.scores.max_score()
    }

    fn append_score(&mut self, player_name: &str, score: u64) {
        self.scores.append(player_name, score);
        self.save();
    }

    fn list_scores(&self) -> Vec<ScoreRecord> {
        self.scores.entries.clone()
    }
}
