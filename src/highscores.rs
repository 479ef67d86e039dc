//! High score list
//!
//! Scores are stored append-only; ranking happens on read and the
//! leaderboard shows the top 10.

use serde::{Deserialize, Serialize};

use crate::consts::LEADERBOARD_SIZE;

/// A single finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player_name: String,
    pub score: u64,
}

impl ScoreRecord {
    /// Create a record for one finished round
    pub fn new(player_name: impl Into<String>, score: u64) -> Self {
        Self {
            player_name: player_name.into(),
            score,
        }
    }
}

/// All recorded scores, in the order they were added
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct HighScores {
    pub entries: Vec<ScoreRecord>,
}

impl HighScores {
    /// Create empty score list
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a score at the end of the list
    pub fn append(&mut self, player_name: impl Into<String>, score: u64) {
        self.entries.push(ScoreRecord::new(player_name, score));
    }

    /// Check if no scores have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded scores
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Best score recorded, 0 if none
    pub fn max_score(&self) -> u64 {
        self.entries.iter().map(|e| e.score).max().unwrap_or(0)
    }

    /// All records sorted by score, highest first. Ties keep insertion order.
    pub fn ranked(&self) -> Vec<ScoreRecord> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Best `n` records, highest first
    pub fn top(&self, n: usize) -> Vec<ScoreRecord> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// What the high score screen shows
    pub fn leaderboard(&self) -> Vec<ScoreRecord> {
        self.top(LEADERBOARD_SIZE)
    }

    /// 1-indexed position a score would take on the leaderboard, if any
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        let rank = self.entries.iter().filter(|e| e.score >= score).count() + 1;
        (rank <= LEADERBOARD_SIZE).then_some(rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_max_is_zero() {
        let scores = HighScores::new();
        assert!(scores.is_empty());
        assert_eq!(scores.max_score(), 0);
        assert!(scores.leaderboard().is_empty());
    }

    #[test]
    fn test_ranked_descending_stable() {
        let mut scores = HighScores::new();
        scores.append("a", 10);
        scores.append("b", 30);
        scores.append("c", 10);
        scores.append("d", 20);

        let names: Vec<_> = scores
            .ranked()
            .into_iter()
            .map(|r| r.player_name)
            .collect();
        assert_eq!(names, ["b", "d", "a", "c"]);
        assert_eq!(scores.max_score(), 30);
        // Storage order is untouched
        assert_eq!(scores.entries[0].player_name, "a");
    }

    #[test]
    fn test_leaderboard_truncates_to_ten() {
        let mut scores = HighScores::new();
        for i in 0..15 {
            scores.append(format!("p{i}"), i);
        }
        let board = scores.leaderboard();
        assert_eq!(board.len(), 10);
        assert_eq!(board[0].score, 14);
        assert_eq!(board[9].score, 5);
        assert_eq!(scores.len(), 15);
    }

    #[test]
    fn test_potential_rank() {
        let mut scores = HighScores::new();
        assert_eq!(scores.potential_rank(0), Some(1));
        for i in 1..=10 {
            scores.append("x", i * 10);
        }
        assert_eq!(scores.potential_rank(1000), Some(1));
        assert_eq!(scores.potential_rank(95), Some(2));
        assert_eq!(scores.potential_rank(5), None);
    }

    #[test]
    fn test_json_is_plain_list() {
        let mut scores = HighScores::new();
        scores.append("ana", 12);
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"[{"player_name":"ana","score":12}]"#);
        let back: HighScores = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scores);
    }
}
