//! Bubble Pop - a timed bubble-popping game
//!
//! Core modules:
//! - `sim`: Round simulation (bubble spawning, scoring, countdown, phases)
//! - `highscores`: Append-only score list and top-10 leaderboard
//! - `persistence`: Score Store capability and its backends
//! - `settings`: Player preferences used to configure a round

pub mod highscores;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use highscores::{HighScores, ScoreRecord};
pub use persistence::{MemoryScoreStore, ScoreStore};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Bubble diameter in playfield units
    pub const BUBBLE_DIAMETER: f32 = 50.0;
    /// Placement attempts before a spawn gives up
    pub const MAX_SPAWN_ATTEMPTS: u32 = 100;

    /// Multiplier applied when the popped color matches the previous pop
    pub const SAME_COLOR_BONUS: f64 = 1.5;
    /// Chance (percent) that a pop spawns a replacement bubble
    pub const REPLACEMENT_CHANCE_PERCENT: u32 = 80;

    /// Undrained round events kept before the oldest are dropped
    pub const MAX_QUEUED_EVENTS: usize = 256;

    /// Pre-round "3-2-1" countdown length in seconds
    pub const PRE_ROUND_SECS: u32 = 3;

    /// Settings slider limits
    pub const MAX_ROUND_SECS: u32 = 60;
    pub const MAX_BUBBLES: usize = 15;

    /// Number of entries shown on the leaderboard
    pub const LEADERBOARD_SIZE: usize = 10;
}
