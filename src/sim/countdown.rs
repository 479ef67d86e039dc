//! Pre-round countdown
//!
//! Shown between laying out the bubbles and starting the clock.

use serde::{Deserialize, Serialize};

/// The "3-2-1" shown before a round starts.
///
/// Driven by the host at one tick per second; when it reports done the host
/// calls `RoundEngine::start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreRoundCountdown {
    remaining: u32,
}

impl PreRoundCountdown {
    /// Create a countdown of `secs` seconds
    pub fn new(secs: u32) -> Self {
        Self { remaining: secs }
    }

    /// Seconds still to show
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// True once the countdown has reached zero
    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Count down one second. Returns true only on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }
}

impl Default for PreRoundCountdown {
    fn default() -> Self {
        Self::new(crate::consts::PRE_ROUND_SECS)
    }
}
