//! Round simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! wall-clock concerns:
//! - Time advances only through `RoundEngine::tick`
//! - Seeded RNG only
//! - Stable bubble order (by spawn order / id)

pub mod countdown;
pub mod engine;
pub mod palette;
pub mod placement;
pub mod state;

pub use countdown::PreRoundCountdown;
pub use engine::RoundEngine;
pub use palette::{COLOR_TABLE, ColorEntry, pick_weighted, random_entry, total_weight};
pub use placement::{find_free_position, overlaps};
pub use state::{Bubble, BubbleColor, BubbleId, Playfield, RoundConfig, RoundEvent, RoundPhase};
