//! Round state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::BUBBLE_DIAMETER;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Engine created, no round configured yet
    #[default]
    NotStarted,
    /// Bubbles laid out, waiting for the pre-round countdown to finish
    PreRound,
    /// Clock running, pops score
    Active,
    /// Round over (time ran out or ended early)
    Finished,
}

/// Bubble color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BubbleColor {
    Red,
    Pink,
    Green,
    Blue,
    Black,
}

impl BubbleColor {
    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            BubbleColor::Red => "Red",
            BubbleColor::Pink => "Pink",
            BubbleColor::Green => "Green",
            BubbleColor::Blue => "Blue",
            BubbleColor::Black => "Black",
        }
    }
}

/// Opaque bubble identifier, unique within one engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BubbleId(pub u32);

/// A poppable bubble
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bubble {
    pub id: BubbleId,
    /// Center position in playfield coordinates
    pub pos: Vec2,
    pub diameter: f32,
    pub color: BubbleColor,
    /// Base points awarded when popped
    pub points: u32,
}

impl Bubble {
    /// Create a bubble of the standard diameter
    pub fn new(id: BubbleId, pos: Vec2, color: BubbleColor, points: u32) -> Self {
        Self {
            id,
            pos,
            diameter: BUBBLE_DIAMETER,
            color,
            points,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }
}

/// Playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    /// Create a playfield of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Parameters for a single round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub playfield: Playfield,
    /// Maximum number of bubbles on screen at once
    pub max_bubbles: usize,
    pub duration_secs: u32,
}

impl RoundConfig {
    /// Bundle round parameters
    pub fn new(playfield: Playfield, max_bubbles: usize, duration_secs: u32) -> Self {
        Self {
            playfield,
            max_bubbles,
            duration_secs,
        }
    }
}

/// Change notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    PhaseChanged { from: RoundPhase, to: RoundPhase },
    BubbleSpawned { id: BubbleId },
    /// Placement ran out of attempts; round continues below capacity
    SpawnFailed,
    BubblePopped {
        id: BubbleId,
        color: BubbleColor,
        points: u32,
        bonus: bool,
    },
    TimeTick { remaining: u32 },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    /// Wrap a seed
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Fresh RNG positioned at the start of the seed's stream
    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}
