//! Bubble placement: overlap test and bounded random retry
//!
//! Placement is trial-and-error, not a solver. A crowded playfield can
//! legitimately reject a spawn, which leaves the round below capacity.

use glam::Vec2;
use rand::Rng;

use super::state::{Bubble, Playfield};

/// True if a circle at `pos` with `radius` intersects any existing bubble.
/// Touching (distance equal to the radius sum) is not an overlap.
pub fn overlaps(pos: Vec2, radius: f32, existing: &[Bubble]) -> bool {
    existing
        .iter()
        .any(|b| pos.distance(b.pos) < b.radius() + radius)
}

/// Candidate range for one axis: `[diameter, extent - diameter)`, or `None`
/// if the playfield is too small (or not finite) to sample from.
fn axis_range(extent: f32, diameter: f32) -> Option<std::ops::Range<f32>> {
    let (lo, hi) = (diameter, extent - diameter);
    (lo.is_finite() && hi.is_finite() && lo < hi).then_some(lo..hi)
}

/// Try up to `attempts` random centers and return the first free one.
///
/// Both axes are bounded by the playfield *width*; the vertical extent of a
/// portrait playfield beyond its width is never used.
pub fn find_free_position<R: Rng>(
    rng: &mut R,
    playfield: Playfield,
    diameter: f32,
    existing: &[Bubble],
    attempts: u32,
) -> Option<Vec2> {
    let range = axis_range(playfield.width, diameter)?;
    let radius = diameter / 2.0;

    for _ in 0..attempts {
        let candidate = Vec2::new(
            rng.random_range(range.clone()),
            rng.random_range(range.clone()),
        );
        if !overlaps(candidate, radius, existing) {
            return Some(candidate);
        }
    }
    None
}
