//! Bubble colors, their point values, and spawn weights

use rand::Rng;

use super::state::BubbleColor;

/// One row of the color table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorEntry {
    pub color: BubbleColor,
    pub points: u32,
    /// Relative spawn weight (table need not sum to 1.0)
    pub weight: f64,
}

impl ColorEntry {
    pub const fn new(color: BubbleColor, points: u32, weight: f64) -> Self {
        Self {
            color,
            points,
            weight,
        }
    }
}

/// Rarer colors are worth more
pub const COLOR_TABLE: [ColorEntry; 5] = [
    ColorEntry::new(BubbleColor::Red, 1, 0.40),
    ColorEntry::new(BubbleColor::Pink, 2, 0.30),
    ColorEntry::new(BubbleColor::Green, 5, 0.15),
    ColorEntry::new(BubbleColor::Blue, 8, 0.10),
    ColorEntry::new(BubbleColor::Black, 10, 0.05),
];

pub fn total_weight(table: &[ColorEntry]) -> f64 {
    table.iter().map(|e| e.weight).sum()
}

/// Select the entry `draw` lands in, walking weights in table order.
///
/// `draw` is expected in `[0, total_weight)`. Float drift that leaves a
/// positive remainder past the last row falls back to the first entry.
///
/// # Panics
///
/// Panics if `table` is empty.
pub fn pick_weighted(table: &[ColorEntry], draw: f64) -> ColorEntry {
    let mut remaining = draw;
    for entry in table {
        remaining -= entry.weight;
        if remaining <= 0.0 {
            return *entry;
        }
    }
    table[0]
}

/// Draw a random color entry from `table`
pub fn random_entry<R: Rng>(table: &[ColorEntry], rng: &mut R) -> ColorEntry {
    let total = total_weight(table);
    if total <= 0.0 {
        return table[0];
    }
    pick_weighted(table, rng.random_range(0.0..total))
}
