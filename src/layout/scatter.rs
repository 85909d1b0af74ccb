//! Seeded scatter placement.
//!
//! Positions, tilts and pan directions are recomputed from an integer seed on every
//! frame instead of being stored, so a re-rendered frame always lands in the same
//! place.

use crate::foundation::core::{Point, Size};

/// Hash an integer seed to `[0, 1)`: `fract(sin(seed * 127.1 + 311.7) * 43758.5453)`.
pub fn seed_random(seed: i64) -> f64 {
    let x = ((seed as f64) * 127.1 + 311.7).sin() * 43758.5453;
    let f = x - x.floor();
    if f >= 1.0 { 0.0 } else { f }
}

/// Three independent draws for element `index`, seeds `index*3 + base .. +2`.
pub fn seed_triplet(index: usize, base: i64) -> [f64; 3] {
    let s = (index as i64) * 3 + base;
    [seed_random(s), seed_random(s + 1), seed_random(s + 2)]
}

/// Rectangular region that scattered items are dropped into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterArea {
    /// Size of the containing box.
    pub bounds: Size,
    /// Size of each scattered item.
    pub item: Size,
    /// Left/top offset of the first allowed position.
    pub margin: Point,
    /// Total slack removed from the travel range on each axis.
    pub inset: Size,
    /// Full rotation range in degrees, centered on zero.
    pub rotation_span_deg: f64,
    /// Seed offset added to `index * 3`.
    pub seed_base: i64,
}

/// Seeded placement of one scattered item.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    pub origin: Point,
    pub rotation_deg: f64,
}

impl ScatterArea {
    pub fn place(&self, index: usize) -> Placement {
        let [r1, r2, r3] = seed_triplet(index, self.seed_base);
        let travel_x = (self.bounds.width - self.item.width - self.inset.width).max(0.0);
        let travel_y = (self.bounds.height - self.item.height - self.inset.height).max(0.0);
        Placement {
            origin: Point::new(self.margin.x + r1 * travel_x, self.margin.y + r2 * travel_y),
            rotation_deg: (r3 - 0.5) * self.rotation_span_deg,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scatter.rs"]
mod tests;
