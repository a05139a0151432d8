//! Planar coordinate type.
//!
//! `Point` uses `f64` throughout: planning quality degrades quickly once
//! tangent waypoints and grazing tolerances fall below single-precision
//! resolution, and the agent counts involved are far too small for memory
//! to matter.

use std::fmt;

/// A 2D Cartesian coordinate.  Immutable by convention — every operation
/// that "moves" a point returns a new one.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn dist(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared distance — cheaper than [`dist`](Self::dist) for comparisons.
    #[inline]
    pub fn dist_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// `true` iff both coordinates are finite (no NaN, no ±∞).
    ///
    /// Validation rejects non-finite inputs before planning; everything
    /// downstream may assume finiteness.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}
