//! The result of a planning query: an ordered point sequence and its length.

use mapf_core::Point;

/// A collision-free polyline from start to goal.
///
/// Invariants (upheld by the planner, relied on by every consumer):
/// - `points` is non-empty; first point is the start, last is the goal.
/// - A single-point path means start == goal and has length 0.
/// - No segment passes through any obstacle disk interior.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedPath {
    points: Vec<Point>,
    length: f64,
}

impl PlannedPath {
    /// The degenerate "already there" path.
    pub fn single(p: Point) -> Self {
        Self { points: vec![p], length: 0.0 }
    }

    /// Build from a waypoint sequence, summing segment lengths.
    ///
    /// # Panics
    /// Panics in debug mode if `points` is empty.
    pub fn from_points(points: Vec<Point>) -> Self {
        debug_assert!(!points.is_empty());
        let length = points.windows(2).map(|w| w[0].dist(w[1])).sum();
        Self { points, length }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Total polyline length.  This is the bid cost.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    #[inline]
    pub fn end(&self) -> Point {
        *self.points.last().expect("path is never empty")
    }

    /// `true` if start == goal (single-point path).
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.points.len() == 1
    }
}
