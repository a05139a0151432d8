//! Circular exclusion zones.

use mapf_core::Point;

use crate::segment::point_segment_distance;

/// A circular obstacle: hard exclusion disk of `radius` around `center`.
///
/// Radius 0 degenerates to a point blocker.  Obstacles are read-only inputs
/// for the duration of a planning call.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub center: Point,
    pub radius: f64,
}

impl Obstacle {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Disk membership, boundary-inclusive: distance ≤ radius.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.dist(self.center) <= self.radius
    }

    /// Strict interior membership with grazing tolerance: a point exactly on
    /// the rim (distance == radius) is NOT inside.  This is the test that
    /// decides feasibility of starts, targets, and waypoints.
    #[inline]
    pub fn interior_contains(&self, p: Point, epsilon: f64) -> bool {
        p.dist(self.center) < self.radius - epsilon
    }

    /// `true` iff the segment `ab` passes through the disk interior.
    ///
    /// Disk-segment intersection via the point-to-segment distance formula;
    /// a segment grazing the rim (distance == radius) is allowed through.
    #[inline]
    pub fn blocks(&self, a: Point, b: Point, epsilon: f64) -> bool {
        point_segment_distance(self.center, a, b) < self.radius - epsilon
    }
}
