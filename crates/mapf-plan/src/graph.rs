//! Visibility graph over obstacle-ring waypoints.
//!
//! # Search space
//!
//! Candidate waypoints are K points evenly spaced on a ring around each
//! obstacle disk, for a configurable K (default 16).  The ring radius is
//!
//! ```text
//! r_ring = radius / cos(π / K)
//! ```
//!
//! which places each chord between adjacent ring points exactly tangent to
//! the disk: a path hugging the ring grazes the rim but never enters the
//! interior.  Larger K tightens the detour toward the true tangent path.
//!
//! Two waypoints are connected when the straight segment between them is
//! blocked by no obstacle and admitted by the boundary (if one is set).
//! Waypoint-to-waypoint edges depend only on the obstacle set, so the graph
//! is built once per engine call and shared read-only across every
//! (agent, target) query; start and goal connectivity is computed per query
//! by the planner.

use std::f64::consts::PI;

use mapf_core::Point;
use mapf_geom::{Boundary, ObstacleField};

/// Waypoints and visibility edges shared by all queries in one call.
///
/// Node indices are `u32` positions into `waypoints`, assigned in obstacle
/// input order then ring order — a fixed, reproducible numbering that the
/// planner's tie-break leans on.
pub struct VisibilityGraph {
    waypoints: Vec<Point>,
    adjacency: Vec<Vec<(u32, f64)>>,
}

impl VisibilityGraph {
    /// Generate ring waypoints, filter the infeasible ones, and connect every
    /// mutually visible pair.
    ///
    /// Time complexity: O(W²) visibility tests for W surviving waypoints,
    /// each pruned by the field's R-tree broad phase.
    pub fn build(
        field: &ObstacleField,
        boundary: Option<&Boundary>,
        waypoints_per_obstacle: usize,
    ) -> Self {
        let k = waypoints_per_obstacle.max(3);
        let epsilon = field.epsilon();

        // ── Waypoint generation ───────────────────────────────────────────
        let mut waypoints = Vec::with_capacity(field.len() * k);
        for obstacle in field.obstacles() {
            // A disk with no interior (radius within tolerance of zero)
            // blocks nothing and needs no ring.
            if obstacle.radius <= epsilon {
                continue;
            }
            let ring_radius = obstacle.radius / (PI / k as f64).cos();
            for i in 0..k {
                let angle = 2.0 * PI * i as f64 / k as f64;
                let wp = Point::new(
                    obstacle.center.x + ring_radius * angle.cos(),
                    obstacle.center.y + ring_radius * angle.sin(),
                );
                let feasible = field.interior_containing(wp).is_none()
                    && boundary.is_none_or(|b| b.contains(wp, epsilon));
                if feasible {
                    waypoints.push(wp);
                }
            }
        }

        // ── Edge construction ─────────────────────────────────────────────
        let n = waypoints.len();
        let mut adjacency: Vec<Vec<(u32, f64)>> = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (waypoints[i], waypoints[j]);
                if Self::segment_visible(field, boundary, a, b) {
                    let len = a.dist(b);
                    adjacency[i].push((j as u32, len));
                    adjacency[j].push((i as u32, len));
                }
            }
        }

        Self { waypoints, adjacency }
    }

    /// The shared visibility predicate: no obstacle blocks the segment and
    /// the boundary (if any) admits it.
    #[inline]
    pub fn segment_visible(
        field: &ObstacleField,
        boundary: Option<&Boundary>,
        a: Point,
        b: Point,
    ) -> bool {
        !field.blocks_segment(a, b)
            && boundary.is_none_or(|bd| bd.admits_segment(a, b, field.epsilon()))
    }

    #[inline]
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    /// Outgoing edges of waypoint `i`: `(neighbor index, segment length)`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[(u32, f64)] {
        &self.adjacency[i]
    }
}
