//! Obstacle set with an R-tree broad phase.
//!
//! Planning tests every candidate visibility edge against the obstacle set.
//! An R-tree over disk bounding boxes (via `rstar`) prunes that to the disks
//! whose envelope overlaps the segment's, then the exact disk-segment test
//! runs on the survivors.  For the handful-of-obstacles case the tree costs
//! nothing; for dense fields it keeps edge construction near-linear.

use rstar::{RTree, RTreeObject, AABB};

use mapf_core::{ObstacleId, Point};

use crate::obstacle::Obstacle;

// ── R-tree disk entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: the disk's axis-aligned bounding box plus the
/// associated `ObstacleId`.
#[derive(Clone)]
struct DiskEntry {
    aabb: AABB<[f64; 2]>,
    id: ObstacleId,
}

impl RTreeObject for DiskEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.aabb
    }
}

// ── ObstacleField ─────────────────────────────────────────────────────────────

/// Immutable obstacle set shared by every planner query in a call.
///
/// Built once per `pathfind` invocation; all queries take `&self` so the
/// field can be read concurrently from Rayon workers.
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    epsilon: f64,
    index: RTree<DiskEntry>,
}

impl ObstacleField {
    /// Index the given obstacles.  `epsilon` is the grazing tolerance applied
    /// to every exact test (see [`Obstacle::blocks`]).
    pub fn new(obstacles: Vec<Obstacle>, epsilon: f64) -> Self {
        let entries: Vec<DiskEntry> = obstacles
            .iter()
            .enumerate()
            .map(|(i, o)| DiskEntry {
                aabb: AABB::from_corners(
                    [o.center.x - o.radius, o.center.y - o.radius],
                    [o.center.x + o.radius, o.center.y + o.radius],
                ),
                id: ObstacleId(i as u32),
            })
            .collect();
        Self {
            obstacles,
            epsilon,
            // Bulk load for O(N log N) construction.
            index: RTree::bulk_load(entries),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[inline]
    pub fn get(&self, id: ObstacleId) -> &Obstacle {
        &self.obstacles[id.index()]
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` iff any obstacle disk blocks the segment `ab`.
    ///
    /// Broad phase: the disk envelopes already include their radii, so the
    /// raw segment AABB is the right query box.
    pub fn blocks_segment(&self, a: Point, b: Point) -> bool {
        let query = AABB::from_corners(
            [a.x.min(b.x), a.y.min(b.y)],
            [a.x.max(b.x), a.y.max(b.y)],
        );
        self.index
            .locate_in_envelope_intersecting(&query)
            .any(|e| self.obstacles[e.id.index()].blocks(a, b, self.epsilon))
    }

    /// The lowest-indexed obstacle whose strict interior contains `p`, if
    /// any.  Taking the minimum keeps the answer independent of tree
    /// traversal order.
    pub fn interior_containing(&self, p: Point) -> Option<ObstacleId> {
        self.index
            .locate_in_envelope_intersecting(&AABB::from_point([p.x, p.y]))
            .filter(|e| self.obstacles[e.id.index()].interior_contains(p, self.epsilon))
            .map(|e| e.id)
            .min()
    }
}
