//! Planner trait and the default A* implementation.
//!
//! # Pluggability
//!
//! The engine calls planning via the [`Planner`] trait, so applications can
//! swap in custom implementations (sampling planners, precomputed roadmaps)
//! without touching the bid generator.  The default [`VisibilityPlanner`]
//! searches the obstacle-ring visibility graph with A*.
//!
//! # Determinism
//!
//! The A* heap is keyed by `(f-cost, node index)` — ties between
//! equal-length paths break toward the lower waypoint insertion index, so
//! repeated queries over identical inputs reproduce byte-identical paths.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use mapf_core::Point;
use mapf_geom::{Boundary, ObstacleField};

use crate::error::{PlanError, PlanResult};
use crate::graph::VisibilityGraph;
use crate::path::PlannedPath;

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable single-query path planner.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so the bid generator can share one
/// planner across Rayon worker threads.
pub trait Planner: Send + Sync {
    /// Compute a shortest collision-free path from `start` to `goal`, or
    /// report why none exists.
    fn plan(&self, start: Point, goal: Point) -> PlanResult<PlannedPath>;
}

// ── VisibilityPlanner ─────────────────────────────────────────────────────────

/// A* over a [`VisibilityGraph`], with straight-line distance as the
/// admissible (and consistent) heuristic.
///
/// Construction builds the waypoint graph once; every [`plan`](Planner::plan)
/// call then only computes start/goal connectivity and runs the search, so a
/// planner can be queried for all (agent, target) pairs of a call without
/// rebuilding anything.
pub struct VisibilityPlanner<'a> {
    field: &'a ObstacleField,
    boundary: Option<&'a Boundary>,
    graph: VisibilityGraph,
    budget: Option<u32>,
}

impl<'a> VisibilityPlanner<'a> {
    /// Build the shared visibility graph for this obstacle field.
    ///
    /// `budget` caps A* node expansions per query; an exhausted budget fails
    /// that query with [`PlanError::BudgetExceeded`] and never hangs.
    pub fn new(
        field: &'a ObstacleField,
        boundary: Option<&'a Boundary>,
        waypoints_per_obstacle: usize,
        budget: Option<u32>,
    ) -> Self {
        let graph = VisibilityGraph::build(field, boundary, waypoints_per_obstacle);
        Self { field, boundary, graph, budget }
    }

    #[inline]
    pub fn graph(&self) -> &VisibilityGraph {
        &self.graph
    }

    fn visible(&self, a: Point, b: Point) -> bool {
        VisibilityGraph::segment_visible(self.field, self.boundary, a, b)
    }
}

impl Planner for VisibilityPlanner<'_> {
    fn plan(&self, start: Point, goal: Point) -> PlanResult<PlannedPath> {
        let epsilon = self.field.epsilon();

        // ── Input feasibility ─────────────────────────────────────────────
        if let Some(id) = self.field.interior_containing(start) {
            return Err(PlanError::StartBlocked(id));
        }
        if let Some(id) = self.field.interior_containing(goal) {
            return Err(PlanError::GoalBlocked(id));
        }
        if let Some(b) = self.boundary {
            if !b.contains(start, epsilon) {
                return Err(PlanError::StartOutOfBounds);
            }
            if !b.contains(goal, epsilon) {
                return Err(PlanError::GoalOutOfBounds);
            }
        }

        // ── Trivial and direct cases ──────────────────────────────────────
        if start == goal {
            return Ok(PlannedPath::single(start));
        }
        if self.visible(start, goal) {
            return Ok(PlannedPath::from_points(vec![start, goal]));
        }

        // ── A* over waypoints ∪ {start, goal} ─────────────────────────────
        //
        // Node numbering: 0..w are graph waypoints, w is start, w+1 is goal.
        let w = self.graph.waypoint_count();
        let start_idx = w as u32;
        let goal_idx = w as u32 + 1;

        let point_of = |i: u32| -> Point {
            if i == start_idx {
                start
            } else if i == goal_idx {
                goal
            } else {
                self.graph.waypoints()[i as usize]
            }
        };

        // Per-query connectivity for the two virtual nodes.
        let start_edges: Vec<(u32, f64)> = (0..w)
            .filter(|&i| self.visible(start, self.graph.waypoints()[i]))
            .map(|i| (i as u32, start.dist(self.graph.waypoints()[i])))
            .collect();
        let goal_edge: Vec<Option<f64>> = (0..w)
            .map(|i| {
                let wp = self.graph.waypoints()[i];
                self.visible(wp, goal).then(|| wp.dist(goal))
            })
            .collect();

        let mut dist = vec![f64::INFINITY; w + 2];
        let mut prev = vec![u32::MAX; w + 2];
        let mut closed = vec![false; w + 2];
        let mut expansions: u32 = 0;

        // Min-heap on (f, node).  Reverse makes BinaryHeap (max) behave as
        // min-heap; the node index as secondary key is the deterministic
        // tie-break between equal-length paths.
        let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, u32)>> = BinaryHeap::new();
        dist[start_idx as usize] = 0.0;
        heap.push(Reverse((OrderedFloat(start.dist(goal)), start_idx)));

        while let Some(Reverse((_, node))) = heap.pop() {
            if closed[node as usize] {
                continue;
            }
            closed[node as usize] = true;

            if node == goal_idx {
                return Ok(reconstruct(&prev, goal_idx, point_of));
            }

            expansions += 1;
            if let Some(budget) = self.budget {
                if expansions > budget {
                    return Err(PlanError::BudgetExceeded(expansions));
                }
            }

            let g = dist[node as usize];
            let mut relax = |to: u32, len: f64| {
                let candidate = g + len;
                if candidate < dist[to as usize] {
                    dist[to as usize] = candidate;
                    prev[to as usize] = node;
                    let f = candidate + point_of(to).dist(goal);
                    heap.push(Reverse((OrderedFloat(f), to)));
                }
            };

            if node == start_idx {
                for &(to, len) in &start_edges {
                    relax(to, len);
                }
            } else {
                for &(to, len) in self.graph.neighbors(node as usize) {
                    relax(to, len);
                }
                if let Some(len) = goal_edge[node as usize] {
                    relax(goal_idx, len);
                }
            }
        }

        Err(PlanError::Unreachable)
    }
}

fn reconstruct(prev: &[u32], goal_idx: u32, point_of: impl Fn(u32) -> Point) -> PlannedPath {
    let mut indices = vec![goal_idx];
    let mut cur = goal_idx;
    while prev[cur as usize] != u32::MAX {
        cur = prev[cur as usize];
        indices.push(cur);
    }
    indices.reverse();
    PlannedPath::from_points(indices.into_iter().map(point_of).collect())
}
