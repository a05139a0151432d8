//! Input snapshot and output types for one engine call.

use mapf_core::{AgentId, Point, TargetId};
use mapf_geom::{Boundary, Obstacle};
use mapf_plan::PlannedPath;

/// The immutable input snapshot for one `pathfind` call.
///
/// Agents and targets are bare positions; their identity is their index in
/// the input collection (`AgentId(i)` / `TargetId(j)`), which every output
/// row preserves.  Nothing here is mutated by the engine.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub agents: Vec<Point>,
    pub targets: Vec<Point>,
    pub obstacles: Vec<Obstacle>,
    /// Optional bounding polygon; paths never leave it.
    pub boundary: Option<Boundary>,
}

/// One assigned agent's share of the outcome.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathfindResult {
    /// Sequential result identifier, assigned in ascending agent order.
    pub id: u32,
    pub agent: AgentId,
    pub agent_pos: Point,
    pub target: TargetId,
    pub target_pos: Point,
    pub path: PlannedPath,
}

/// Everything a `pathfind` call produces.
///
/// Unassigned agents are reported explicitly rather than silently dropped:
/// `results` holds one entry per assigned agent (count ≤ agent count) and
/// `unassigned` lists every agent that either had no feasible bid or lost
/// all of its bids in the assignment.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathfindOutcome {
    /// Assigned agents in ascending agent order.
    pub results: Vec<PathfindResult>,
    /// Agents without an assignment, ascending.
    pub unassigned: Vec<AgentId>,
}

impl PathfindOutcome {
    /// `true` when every input agent received a path.
    pub fn is_fully_assigned(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Sum of all assigned path lengths.
    pub fn total_cost(&self) -> f64 {
        self.results.iter().map(|r| r.path.length()).sum()
    }
}
