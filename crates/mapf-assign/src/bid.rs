//! A candidate (agent, target) pairing with its planned path.

use mapf_core::{AgentId, TargetId};
use mapf_plan::PlannedPath;

/// One agent's offer for one target.
///
/// Produced by the bid generator (one per feasible (agent, target) pair),
/// immutable once created, consumed exactly once by the assignment solver.
/// The bid's cost is its path length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bid {
    pub agent: AgentId,
    pub target: TargetId,
    pub path: PlannedPath,
}

impl Bid {
    pub fn new(agent: AgentId, target: TargetId, path: PlannedPath) -> Self {
        Self { agent, target, path }
    }

    /// The cost the solver minimizes over: total path length.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.path.length()
    }
}
