//! Engine configuration.
//!
//! Every tunable the engine consults lives in [`PathfindConfig`] and is passed
//! explicitly into each call.  There is no process-wide state: two concurrent
//! calls with different configs never observe each other.

use crate::error::{CoreError, CoreResult};

/// Default agent cap per call.  The system this engine serves batches at most
/// four agents per planning round; raise `max_agents` for larger fleets.
pub const DEFAULT_MAX_AGENTS: usize = 4;

/// Who may claim a target once bids are in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssignmentPolicy {
    /// At most one agent per target (min-cost bipartite matching).
    #[default]
    Exclusive,
    /// Any number of agents may share a target; each agent simply takes its
    /// cheapest feasible bid.
    Shared,
}

/// How the exclusive assignment is solved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverMode {
    /// Successive-shortest-augmenting-path assignment: maximum number of
    /// agents assigned, then minimum total path length.  The default.
    #[default]
    Exact,
    /// Global greedy by ascending bid cost.  Cheaper per call, may leave
    /// total cost above the optimum; pair with crossing repair.
    Greedy,
}

/// Top-level configuration for one `pathfind` call.
///
/// `PathfindConfig::default()` matches the documented defaults below; every
/// field can be overridden per call.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathfindConfig {
    /// Hard cap on the number of agents per call.  Exceeding it is a
    /// validation failure, never a silent truncation.  Default: 4.
    pub max_agents: usize,

    /// Target-sharing policy.  Default: [`AssignmentPolicy::Exclusive`].
    pub policy: AssignmentPolicy,

    /// Assignment solver for the exclusive policy.  Ignored under
    /// [`AssignmentPolicy::Shared`].  Default: [`SolverMode::Exact`].
    pub solver: SolverMode,

    /// Absolute tolerance for grazing contact: a segment passing within
    /// `radius - epsilon` of a disk center is blocked, anything at or beyond
    /// that grazes legally.  Also used for on-edge polygon tests.
    /// Default: 1e-9.
    pub epsilon: f64,

    /// Waypoints placed on the ring around each obstacle.  More waypoints
    /// tighten detours toward the true tangent path at the cost of a denser
    /// visibility graph.  Must be ≥ 3.  Default: 16.
    pub waypoints_per_obstacle: usize,

    /// Optional cap on A* node expansions per (agent, target) query.  An
    /// exhausted budget makes that single pair infeasible; it never fails
    /// the whole call.  Default: `None` (unbounded).
    pub search_budget: Option<u32>,

    /// Run the post-assignment crossing-repair sweep.  `None` picks the
    /// solver's default: off for `Exact`, on for `Greedy`.
    pub repair_crossings: Option<bool>,
}

impl Default for PathfindConfig {
    fn default() -> Self {
        Self {
            max_agents:             DEFAULT_MAX_AGENTS,
            policy:                 AssignmentPolicy::Exclusive,
            solver:                 SolverMode::Exact,
            epsilon:                1e-9,
            waypoints_per_obstacle: 16,
            search_budget:          None,
            repair_crossings:       None,
        }
    }
}

impl PathfindConfig {
    /// Resolved crossing-repair switch (see [`repair_crossings`](Self::repair_crossings)).
    #[inline]
    pub fn repair_enabled(&self) -> bool {
        self.repair_crossings
            .unwrap_or(self.solver == SolverMode::Greedy)
    }

    /// Reject configurations no pipeline stage could honor.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_agents == 0 {
            return Err(CoreError::Config("max_agents must be at least 1".into()));
        }
        if self.waypoints_per_obstacle < 3 {
            return Err(CoreError::Config(format!(
                "waypoints_per_obstacle must be at least 3, got {}",
                self.waypoints_per_obstacle
            )));
        }
        if !self.epsilon.is_finite() {
            return Err(CoreError::NonFinite("epsilon"));
        }
        if self.epsilon < 0.0 {
            return Err(CoreError::Config("epsilon must be ≥ 0".into()));
        }
        Ok(())
    }
}
