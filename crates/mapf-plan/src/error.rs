//! Planner error type.

use thiserror::Error;

use mapf_core::ObstacleId;

/// Errors produced by a single planning query.
///
/// `Unreachable` and `BudgetExceeded` mark one (agent, target) pair as
/// infeasible — the bid generator drops the pair and moves on.  The blocked /
/// out-of-bounds variants indicate inputs the engine's validation stage
/// rejects up front; they surface here only for callers driving the planner
/// directly.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("start point lies inside obstacle {0}")]
    StartBlocked(ObstacleId),

    #[error("goal point lies inside obstacle {0}")]
    GoalBlocked(ObstacleId),

    #[error("start point lies outside the boundary")]
    StartOutOfBounds,

    #[error("goal point lies outside the boundary")]
    GoalOutOfBounds,

    #[error("no collision-free path from start to goal")]
    Unreachable,

    #[error("search budget exhausted after {0} node expansions")]
    BudgetExceeded(u32),
}

pub type PlanResult<T> = Result<T, PlanError>;
