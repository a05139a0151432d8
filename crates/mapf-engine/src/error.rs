//! Engine error types.
//!
//! Only malformed input fails a call as a whole.  A specific (agent, target)
//! pair with no collision-free path, a planner budget exhaustion, or an
//! agent losing the auction are all per-agent conditions reported through
//! [`PathfindOutcome`](crate::PathfindOutcome), never through these types.

use thiserror::Error;

use mapf_core::{AgentId, ObstacleId, TargetId};

/// A whole-call failure.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),
}

/// Why the input snapshot was rejected before any planning ran.
///
/// Once inputs are malformed, correctness of the whole batch is not assured,
/// so validation failures produce no partial results.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("agent count {got} exceeds the configured maximum {max}")]
    TooManyAgents { got: usize, max: usize },

    #[error("non-finite coordinate on {what} {index}")]
    NonFinite { what: &'static str, index: usize },

    #[error("obstacle {0} has a negative or non-finite radius")]
    BadRadius(ObstacleId),

    #[error("agent {0} lies strictly inside obstacle {1}")]
    AgentInObstacle(AgentId, ObstacleId),

    #[error("target {0} lies strictly inside obstacle {1}")]
    TargetInObstacle(TargetId, ObstacleId),

    #[error("agent {0} lies outside the boundary")]
    AgentOutOfBounds(AgentId),

    #[error("target {0} lies outside the boundary")]
    TargetOutOfBounds(TargetId),

    #[error("obstacle {0} covers the entire boundary")]
    ObstacleCoversBoundary(ObstacleId),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
