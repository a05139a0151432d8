//! Input validation — the `is_valid_input_params` contract.
//!
//! Runs before anything is planned.  Checks are ordered cheapest-first; the
//! first failure aborts the call with no partial results.

use mapf_core::{AgentId, ObstacleId, PathfindConfig, Point, TargetId};

use crate::error::ValidationError;
use crate::scenario::Scenario;

/// Reject malformed input snapshots.
///
/// Semantics worth noting:
/// - A point exactly on an obstacle rim (distance == radius) is feasible;
///   only the strict interior is rejected.
/// - Boundary containment is edge-inclusive.
/// - An obstacle disk swallowing the whole boundary leaves no feasible
///   geometry at all and is rejected outright; an obstacle merely cutting
///   the boundary in two is NOT rejected — the severed pairs simply turn up
///   infeasible.
pub fn validate(scenario: &Scenario, config: &PathfindConfig) -> Result<(), ValidationError> {
    // ── Config sanity ─────────────────────────────────────────────────────
    config
        .validate()
        .map_err(|e| ValidationError::Config(e.to_string()))?;

    // ── Agent cap ─────────────────────────────────────────────────────────
    if scenario.agents.len() > config.max_agents {
        return Err(ValidationError::TooManyAgents {
            got: scenario.agents.len(),
            max: config.max_agents,
        });
    }

    // ── Finiteness ────────────────────────────────────────────────────────
    check_finite(&scenario.agents, "agent")?;
    check_finite(&scenario.targets, "target")?;
    for (i, o) in scenario.obstacles.iter().enumerate() {
        if !o.center.is_finite() {
            return Err(ValidationError::NonFinite { what: "obstacle", index: i });
        }
        if !o.radius.is_finite() || o.radius < 0.0 {
            return Err(ValidationError::BadRadius(ObstacleId(i as u32)));
        }
    }

    // ── Endpoints vs obstacles ────────────────────────────────────────────
    let epsilon = config.epsilon;
    for (i, &agent) in scenario.agents.iter().enumerate() {
        for (k, o) in scenario.obstacles.iter().enumerate() {
            if o.interior_contains(agent, epsilon) {
                return Err(ValidationError::AgentInObstacle(
                    AgentId(i as u32),
                    ObstacleId(k as u32),
                ));
            }
        }
    }
    for (j, &target) in scenario.targets.iter().enumerate() {
        for (k, o) in scenario.obstacles.iter().enumerate() {
            if o.interior_contains(target, epsilon) {
                return Err(ValidationError::TargetInObstacle(
                    TargetId(j as u32),
                    ObstacleId(k as u32),
                ));
            }
        }
    }

    // ── Endpoints vs boundary ─────────────────────────────────────────────
    if let Some(boundary) = &scenario.boundary {
        for (i, &agent) in scenario.agents.iter().enumerate() {
            if !boundary.contains(agent, epsilon) {
                return Err(ValidationError::AgentOutOfBounds(AgentId(i as u32)));
            }
        }
        for (j, &target) in scenario.targets.iter().enumerate() {
            if !boundary.contains(target, epsilon) {
                return Err(ValidationError::TargetOutOfBounds(TargetId(j as u32)));
            }
        }

        // A disk is convex, so containing every boundary vertex means
        // containing the whole polygon.
        for (k, o) in scenario.obstacles.iter().enumerate() {
            if boundary.vertices().iter().all(|&v| o.contains(v)) {
                return Err(ValidationError::ObstacleCoversBoundary(ObstacleId(k as u32)));
            }
        }
    }

    Ok(())
}

fn check_finite(points: &[Point], what: &'static str) -> Result<(), ValidationError> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(ValidationError::NonFinite { what, index }),
        None => Ok(()),
    }
}
