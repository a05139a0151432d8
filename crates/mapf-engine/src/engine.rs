//! The `pathfind` pipeline.

use mapf_assign::{matcher_for, Bid};
use mapf_core::{AgentId, AssignmentPolicy, PathfindConfig, Point, TargetId};
use mapf_geom::{polylines_properly_intersect, ObstacleField};
use mapf_plan::{Planner, VisibilityPlanner};

use crate::error::EngineResult;
use crate::scenario::{PathfindOutcome, PathfindResult, Scenario};
use crate::validate::validate;

/// Compute a one-shot assignment and path set for a static snapshot.
///
/// See the crate docs for the pipeline stages.  The call either fails as a
/// whole with [`EngineError::Invalid`](crate::EngineError::Invalid) or
/// returns a [`PathfindOutcome`] covering every input agent — assigned
/// agents under `results`, the rest under `unassigned`.
///
/// Repeated calls with identical inputs return identical outcomes; there is
/// no hidden state and no randomness anywhere in the pipeline.
pub fn pathfind(scenario: &Scenario, config: &PathfindConfig) -> EngineResult<PathfindOutcome> {
    validate(scenario, config)?;

    // ── Shared read-only planning state ───────────────────────────────────
    let field = ObstacleField::new(scenario.obstacles.clone(), config.epsilon);
    let planner = VisibilityPlanner::new(
        &field,
        scenario.boundary.as_ref(),
        config.waypoints_per_obstacle,
        config.search_budget,
    );

    // ── Bid stage ─────────────────────────────────────────────────────────
    let bids = generate_bids(&planner, &scenario.agents, &scenario.targets);

    // ── Resolve stage (join barrier) ──────────────────────────────────────
    let matcher = matcher_for(config.policy, config.solver);
    let selected = matcher.select(&bids, scenario.agents.len(), scenario.targets.len());

    // ── Aggregate ─────────────────────────────────────────────────────────
    let mut results: Vec<PathfindResult> = selected
        .iter()
        .enumerate()
        .map(|(id, &i)| {
            let bid = &bids[i];
            PathfindResult {
                id: id as u32,
                agent: bid.agent,
                agent_pos: scenario.agents[bid.agent.index()],
                target: bid.target,
                target_pos: scenario.targets[bid.target.index()],
                path: bid.path.clone(),
            }
        })
        .collect();

    if config.repair_enabled() && config.policy == AssignmentPolicy::Exclusive {
        repair_crossings(&planner, &mut results);
    }

    let assigned: Vec<bool> = {
        let mut v = vec![false; scenario.agents.len()];
        for r in &results {
            v[r.agent.index()] = true;
        }
        v
    };
    let unassigned = assigned
        .iter()
        .enumerate()
        .filter(|&(_, &a)| !a)
        .map(|(i, _)| AgentId(i as u32))
        .collect();

    Ok(PathfindOutcome { results, unassigned })
}

// ── Bid generation ────────────────────────────────────────────────────────────

/// One planner query per (agent, target) pair, in agent-major order.
///
/// Feasible queries become bids; `Unreachable`, `BudgetExceeded`, and the
/// blocked/out-of-bounds variants silently drop the pair.  Each query only
/// reads the shared planner and writes its own slot, so the parallel and
/// sequential paths produce identical bid vectors.
fn generate_bids(planner: &VisibilityPlanner<'_>, agents: &[Point], targets: &[Point]) -> Vec<Bid> {
    let pairs: Vec<(u32, u32)> = (0..agents.len() as u32)
        .flat_map(|a| (0..targets.len() as u32).map(move |t| (a, t)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let slots: Vec<Option<Bid>> = pairs
        .iter()
        .map(|&(a, t)| try_bid(planner, agents, targets, a, t))
        .collect();

    #[cfg(feature = "parallel")]
    let slots: Vec<Option<Bid>> = {
        use rayon::prelude::*;
        pairs
            .par_iter()
            .map(|&(a, t)| try_bid(planner, agents, targets, a, t))
            .collect()
    };

    slots.into_iter().flatten().collect()
}

fn try_bid(
    planner: &VisibilityPlanner<'_>,
    agents: &[Point],
    targets: &[Point],
    agent: u32,
    target: u32,
) -> Option<Bid> {
    planner
        .plan(agents[agent as usize], targets[target as usize])
        .ok()
        .map(|path| Bid::new(AgentId(agent), TargetId(target), path))
}

// ── Crossing repair ───────────────────────────────────────────────────────────

/// Uncross assigned paths by swapping targets between crossing pairs.
///
/// Two straight paths that cross always get shorter when uncrossed; around
/// obstacles the same usually holds, so a swap is kept only when the
/// replanned pair strictly lowers the summed length.  Strict decrease rules
/// out cycling; the sweep count is capped at n² regardless.
fn repair_crossings(planner: &VisibilityPlanner<'_>, results: &mut [PathfindResult]) {
    let n = results.len();
    if n < 2 {
        return;
    }

    let max_sweeps = n * n;
    for _ in 0..max_sweeps {
        let mut swapped = false;

        for i in 0..n {
            for j in (i + 1)..n {
                if !polylines_properly_intersect(results[i].path.points(), results[j].path.points())
                {
                    continue;
                }

                let (Ok(path_i), Ok(path_j)) = (
                    planner.plan(results[i].agent_pos, results[j].target_pos),
                    planner.plan(results[j].agent_pos, results[i].target_pos),
                ) else {
                    continue;
                };

                let old = results[i].path.length() + results[j].path.length();
                let new = path_i.length() + path_j.length();
                if new < old {
                    let (ti, tpi) = (results[i].target, results[i].target_pos);
                    results[i].target = results[j].target;
                    results[i].target_pos = results[j].target_pos;
                    results[i].path = path_i;
                    results[j].target = ti;
                    results[j].target_pos = tpi;
                    results[j].path = path_j;
                    swapped = true;
                }
            }
        }

        if !swapped {
            break;
        }
    }
}
