//! Assignment solvers implementing the configured policy and solver mode.
//!
//! # Pluggability
//!
//! The engine resolves bids via the [`Matcher`] trait, so the exact solver,
//! the greedy heuristic, and the shared-target selector are interchangeable
//! strategies; [`matcher_for`] picks the one a config asks for.
//!
//! # Determinism
//!
//! All three matchers break cost ties toward lower agent index, then lower
//! target index.  Given identical bid sets they return identical selections.

use mapf_core::{AssignmentPolicy, SolverMode};

use crate::bid::Bid;

/// Pluggable assignment strategy.
///
/// `select` returns indices into `bids` — at most one per agent, and (for
/// exclusive strategies) at most one per target — sorted by ascending agent
/// index.  Agents with no bid in `bids` are simply absent from the result.
pub trait Matcher: Send + Sync {
    fn select(&self, bids: &[Bid], agent_count: usize, target_count: usize) -> Vec<usize>;
}

/// Select the strategy for a (policy, solver) configuration.
pub fn matcher_for(policy: AssignmentPolicy, solver: SolverMode) -> Box<dyn Matcher> {
    match (policy, solver) {
        (AssignmentPolicy::Shared, _) => Box::new(SharedMatcher),
        (AssignmentPolicy::Exclusive, SolverMode::Exact) => Box::new(ExactMatcher),
        (AssignmentPolicy::Exclusive, SolverMode::Greedy) => Box::new(GreedyMatcher),
    }
}

// ── ExactMatcher ──────────────────────────────────────────────────────────────

/// Minimum-cost bipartite assignment via successive shortest augmenting
/// paths with dual potentials (the Jonker–Volgenant recurrence on a dense
/// reduced-cost matrix).
///
/// Guarantees: maximum number of agents assigned, and among all
/// maximum-cardinality assignments, minimum total path length.  Infeasible
/// (agent, target) pairs are padded with a sentinel cost large enough that
/// the solver always prefers one more real edge over any cost saving.
///
/// Runtime is O(n² · m) for n agents and m targets — negligible at the agent
/// counts this engine caps at.
#[derive(Debug, Clone, Default)]
pub struct ExactMatcher;

impl Matcher for ExactMatcher {
    fn select(&self, bids: &[Bid], agent_count: usize, target_count: usize) -> Vec<usize> {
        if bids.is_empty() || agent_count == 0 || target_count == 0 {
            return Vec::new();
        }

        // Dense (agent, target) → bid index lookup; the cheapest bid wins if
        // a pair was somehow bid twice.
        let mut bid_at = vec![vec![None::<usize>; target_count]; agent_count];
        let mut max_cost: f64 = 0.0;
        for (i, bid) in bids.iter().enumerate() {
            let (a, t) = (bid.agent.index(), bid.target.index());
            let slot = &mut bid_at[a][t];
            if slot.is_none_or(|prev| bids[prev].cost() > bid.cost()) {
                *slot = Some(i);
            }
            max_cost = max_cost.max(bid.cost());
        }

        // Sentinel for missing pairs: larger than any full real assignment,
        // so minimizing total cost first maximizes the real-edge count.
        let big = (max_cost + 1.0) * (agent_count as f64 + 1.0);

        // Columns must cover rows; pad with dummy targets when agents
        // outnumber targets.
        let n = agent_count;
        let m = target_count.max(agent_count);
        let cost = |a: usize, t: usize| -> f64 {
            if t < target_count {
                bid_at[a][t].map_or(big, |i| bids[i].cost())
            } else {
                big
            }
        };

        // 1-based arrays per the classic formulation; p[j] is the row
        // matched to column j, p[0] the row being inserted.
        let mut u = vec![0.0; n + 1];
        let mut v = vec![0.0; m + 1];
        let mut p = vec![0usize; m + 1];
        let mut way = vec![0usize; m + 1];

        for i in 1..=n {
            p[0] = i;
            let mut j0 = 0usize;
            let mut minv = vec![f64::INFINITY; m + 1];
            let mut used = vec![false; m + 1];

            loop {
                used[j0] = true;
                let i0 = p[j0];
                let mut delta = f64::INFINITY;
                let mut j1 = 0usize;
                for j in 1..=m {
                    if !used[j] {
                        let cur = cost(i0 - 1, j - 1) - u[i0] - v[j];
                        if cur < minv[j] {
                            minv[j] = cur;
                            way[j] = j0;
                        }
                        // Strict `<` keeps the lowest column index on ties.
                        if minv[j] < delta {
                            delta = minv[j];
                            j1 = j;
                        }
                    }
                }
                for j in 0..=m {
                    if used[j] {
                        u[p[j]] += delta;
                        v[j] -= delta;
                    } else {
                        minv[j] -= delta;
                    }
                }
                j0 = j1;
                if p[j0] == 0 {
                    break;
                }
            }

            // Walk the alternating path back, flipping matched edges.
            loop {
                let j1 = way[j0];
                p[j0] = p[j1];
                j0 = j1;
                if j0 == 0 {
                    break;
                }
            }
        }

        // Project matched (row, column) pairs back onto real bids; pairs
        // resting on the sentinel are unassigned agents.
        let mut selected: Vec<usize> = Vec::new();
        for j in 1..=m {
            let i = p[j];
            if i == 0 || j > target_count {
                continue;
            }
            if let Some(bid_idx) = bid_at[i - 1][j - 1] {
                selected.push(bid_idx);
            }
        }
        selected.sort_unstable_by_key(|&i| bids[i].agent);
        selected
    }
}

// ── GreedyMatcher ─────────────────────────────────────────────────────────────

/// Global greedy: walk all bids by ascending (cost, agent, target) and take
/// each one whose agent and target are both still free.
///
/// No optimality guarantee — two agents crowding the same cheap target can
/// push the loser onto an expensive detour that a swap would beat.  The
/// engine's crossing-repair sweep recovers the common cases; use
/// [`ExactMatcher`] when the optimum matters.
#[derive(Debug, Clone, Default)]
pub struct GreedyMatcher;

impl Matcher for GreedyMatcher {
    fn select(&self, bids: &[Bid], agent_count: usize, target_count: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..bids.len()).collect();
        order.sort_unstable_by(|&a, &b| {
            bids[a]
                .cost()
                .total_cmp(&bids[b].cost())
                .then(bids[a].agent.cmp(&bids[b].agent))
                .then(bids[a].target.cmp(&bids[b].target))
        });

        let mut agent_taken = vec![false; agent_count];
        let mut target_taken = vec![false; target_count];
        let mut selected = Vec::new();
        for i in order {
            let (a, t) = (bids[i].agent.index(), bids[i].target.index());
            if !agent_taken[a] && !target_taken[t] {
                agent_taken[a] = true;
                target_taken[t] = true;
                selected.push(i);
            }
        }
        selected.sort_unstable_by_key(|&i| bids[i].agent);
        selected
    }
}

// ── SharedMatcher ─────────────────────────────────────────────────────────────

/// Shared-target policy: every agent independently takes its cheapest bid;
/// target capacity is unbounded.
#[derive(Debug, Clone, Default)]
pub struct SharedMatcher;

impl Matcher for SharedMatcher {
    fn select(&self, bids: &[Bid], agent_count: usize, _target_count: usize) -> Vec<usize> {
        let mut best: Vec<Option<usize>> = vec![None; agent_count];
        for (i, bid) in bids.iter().enumerate() {
            let slot = &mut best[bid.agent.index()];
            let better = slot.is_none_or(|prev| {
                bids[prev]
                    .cost()
                    .total_cmp(&bid.cost())
                    .then(bids[prev].target.cmp(&bid.target))
                    .is_gt()
            });
            if better {
                *slot = Some(i);
            }
        }
        best.into_iter().flatten().collect()
    }
}
