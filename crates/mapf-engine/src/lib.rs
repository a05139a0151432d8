//! `mapf-engine` — the one-shot multi-agent pathfinding entry point.
//!
//! # Pipeline
//!
//! ```text
//! pathfind(scenario, config):
//!   ① Validate   — agent cap, finiteness, radii, endpoints vs obstacles
//!                  and boundary; any failure fails the whole call.
//!   ② Index      — build the ObstacleField and the shared visibility graph.
//!   ③ Bid        — one planner query per (agent, target) pair
//!                  (parallel with the `parallel` feature); infeasible
//!                  pairs are dropped, never errors.
//!   ④ Resolve    — the configured Matcher selects at most one bid per
//!                  agent (and per target, under the exclusive policy).
//!                  This stage is the synchronization barrier.
//!   ⑤ Aggregate  — project selected bids into PathfindResults; list
//!                  unassigned agents explicitly.
//!   ⑥ Repair     — optional crossing-repair sweep (on by default for the
//!                  greedy solver).
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                |
//! |------------|-------------------------------------------------------|
//! | `parallel` | Runs the bid stage on Rayon's thread pool.            |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mapf_core::{PathfindConfig, Point};
//! use mapf_engine::{pathfind, Scenario};
//! use mapf_geom::Obstacle;
//!
//! let scenario = Scenario {
//!     agents:    vec![Point::new(0.0, 5.0)],
//!     targets:   vec![Point::new(10.0, 5.0)],
//!     obstacles: vec![Obstacle::new(Point::new(5.0, 5.0), 2.0)],
//!     boundary:  None,
//! };
//! let outcome = pathfind(&scenario, &PathfindConfig::default())?;
//! ```

pub mod engine;
pub mod error;
pub mod scenario;
pub mod validate;


pub use engine::pathfind;
pub use error::{EngineError, EngineResult, ValidationError};
pub use scenario::{PathfindOutcome, PathfindResult, Scenario};
pub use validate::validate;
