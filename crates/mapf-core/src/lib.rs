//! `mapf-core` — foundational types for the `mapf` multi-agent pathfinding
//! engine.
//!
//! This crate is a dependency of every other `mapf-*` crate.  It intentionally
//! has no `mapf-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `TargetId`, `ObstacleId`                  |
//! | [`point`]   | `Point`, Euclidean distance                          |
//! | [`config`]  | `PathfindConfig`, `AssignmentPolicy`, `SolverMode`   |
//! | [`error`]   | `CoreError`, `CoreResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod config;
pub mod error;
pub mod ids;
pub mod point;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AssignmentPolicy, PathfindConfig, SolverMode, DEFAULT_MAX_AGENTS};
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, ObstacleId, TargetId};
pub use point::Point;
