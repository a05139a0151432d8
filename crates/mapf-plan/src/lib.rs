//! `mapf-plan` — single-agent path planning over circular obstacles.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`path`]    | `PlannedPath` (ordered waypoints + total length)         |
//! | [`graph`]   | `VisibilityGraph` (obstacle-ring waypoints + edges)      |
//! | [`planner`] | `Planner` trait, `VisibilityPlanner` (A* over the graph) |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod error;
pub mod graph;
pub mod path;
pub mod planner;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use graph::VisibilityGraph;
pub use path::PlannedPath;
pub use planner::{Planner, VisibilityPlanner};
