//! `mapf-assign` — consuming bids into an agent-to-target assignment.
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`bid`]     | `Bid` (agent, target, path, cost)                      |
//! | [`matcher`] | `Matcher` trait, `ExactMatcher`, `GreedyMatcher`, `SharedMatcher` |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod bid;
pub mod matcher;


pub use bid::Bid;
pub use matcher::{matcher_for, ExactMatcher, GreedyMatcher, Matcher, SharedMatcher};
