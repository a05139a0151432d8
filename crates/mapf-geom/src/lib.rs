//! `mapf-geom` — obstacle model, boundary polygon, and spatial indexing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`segment`]  | point-segment distance, orientation, intersection tests |
//! | [`obstacle`] | `Obstacle` (circular exclusion zone)                    |
//! | [`boundary`] | `Boundary` (simple polygon), containment queries        |
//! | [`field`]    | `ObstacleField` (obstacle set + R-tree broad phase)     |
//! | [`error`]    | `GeomError`, `GeomResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod boundary;
pub mod error;
pub mod field;
pub mod obstacle;
pub mod segment;

#[cfg(test)]
mod tests;

pub use boundary::Boundary;
pub use error::{GeomError, GeomResult};
pub use field::ObstacleField;
pub use obstacle::Obstacle;
pub use segment::{point_segment_distance, polylines_properly_intersect, segments_properly_intersect};
