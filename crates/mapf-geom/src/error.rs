//! Geometry-subsystem error type.

use thiserror::Error;

use mapf_core::Point;

/// Errors produced by `mapf-geom` construction.
#[derive(Debug, Error)]
pub enum GeomError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("polygon has zero area")]
    ZeroArea,

    #[error("polygon is self-intersecting or has repeated vertices")]
    SelfIntersecting,

    #[error("non-finite vertex {0}")]
    NonFinite(Point),
}

pub type GeomResult<T> = Result<T, GeomError>;
