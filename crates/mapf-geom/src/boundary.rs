//! Optional bounding polygon constraining all path geometry.

use mapf_core::Point;

use crate::error::{GeomError, GeomResult};
use crate::segment::{point_segment_distance, segments_properly_intersect};

/// A simple (non-self-intersecting) polygon with nonzero area.
///
/// Vertices are stored open — the closing edge from last back to first is
/// implicit.  Construction validates simplicity once so every later query can
/// assume it.  Containment is boundary-inclusive: a point on an edge is
/// inside, so paths may graze the boundary without leaving it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundary {
    vertices: Vec<Point>,
}

impl Boundary {
    /// Build a boundary from its vertex ring, validating that it forms a
    /// simple polygon: ≥ 3 finite vertices, nonzero area, no edge pair
    /// properly crossing, no repeated vertex.
    pub fn new(vertices: Vec<Point>) -> GeomResult<Self> {
        if vertices.len() < 3 {
            return Err(GeomError::TooFewVertices(vertices.len()));
        }
        if let Some(v) = vertices.iter().find(|v| !v.is_finite()) {
            return Err(GeomError::NonFinite(*v));
        }

        let n = vertices.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if vertices[i] == vertices[j] {
                    return Err(GeomError::SelfIntersecting);
                }
            }
        }

        // Edge i runs vertices[i] → vertices[(i+1) % n].  Adjacent edges
        // share a vertex and are skipped; any proper crossing between
        // non-adjacent edges makes the polygon non-simple.
        for i in 0..n {
            let (a, b) = (vertices[i], vertices[(i + 1) % n]);
            for j in (i + 1)..n {
                if j == i || (j + 1) % n == i || (i + 1) % n == j {
                    continue;
                }
                let (c, d) = (vertices[j], vertices[(j + 1) % n]);
                if segments_properly_intersect(a, b, c, d) {
                    return Err(GeomError::SelfIntersecting);
                }
            }
        }

        let boundary = Self { vertices };
        if boundary.area() == 0.0 {
            return Err(GeomError::ZeroArea);
        }
        Ok(boundary)
    }

    /// Axis-aligned rectangle from opposite corners.
    pub fn rect(min: Point, max: Point) -> GeomResult<Self> {
        Self::new(vec![
            min,
            Point::new(max.x, min.y),
            max,
            Point::new(min.x, max.y),
        ])
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Unsigned polygon area via the shoelace formula.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let mut twice_area = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            twice_area += a.x * b.y - b.x * a.y;
        }
        twice_area.abs() / 2.0
    }

    /// Boundary-inclusive point containment.
    ///
    /// A point within `epsilon` of any edge counts as inside; otherwise
    /// even-odd ray casting decides.
    pub fn contains(&self, p: Point, epsilon: f64) -> bool {
        let n = self.vertices.len();
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            if point_segment_distance(p, a, b) <= epsilon {
                return true;
            }
        }

        // Even-odd ray cast along +x.  The half-open comparison on y makes
        // vertex hits count exactly once.
        let mut inside = false;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// `true` iff the whole segment `ab` stays within the boundary: both
    /// endpoints inside and no boundary edge properly crossed.  Grazing an
    /// edge from the inside is admitted.
    pub fn admits_segment(&self, a: Point, b: Point, epsilon: f64) -> bool {
        if !self.contains(a, epsilon) || !self.contains(b, epsilon) {
            return false;
        }
        let n = self.vertices.len();
        for i in 0..n {
            let c = self.vertices[i];
            let d = self.vertices[(i + 1) % n];
            if segments_properly_intersect(a, b, c, d) {
                return false;
            }
        }
        true
    }
}
