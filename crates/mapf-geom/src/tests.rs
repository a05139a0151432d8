//! Unit tests for mapf-geom.
//!
//! All tests use hand-crafted coordinates with exactly representable values
//! so assertions can be exact where the math is exact.

#[cfg(test)]
mod segment {
    use mapf_core::Point;

    use crate::segment::{
        point_segment_distance, polylines_properly_intersect, segments_properly_intersect,
    };

    #[test]
    fn perpendicular_foot_inside() {
        let d = point_segment_distance(
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
        );
        assert_eq!(d, 1.0);
    }

    #[test]
    fn foot_clamped_to_endpoint() {
        // Projection falls beyond b; nearest point is b itself.
        let d = point_segment_distance(
            Point::new(5.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
        );
        assert_eq!(d, 3.0);
    }

    #[test]
    fn degenerate_segment_is_point_distance() {
        let p = Point::new(3.0, 4.0);
        let a = Point::new(0.0, 0.0);
        assert_eq!(point_segment_distance(p, a, a), 5.0);
    }

    #[test]
    fn crossing_segments() {
        assert!(segments_properly_intersect(
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0),
        ));
    }

    #[test]
    fn touching_at_endpoint_is_not_proper() {
        assert!(!segments_properly_intersect(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.0),
        ));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        assert!(!segments_properly_intersect(
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(2.0, 1.0),
        ));
    }

    #[test]
    fn polyline_crossing() {
        // An X between two 2-segment polylines.
        let p1 = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let p2 = [Point::new(0.0, 2.0), Point::new(1.0, 1.5), Point::new(2.0, 0.0)];
        assert!(polylines_properly_intersect(&p1, &p2));

        let p3 = [Point::new(0.0, 5.0), Point::new(2.0, 5.0)];
        assert!(!polylines_properly_intersect(&p1, &p3));
    }
}

#[cfg(test)]
mod obstacle {
    use mapf_core::Point;

    use crate::Obstacle;

    const EPS: f64 = 1e-9;

    #[test]
    fn containment_is_rim_inclusive() {
        let o = Obstacle::new(Point::new(0.0, 0.0), 2.0);
        assert!(o.contains(Point::new(1.0, 0.0)));
        assert!(o.contains(Point::new(2.0, 0.0))); // exactly on the rim
        assert!(!o.contains(Point::new(2.1, 0.0)));
    }

    #[test]
    fn interior_excludes_rim() {
        let o = Obstacle::new(Point::new(0.0, 0.0), 2.0);
        assert!(o.interior_contains(Point::new(1.0, 0.0), EPS));
        // Exactly on the rim: feasible, not interior.
        assert!(!o.interior_contains(Point::new(2.0, 0.0), EPS));
    }

    #[test]
    fn segment_through_center_blocked() {
        let o = Obstacle::new(Point::new(5.0, 5.0), 1.0);
        assert!(o.blocks(Point::new(0.0, 5.0), Point::new(10.0, 5.0), EPS));
    }

    #[test]
    fn tangent_segment_grazes_legally() {
        let o = Obstacle::new(Point::new(5.0, 5.0), 1.0);
        // Horizontal line exactly tangent to the top of the disk.
        assert!(!o.blocks(Point::new(0.0, 6.0), Point::new(10.0, 6.0), EPS));
    }

    #[test]
    fn segment_far_from_disk() {
        let o = Obstacle::new(Point::new(5.0, 5.0), 1.0);
        assert!(!o.blocks(Point::new(0.0, 0.0), Point::new(10.0, 0.0), EPS));
    }

    #[test]
    fn zero_radius_point_blocker() {
        let o = Obstacle::new(Point::new(1.0, 0.0), 0.0);
        // A zero-radius disk has no interior; nothing is ever blocked.
        assert!(!o.blocks(Point::new(0.0, 0.0), Point::new(2.0, 0.0), EPS));
        assert!(o.contains(Point::new(1.0, 0.0)));
    }
}

#[cfg(test)]
mod boundary {
    use mapf_core::Point;

    use crate::{Boundary, GeomError};

    const EPS: f64 = 1e-9;

    fn unit_square() -> Boundary {
        Boundary::rect(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap()
    }

    #[test]
    fn rect_area() {
        assert_eq!(unit_square().area(), 100.0);
    }

    #[test]
    fn too_few_vertices() {
        let r = Boundary::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert!(matches!(r, Err(GeomError::TooFewVertices(2))));
    }

    #[test]
    fn zero_area_rejected() {
        // Three collinear points.
        let r = Boundary::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ]);
        assert!(matches!(r, Err(GeomError::ZeroArea)));
    }

    #[test]
    fn bowtie_rejected() {
        let r = Boundary::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 2.0),
        ]);
        assert!(matches!(r, Err(GeomError::SelfIntersecting)));
    }

    #[test]
    fn containment_inside_outside() {
        let b = unit_square();
        assert!(b.contains(Point::new(5.0, 5.0), EPS));
        assert!(!b.contains(Point::new(-1.0, 5.0), EPS));
        assert!(!b.contains(Point::new(5.0, 10.5), EPS));
    }

    #[test]
    fn containment_is_edge_inclusive() {
        let b = unit_square();
        assert!(b.contains(Point::new(0.0, 5.0), EPS)); // on the left edge
        assert!(b.contains(Point::new(10.0, 10.0), EPS)); // on a corner
    }

    #[test]
    fn concave_polygon_containment() {
        // L-shape: the notch at the top right is outside.
        let b = Boundary::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 5.0),
            Point::new(5.0, 10.0),
            Point::new(0.0, 10.0),
        ])
        .unwrap();
        assert!(b.contains(Point::new(2.0, 8.0), EPS));
        assert!(b.contains(Point::new(8.0, 2.0), EPS));
        assert!(!b.contains(Point::new(8.0, 8.0), EPS)); // in the notch
    }

    #[test]
    fn admits_interior_segment() {
        let b = unit_square();
        assert!(b.admits_segment(Point::new(1.0, 1.0), Point::new(9.0, 9.0), EPS));
    }

    #[test]
    fn rejects_exiting_segment() {
        let b = unit_square();
        assert!(!b.admits_segment(Point::new(5.0, 5.0), Point::new(15.0, 5.0), EPS));
    }

    #[test]
    fn rejects_notch_shortcut() {
        // Both endpoints inside the L-shape, straight segment cuts the notch.
        let b = Boundary::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 5.0),
            Point::new(5.0, 10.0),
            Point::new(0.0, 10.0),
        ])
        .unwrap();
        assert!(!b.admits_segment(Point::new(2.0, 9.0), Point::new(9.0, 2.0), EPS));
    }
}

#[cfg(test)]
mod field {
    use mapf_core::{ObstacleId, Point};

    use crate::{Obstacle, ObstacleField};

    const EPS: f64 = 1e-9;

    fn two_disk_field() -> ObstacleField {
        ObstacleField::new(
            vec![
                Obstacle::new(Point::new(5.0, 5.0), 2.0),
                Obstacle::new(Point::new(20.0, 5.0), 1.0),
            ],
            EPS,
        )
    }

    #[test]
    fn dimensions() {
        let f = two_disk_field();
        assert_eq!(f.len(), 2);
        assert!(!f.is_empty());
        assert_eq!(f.get(ObstacleId(1)).radius, 1.0);
    }

    #[test]
    fn segment_blocked_by_first_disk_only() {
        let f = two_disk_field();
        // Passes through disk 0, stops well short of disk 1.
        assert!(f.blocks_segment(Point::new(0.0, 5.0), Point::new(10.0, 5.0)));
        // Entirely below both disks.
        assert!(!f.blocks_segment(Point::new(0.0, 0.0), Point::new(30.0, 0.0)));
    }

    #[test]
    fn broad_phase_does_not_miss_long_segments() {
        let f = two_disk_field();
        // Spans both disk envelopes.
        assert!(f.blocks_segment(Point::new(0.0, 5.0), Point::new(30.0, 5.0)));
    }

    #[test]
    fn interior_query_picks_lowest_id() {
        let f = ObstacleField::new(
            vec![
                Obstacle::new(Point::new(0.0, 0.0), 5.0),
                Obstacle::new(Point::new(1.0, 0.0), 5.0),
            ],
            EPS,
        );
        // Inside both disks — lowest index wins deterministically.
        assert_eq!(f.interior_containing(Point::new(0.5, 0.0)), Some(ObstacleId(0)));
        assert_eq!(f.interior_containing(Point::new(100.0, 0.0)), None);
    }

    #[test]
    fn empty_field_blocks_nothing() {
        let f = ObstacleField::new(vec![], EPS);
        assert!(!f.blocks_segment(Point::new(0.0, 0.0), Point::new(100.0, 100.0)));
        assert!(f.interior_containing(Point::new(0.0, 0.0)).is_none());
    }
}
