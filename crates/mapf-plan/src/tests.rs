//! Unit tests for mapf-plan.
//!
//! Obstacle layouts are hand-crafted so expected path shapes can be asserted
//! deterministically.

#[cfg(test)]
mod helpers {
    use mapf_core::Point;
    use mapf_geom::{Obstacle, ObstacleField};

    pub const EPS: f64 = 1e-9;

    /// Field with a single disk of radius 2 at (5, 5).
    pub fn one_disk() -> ObstacleField {
        ObstacleField::new(vec![Obstacle::new(Point::new(5.0, 5.0), 2.0)], EPS)
    }

    /// Six radius-2 disks on a ring of radius 3 around the origin.  Adjacent
    /// disks overlap, sealing the center pocket from the outside.
    pub fn sealed_pocket() -> ObstacleField {
        let obstacles = (0..6)
            .map(|k| {
                let angle = std::f64::consts::PI / 3.0 * k as f64;
                Obstacle::new(Point::new(3.0 * angle.cos(), 3.0 * angle.sin()), 2.0)
            })
            .collect();
        ObstacleField::new(obstacles, EPS)
    }

    /// Max over all path segments of the disk-interior penetration depth
    /// against `field` — ≤ 0 means the path never enters any disk.
    pub fn max_penetration(path: &[Point], field: &ObstacleField) -> f64 {
        let mut worst = f64::NEG_INFINITY;
        for w in path.windows(2) {
            for o in field.obstacles() {
                let d = mapf_geom::point_segment_distance(o.center, w[0], w[1]);
                worst = worst.max(o.radius - d);
            }
        }
        worst
    }
}

#[cfg(test)]
mod path {
    use mapf_core::Point;

    use crate::PlannedPath;

    #[test]
    fn single_point_is_trivial() {
        let p = PlannedPath::single(Point::new(1.0, 2.0));
        assert!(p.is_trivial());
        assert_eq!(p.length(), 0.0);
        assert_eq!(p.start(), p.end());
    }

    #[test]
    fn length_sums_segments() {
        let p = PlannedPath::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 10.0),
        ]);
        assert_eq!(p.length(), 11.0);
        assert_eq!(p.start(), Point::new(0.0, 0.0));
        assert_eq!(p.end(), Point::new(3.0, 10.0));
    }
}

#[cfg(test)]
mod graph {
    use mapf_core::Point;
    use mapf_geom::{Boundary, Obstacle, ObstacleField};

    use crate::VisibilityGraph;

    use super::helpers::EPS;

    #[test]
    fn ring_waypoints_stay_out_of_own_disk() {
        let field = super::helpers::one_disk();
        let g = VisibilityGraph::build(&field, None, 16);
        assert_eq!(g.waypoint_count(), 16);
        for &wp in g.waypoints() {
            assert!(wp.dist(Point::new(5.0, 5.0)) >= 2.0);
        }
    }

    #[test]
    fn adjacent_ring_points_are_connected() {
        let field = super::helpers::one_disk();
        let g = VisibilityGraph::build(&field, None, 16);
        // Each ring point must see at least its two ring neighbors.
        for i in 0..g.waypoint_count() {
            assert!(g.neighbors(i).len() >= 2, "waypoint {i} is isolated");
        }
    }

    #[test]
    fn zero_radius_obstacle_gets_no_ring() {
        let field = ObstacleField::new(
            vec![Obstacle::new(Point::new(1.0, 1.0), 0.0)],
            EPS,
        );
        let g = VisibilityGraph::build(&field, None, 16);
        assert_eq!(g.waypoint_count(), 0);
    }

    #[test]
    fn out_of_bounds_waypoints_filtered() {
        // Disk butting against the top edge: its upper ring points fall
        // outside the boundary and must be discarded.
        let field = ObstacleField::new(
            vec![Obstacle::new(Point::new(5.0, 9.8), 1.0)],
            EPS,
        );
        let boundary = Boundary::rect(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap();
        let g = VisibilityGraph::build(&field, Some(&boundary), 16);
        assert!(g.waypoint_count() < 16);
        for &wp in g.waypoints() {
            assert!(boundary.contains(wp, EPS));
        }
    }

    #[test]
    fn waypoints_inside_other_disks_filtered() {
        // Two heavily overlapping disks: ring points of each that land in
        // the other's interior are discarded.
        let field = ObstacleField::new(
            vec![
                Obstacle::new(Point::new(0.0, 0.0), 2.0),
                Obstacle::new(Point::new(1.0, 0.0), 2.0),
            ],
            EPS,
        );
        let g = VisibilityGraph::build(&field, None, 16);
        assert!(g.waypoint_count() < 32);
        for &wp in g.waypoints() {
            assert!(field.interior_containing(wp).is_none());
        }
    }
}

#[cfg(test)]
mod planner {
    use mapf_core::Point;
    use mapf_geom::{Boundary, Obstacle, ObstacleField};

    use crate::{PlanError, Planner, VisibilityPlanner};

    use super::helpers::{max_penetration, one_disk, sealed_pocket, EPS};

    #[test]
    fn trivial_when_start_equals_goal() {
        let field = ObstacleField::new(vec![], EPS);
        let p = VisibilityPlanner::new(&field, None, 16, None);
        let path = p.plan(Point::new(3.0, 3.0), Point::new(3.0, 3.0)).unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.length(), 0.0);
    }

    #[test]
    fn straight_line_with_no_obstacles() {
        let field = ObstacleField::new(vec![], EPS);
        let p = VisibilityPlanner::new(&field, None, 16, None);
        let path = p.plan(Point::new(0.0, 0.0), Point::new(3.0, 4.0)).unwrap();
        assert_eq!(path.points().len(), 2);
        assert_eq!(path.length(), 5.0);
        assert_eq!(path.start(), Point::new(0.0, 0.0));
        assert_eq!(path.end(), Point::new(3.0, 4.0));
    }

    #[test]
    fn detours_around_blocking_disk() {
        let field = one_disk();
        let p = VisibilityPlanner::new(&field, None, 16, None);
        let start = Point::new(0.0, 5.0);
        let goal = Point::new(10.0, 5.0);
        let path = p.plan(start, goal).unwrap();

        assert_eq!(path.start(), start);
        assert_eq!(path.end(), goal);
        // Strictly longer than the blocked straight line, but still a sane
        // detour (the optimal tangent route is ≈ 11).
        assert!(path.length() > 10.0);
        assert!(path.length() < 12.0);
        // No segment enters the disk (grazing tolerance allowed).
        assert!(max_penetration(path.points(), &field) <= EPS);
    }

    #[test]
    fn removing_the_obstacle_never_lengthens_the_path() {
        let start = Point::new(0.0, 5.0);
        let goal = Point::new(10.0, 5.0);

        let with = one_disk();
        let without = ObstacleField::new(vec![], EPS);

        let blocked = VisibilityPlanner::new(&with, None, 16, None)
            .plan(start, goal)
            .unwrap();
        let free = VisibilityPlanner::new(&without, None, 16, None)
            .plan(start, goal)
            .unwrap();
        assert!(free.length() <= blocked.length());
    }

    #[test]
    fn start_on_rim_is_feasible() {
        let field = one_disk();
        let p = VisibilityPlanner::new(&field, None, 16, None);
        // (3, 5) is exactly radius 2 from the center (5, 5).
        let path = p.plan(Point::new(3.0, 5.0), Point::new(9.0, 5.0)).unwrap();
        assert_eq!(path.start(), Point::new(3.0, 5.0));
        assert!(max_penetration(path.points(), &field) <= EPS);
    }

    #[test]
    fn start_inside_disk_rejected() {
        let field = one_disk();
        let p = VisibilityPlanner::new(&field, None, 16, None);
        let r = p.plan(Point::new(5.0, 5.0), Point::new(9.0, 9.0));
        assert!(matches!(r, Err(PlanError::StartBlocked(_))));
    }

    #[test]
    fn goal_inside_disk_rejected() {
        let field = one_disk();
        let p = VisibilityPlanner::new(&field, None, 16, None);
        let r = p.plan(Point::new(0.0, 0.0), Point::new(5.5, 5.0));
        assert!(matches!(r, Err(PlanError::GoalBlocked(_))));
    }

    #[test]
    fn out_of_bounds_endpoints_rejected() {
        let field = ObstacleField::new(vec![], EPS);
        let boundary = Boundary::rect(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap();
        let p = VisibilityPlanner::new(&field, Some(&boundary), 16, None);

        let r = p.plan(Point::new(-1.0, 5.0), Point::new(5.0, 5.0));
        assert!(matches!(r, Err(PlanError::StartOutOfBounds)));
        let r = p.plan(Point::new(5.0, 5.0), Point::new(11.0, 5.0));
        assert!(matches!(r, Err(PlanError::GoalOutOfBounds)));
    }

    #[test]
    fn sealed_pocket_is_unreachable() {
        let field = sealed_pocket();
        let p = VisibilityPlanner::new(&field, None, 16, None);
        let r = p.plan(Point::new(10.0, 0.5), Point::new(0.0, 0.0));
        assert!(matches!(r, Err(PlanError::Unreachable)));
    }

    #[test]
    fn budget_exhaustion_fails_cleanly() {
        let field = one_disk();
        let p = VisibilityPlanner::new(&field, None, 16, Some(0));
        // Direct route is blocked, so A* must run — and immediately trips
        // the zero budget.
        let r = p.plan(Point::new(0.0, 5.0), Point::new(10.0, 5.0));
        assert!(matches!(r, Err(PlanError::BudgetExceeded(_))));
    }

    #[test]
    fn budget_large_enough_still_succeeds() {
        let field = one_disk();
        let p = VisibilityPlanner::new(&field, None, 16, Some(10_000));
        assert!(p.plan(Point::new(0.0, 5.0), Point::new(10.0, 5.0)).is_ok());
    }

    #[test]
    fn boundary_forces_detour_to_stay_inside() {
        // Disk overlapping the top edge: the short way over the top is out
        // of bounds, so the path must dip below the disk.
        let field = ObstacleField::new(
            vec![Obstacle::new(Point::new(5.0, 9.5), 0.8)],
            EPS,
        );
        let boundary = Boundary::rect(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap();
        let p = VisibilityPlanner::new(&field, Some(&boundary), 16, None);
        let path = p
            .plan(Point::new(0.0, 9.5), Point::new(10.0, 9.5))
            .unwrap();
        for &pt in path.points() {
            assert!(boundary.contains(pt, EPS));
        }
        assert!(max_penetration(path.points(), &field) <= EPS);
    }

    #[test]
    fn repeated_queries_are_bitwise_identical() {
        let field = one_disk();
        let start = Point::new(0.0, 5.0);
        let goal = Point::new(10.0, 5.0);

        let a = VisibilityPlanner::new(&field, None, 16, None)
            .plan(start, goal)
            .unwrap();
        let b = VisibilityPlanner::new(&field, None, 16, None)
            .plan(start, goal)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn more_waypoints_tighten_the_detour() {
        let field = one_disk();
        let start = Point::new(0.0, 5.0);
        let goal = Point::new(10.0, 5.0);

        let coarse = VisibilityPlanner::new(&field, None, 8, None)
            .plan(start, goal)
            .unwrap();
        let fine = VisibilityPlanner::new(&field, None, 64, None)
            .plan(start, goal)
            .unwrap();
        assert!(fine.length() <= coarse.length());
    }
}
