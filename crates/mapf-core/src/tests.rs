//! Unit tests for mapf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ObstacleId, TargetId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(TargetId(100) > TargetId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(TargetId::INVALID.0, u32::MAX);
        assert_eq!(ObstacleId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod point {
    use crate::Point;

    #[test]
    fn zero_distance() {
        let p = Point::new(3.5, -2.0);
        assert_eq!(p.dist(p), 0.0);
    }

    #[test]
    fn pythagorean_triple() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.dist(b), 5.0);
        assert_eq!(a.dist_sq(b), 25.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(-4.0, 0.5);
        assert_eq!(a.dist(b), b.dist(a));
    }

    #[test]
    fn finiteness() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }
}

#[cfg(test)]
mod config {
    use crate::{AssignmentPolicy, PathfindConfig, SolverMode, DEFAULT_MAX_AGENTS};

    #[test]
    fn defaults() {
        let c = PathfindConfig::default();
        assert_eq!(c.max_agents, DEFAULT_MAX_AGENTS);
        assert_eq!(c.policy, AssignmentPolicy::Exclusive);
        assert_eq!(c.solver, SolverMode::Exact);
        assert_eq!(c.waypoints_per_obstacle, 16);
        assert!(c.search_budget.is_none());
    }

    #[test]
    fn validation_rejects_broken_configs() {
        let ok = PathfindConfig::default();
        assert!(ok.validate().is_ok());

        let zero_agents = PathfindConfig { max_agents: 0, ..Default::default() };
        assert!(zero_agents.validate().is_err());

        let thin_ring = PathfindConfig { waypoints_per_obstacle: 2, ..Default::default() };
        assert!(thin_ring.validate().is_err());

        let nan_eps = PathfindConfig { epsilon: f64::NAN, ..Default::default() };
        assert!(nan_eps.validate().is_err());

        let negative_eps = PathfindConfig { epsilon: -1.0, ..Default::default() };
        assert!(negative_eps.validate().is_err());
    }

    #[test]
    fn repair_follows_solver_unless_forced() {
        let mut c = PathfindConfig::default();
        assert!(!c.repair_enabled()); // Exact → off

        c.solver = SolverMode::Greedy;
        assert!(c.repair_enabled()); // Greedy → on

        c.repair_crossings = Some(false);
        assert!(!c.repair_enabled()); // explicit override wins
    }
}
