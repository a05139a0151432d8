//! scatter — smallest end-to-end demo of the mapf engine.
//!
//! Four agents bid on four targets inside a 10×10 arena with two fixed
//! obstacles plus a seeded scattering of small ones.  Writes `scene.csv` and
//! `paths.csv` to `output/scatter/` for plotting, and prints the assignment
//! table.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use mapf_core::{PathfindConfig, Point};
use mapf_engine::{pathfind, Scenario};
use mapf_geom::{Boundary, Obstacle};
use mapf_output::{write_report, CsvReport};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const EXTRA_OBSTACLES: usize = 3;
const ARENA_MIN: f64 = 0.0;
const ARENA_MAX: f64 = 10.0;

// ── Scenario construction ─────────────────────────────────────────────────────

/// Fixed agents/targets with two large obstacles, plus `EXTRA_OBSTACLES`
/// small seeded ones.  Random obstacles are rejection-sampled so they never
/// swallow an agent or a target — the scenario always validates.
fn build_scenario() -> Scenario {
    let agents = vec![
        Point::new(4.0, 7.0),
        Point::new(2.0, 9.0),
        Point::new(2.0, 3.0),
        Point::new(8.0, 2.0),
    ];
    let targets = vec![
        Point::new(8.0, 9.0),
        Point::new(7.0, 9.0),
        Point::new(2.0, 1.0),
        Point::new(5.0, 2.0),
    ];

    let mut obstacles = vec![
        Obstacle::new(Point::new(5.0, 5.0), 2.0),
        Obstacle::new(Point::new(2.0, 2.0), 0.5),
    ];

    let mut rng = SmallRng::seed_from_u64(SEED);
    while obstacles.len() < 2 + EXTRA_OBSTACLES {
        let candidate = Obstacle::new(
            Point::new(rng.gen_range(1.0..9.0), rng.gen_range(1.0..9.0)),
            rng.gen_range(0.2..0.6),
        );
        let clear = agents
            .iter()
            .chain(targets.iter())
            .all(|&p| p.dist(candidate.center) > candidate.radius + 0.2);
        if clear {
            obstacles.push(candidate);
        }
    }

    Scenario {
        agents,
        targets,
        obstacles,
        boundary: Some(
            Boundary::rect(
                Point::new(ARENA_MIN, ARENA_MIN),
                Point::new(ARENA_MAX, ARENA_MAX),
            )
            .expect("rectangular arena is a valid boundary"),
        ),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== scatter — mapf demo ===");
    println!("Seed: {SEED}  |  Arena: {ARENA_MIN}..{ARENA_MAX}");
    println!();

    // 1. Build the scenario.
    let scenario = build_scenario();
    println!(
        "Scenario: {} agents, {} targets, {} obstacles",
        scenario.agents.len(),
        scenario.targets.len(),
        scenario.obstacles.len()
    );

    // 2. Configure: exclusive targets, exact assignment.
    let config = PathfindConfig::default();
    println!(
        "Config: policy={:?}, solver={:?}, waypoints/obstacle={}",
        config.policy, config.solver, config.waypoints_per_obstacle
    );
    println!();

    // 3. Run the engine.
    let t0 = Instant::now();
    let outcome = pathfind(&scenario, &config)?;
    let elapsed = t0.elapsed();
    println!(
        "Solved in {:.3} ms: {} assigned, {} unassigned, total cost {:.3}",
        elapsed.as_secs_f64() * 1e3,
        outcome.results.len(),
        outcome.unassigned.len(),
        outcome.total_cost()
    );
    println!();

    // 4. Write the CSV report for plotting.
    std::fs::create_dir_all("output/scatter")?;
    let mut report = CsvReport::new(Path::new("output/scatter"))?;
    write_report(&mut report, &scenario, &outcome)?;
    println!("Report written to output/scatter/{{scene,paths}}.csv");
    println!();

    // 5. Assignment table.
    println!(
        "{:<8} {:<14} {:<14} {:<10} {:<6}",
        "Agent", "From", "To", "Length", "Via"
    );
    println!("{}", "-".repeat(56));
    for r in &outcome.results {
        println!(
            "{:<8} {:<14} {:<14} {:<10.3} {:<6}",
            r.agent.0,
            format!("({}, {})", r.agent_pos.x, r.agent_pos.y),
            format!("({}, {})", r.target_pos.x, r.target_pos.y),
            r.path.length(),
            r.path.points().len(),
        );
    }
    for &a in &outcome.unassigned {
        println!("{:<8} (no assignment)", a.0);
    }

    Ok(())
}
