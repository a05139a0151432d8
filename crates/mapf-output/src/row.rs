//! Plain data row types written by report backends.

use mapf_engine::{PathfindOutcome, Scenario};

/// One scene element: an obstacle disk or a boundary vertex.
///
/// `kind` is `"obstacle"` (radius set) or `"boundary"` (radius 0, `id` is
/// the vertex position in ring order).
#[derive(Debug, Clone, PartialEq)]
pub struct SceneRow {
    pub kind: &'static str,
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// One assigned agent's path.
///
/// `waypoints` serializes the polyline as `"x y; x y; …"` so a row stays a
/// flat record any CSV/SQL consumer can split on `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRow {
    pub result_id: u32,
    pub agent_id: u32,
    pub agent_x: f64,
    pub agent_y: f64,
    pub target_id: u32,
    pub target_x: f64,
    pub target_y: f64,
    pub length: f64,
    pub waypoints: String,
}

/// Project a scenario's static geometry into scene rows: obstacles first,
/// then boundary vertices in ring order.
pub fn scene_rows(scenario: &Scenario) -> Vec<SceneRow> {
    let mut rows = Vec::new();
    for (i, o) in scenario.obstacles.iter().enumerate() {
        rows.push(SceneRow {
            kind: "obstacle",
            id: i as u32,
            x: o.center.x,
            y: o.center.y,
            radius: o.radius,
        });
    }
    if let Some(boundary) = &scenario.boundary {
        for (i, v) in boundary.vertices().iter().enumerate() {
            rows.push(SceneRow { kind: "boundary", id: i as u32, x: v.x, y: v.y, radius: 0.0 });
        }
    }
    rows
}

/// Project an outcome's results into path rows, preserving result order.
pub fn path_rows(outcome: &PathfindOutcome) -> Vec<PathRow> {
    outcome
        .results
        .iter()
        .map(|r| PathRow {
            result_id: r.id,
            agent_id: r.agent.0,
            agent_x: r.agent_pos.x,
            agent_y: r.agent_pos.y,
            target_id: r.target.0,
            target_x: r.target_pos.x,
            target_y: r.target_pos.y,
            length: r.path.length(),
            waypoints: r
                .path
                .points()
                .iter()
                .map(|p| format!("{} {}", p.x, p.y))
                .collect::<Vec<_>>()
                .join("; "),
        })
        .collect()
}
