//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `scene.csv` — obstacles and boundary vertices
//! - `paths.csv` — one row per assigned agent

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{PathRow, SceneRow};
use crate::writer::ReportWriter;
use crate::OutputResult;

/// Writes a pathfind report to two CSV files.
pub struct CsvReport {
    scene: Writer<File>,
    paths: Writer<File>,
    finished: bool,
}

impl CsvReport {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut scene = Writer::from_path(dir.join("scene.csv"))?;
        scene.write_record(["kind", "id", "x", "y", "radius"])?;

        let mut paths = Writer::from_path(dir.join("paths.csv"))?;
        paths.write_record([
            "result_id",
            "agent_id",
            "agent_x",
            "agent_y",
            "target_id",
            "target_x",
            "target_y",
            "length",
            "waypoints",
        ])?;

        Ok(Self { scene, paths, finished: false })
    }
}

impl ReportWriter for CsvReport {
    fn write_scene(&mut self, rows: &[SceneRow]) -> OutputResult<()> {
        for row in rows {
            self.scene.write_record(&[
                row.kind.to_string(),
                row.id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.radius.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_paths(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        for row in rows {
            self.paths.write_record(&[
                row.result_id.to_string(),
                row.agent_id.to_string(),
                row.agent_x.to_string(),
                row.agent_y.to_string(),
                row.target_id.to_string(),
                row.target_x.to_string(),
                row.target_y.to_string(),
                row.length.to_string(),
                row.waypoints.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.scene.flush()?;
        self.paths.flush()?;
        Ok(())
    }
}
