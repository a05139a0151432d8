//! The `ReportWriter` trait implemented by all backends.

use mapf_engine::{PathfindOutcome, Scenario};

use crate::row::{path_rows, scene_rows, PathRow, SceneRow};
use crate::OutputResult;

/// Trait implemented by CSV, SQLite, and text report writers.
pub trait ReportWriter {
    /// Write the static scene geometry (obstacles + boundary).
    fn write_scene(&mut self, rows: &[SceneRow]) -> OutputResult<()>;

    /// Write a batch of assigned-path rows.
    fn write_paths(&mut self, rows: &[PathRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Drive a writer end to end for one scenario/outcome pair.
pub fn write_report<W: ReportWriter>(
    writer: &mut W,
    scenario: &Scenario,
    outcome: &PathfindOutcome,
) -> OutputResult<()> {
    writer.write_scene(&scene_rows(scenario))?;
    writer.write_paths(&path_rows(outcome))?;
    writer.finish()
}
