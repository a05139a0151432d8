//! Human-readable text report.
//!
//! The classic "print the result" path: a compact listing of the scene and
//! every assigned path, written to any `io::Write` (stdout, a log file, a
//! test buffer).  Purely diagnostic — nothing downstream parses it.

use std::io::Write;

use crate::row::{PathRow, SceneRow};
use crate::writer::ReportWriter;
use crate::OutputResult;

/// Writes a pathfind report as indented plain text.
pub struct TextReport<W: Write> {
    out: W,
    finished: bool,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner writer (e.g. to inspect a test buffer).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for TextReport<W> {
    fn write_scene(&mut self, rows: &[SceneRow]) -> OutputResult<()> {
        writeln!(self.out, "scene ({} elements):", rows.len())?;
        for row in rows {
            match row.kind {
                "obstacle" => writeln!(
                    self.out,
                    "  obstacle {} at ({}, {}) r={}",
                    row.id, row.x, row.y, row.radius
                )?,
                _ => writeln!(self.out, "  boundary[{}] = ({}, {})", row.id, row.x, row.y)?,
            }
        }
        Ok(())
    }

    fn write_paths(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        writeln!(self.out, "assignments ({}):", rows.len())?;
        for row in rows {
            writeln!(
                self.out,
                "  result {}: agent {} ({}, {}) -> target {} ({}, {}) length={}",
                row.result_id,
                row.agent_id,
                row.agent_x,
                row.agent_y,
                row.target_id,
                row.target_x,
                row.target_y,
                row.length,
            )?;
            writeln!(self.out, "    via [{}]", row.waypoints)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
