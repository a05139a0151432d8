//! SQLite report backend (feature `sqlite`).
//!
//! Creates a single `report.db` file in the configured output directory with
//! two tables: `scene` and `paths`.

use std::path::Path;

use rusqlite::Connection;

use crate::row::{PathRow, SceneRow};
use crate::writer::ReportWriter;
use crate::OutputResult;

/// Writes a pathfind report to an SQLite database.
pub struct SqliteReport {
    conn: Connection,
    finished: bool,
}

impl SqliteReport {
    /// Open (or create) `report.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("report.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS scene (
                 kind   TEXT    NOT NULL,
                 id     INTEGER NOT NULL,
                 x      REAL    NOT NULL,
                 y      REAL    NOT NULL,
                 radius REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS paths (
                 result_id INTEGER PRIMARY KEY,
                 agent_id  INTEGER NOT NULL,
                 agent_x   REAL    NOT NULL,
                 agent_y   REAL    NOT NULL,
                 target_id INTEGER NOT NULL,
                 target_x  REAL    NOT NULL,
                 target_y  REAL    NOT NULL,
                 length    REAL    NOT NULL,
                 waypoints TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ReportWriter for SqliteReport {
    fn write_scene(&mut self, rows: &[SceneRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO scene (kind, id, x, y, radius) VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.kind, row.id, row.x, row.y, row.radius])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_paths(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO paths \
                 (result_id, agent_id, agent_x, agent_y, target_id, target_x, target_y, length, waypoints) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.result_id,
                    row.agent_id,
                    row.agent_x,
                    row.agent_y,
                    row.target_id,
                    row.target_x,
                    row.target_y,
                    row.length,
                    row.waypoints,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
