//! SQLite export backend (feature `sqlite`).
//!
//! Creates a single `plan.db` file in the configured output directory with
//! two tables: `breakdown` and `timing`.  Absent unit counts are stored as
//! `NULL`.

use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::writer::PlanWriter;
use crate::{BreakdownRow, OutputResult, TimingRow};

pub const DB_FILE: &str = "plan.db";

/// Writes a plan to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `plan.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(DB_FILE))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS breakdown (
                 idx           INTEGER PRIMARY KEY,
                 start_sec     INTEGER NOT NULL,
                 end_sec       INTEGER NOT NULL,
                 duration_sec  INTEGER NOT NULL,
                 label         TEXT    NOT NULL,
                 grams         REAL    NOT NULL,
                 units_rounded INTEGER
             );
             CREATE TABLE IF NOT EXISTS timing (
                 idx    INTEGER PRIMARY KEY,
                 at_sec INTEGER NOT NULL,
                 grams  REAL    NOT NULL,
                 units  INTEGER,
                 label  TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl PlanWriter for SqliteWriter {
    fn write_breakdown(&mut self, rows: &[BreakdownRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO breakdown \
                 (idx, start_sec, end_sec, duration_sec, label, grams, units_rounded) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.index,
                    row.start_sec,
                    row.end_sec,
                    row.duration_sec,
                    row.label,
                    row.grams,
                    row.units_rounded,
                ])?;
            }
        }
        tx.commit()?;
        debug!(rows = rows.len(), "inserted breakdown rows");
        Ok(())
    }

    fn write_timing(&mut self, rows: &[TimingRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO timing (idx, at_sec, grams, units, label) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.index, row.at_sec, row.grams, row.units, row.label])?;
            }
        }
        tx.commit()?;
        debug!(rows = rows.len(), "inserted timing rows");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
