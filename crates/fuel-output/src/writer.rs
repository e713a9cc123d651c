//! The `PlanWriter` trait implemented by all export backends.

use crate::{BreakdownRow, OutputResult, TimingRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait PlanWriter {
    /// Write the merged interval breakdown.
    fn write_breakdown(&mut self, rows: &[BreakdownRow]) -> OutputResult<()>;

    /// Write the micro-interval timing schedule.
    fn write_timing(&mut self, rows: &[TimingRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
