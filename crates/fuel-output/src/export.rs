//! Driving a [`PlanWriter`] from a computed [`Plan`].

use fuel_schedule::Plan;
use tracing::debug;

use crate::row::timing_rows;
use crate::writer::PlanWriter;
use crate::{BreakdownRow, OutputResult};

/// Write `plan`'s breakdown and timing schedule to `writer`, then finish it.
pub fn export_plan<W: PlanWriter>(plan: &Plan, writer: &mut W) -> OutputResult<()> {
    let breakdown: Vec<BreakdownRow> = plan.intervals.iter().map(BreakdownRow::from).collect();
    let timing = timing_rows(&plan.schedule);
    debug!(breakdown = breakdown.len(), timing = timing.len(), "exporting plan");

    writer.write_breakdown(&breakdown)?;
    writer.write_timing(&timing)?;
    writer.finish()
}
