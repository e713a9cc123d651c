//! `fuel-output` — plan exporters for the fuel-plan workspace.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                              |
//! |-----------|---------|--------------------------------------------|
//! | *(none)*  | CSV     | `race_breakdown.csv`, `race_timing.csv`    |
//! | `sqlite`  | SQLite  | `plan.db`                                  |
//!
//! All backends implement [`PlanWriter`] and are driven by [`export_plan`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use fuel_output::{CsvWriter, export_plan};
//!
//! let plan = fuel_schedule::compute_plan(&segments, &settings);
//! let mut writer = CsvWriter::new(Path::new("./output"), plan.totals.total_units.is_some())?;
//! export_plan(&plan, &mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::export_plan;
pub use row::{BreakdownRow, TimingRow, timing_rows};
pub use writer::PlanWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
