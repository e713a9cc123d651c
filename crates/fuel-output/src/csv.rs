//! CSV export backend.
//!
//! Creates two files in the configured output directory:
//! - `race_breakdown.csv` — `index,start_sec,end_sec,duration_sec,label,grams[,units_rounded]`
//! - `race_timing.csv`    — `index,at_sec,grams,units,label`
//!
//! The `units_rounded` column is present only when the writer is opened
//! with `with_units`.  In the timing file an absent unit count is an empty
//! field.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::PlanWriter;
use crate::{BreakdownRow, OutputError, OutputResult, TimingRow};

pub const BREAKDOWN_FILE: &str = "race_breakdown.csv";
pub const TIMING_FILE: &str = "race_timing.csv";

/// Writes a plan to two CSV streams.
pub struct CsvWriter<W: Write = File> {
    breakdown:  Writer<W>,
    timing:     Writer<W>,
    with_units: bool,
    finished:   bool,
}

impl CsvWriter<File> {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path, with_units: bool) -> OutputResult<Self> {
        let breakdown = Writer::from_path(dir.join(BREAKDOWN_FILE))?;
        let timing = Writer::from_path(dir.join(TIMING_FILE))?;
        Self::with_headers(breakdown, timing, with_units)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap two arbitrary sinks (e.g. in-memory buffers) and write headers.
    pub fn from_writers(breakdown: W, timing: W, with_units: bool) -> OutputResult<Self> {
        Self::with_headers(Writer::from_writer(breakdown), Writer::from_writer(timing), with_units)
    }

    fn with_headers(mut breakdown: Writer<W>, mut timing: Writer<W>, with_units: bool) -> OutputResult<Self> {
        let mut header = vec!["index", "start_sec", "end_sec", "duration_sec", "label", "grams"];
        if with_units {
            header.push("units_rounded");
        }
        breakdown.write_record(&header)?;
        timing.write_record(["index", "at_sec", "grams", "units", "label"])?;

        Ok(Self { breakdown, timing, with_units, finished: false })
    }

    /// Flush and return the underlying sinks.
    pub fn into_inner(mut self) -> OutputResult<(W, W)> {
        self.finish()?;
        let breakdown = self.breakdown.into_inner().map_err(|e| OutputError::Io(e.into_error()))?;
        let timing = self.timing.into_inner().map_err(|e| OutputError::Io(e.into_error()))?;
        Ok((breakdown, timing))
    }
}

impl<W: Write> PlanWriter for CsvWriter<W> {
    fn write_breakdown(&mut self, rows: &[BreakdownRow]) -> OutputResult<()> {
        for row in rows {
            let mut record = vec![
                row.index.to_string(),
                row.start_sec.to_string(),
                row.end_sec.to_string(),
                row.duration_sec.to_string(),
                row.label.clone(),
                row.grams.to_string(),
            ];
            if self.with_units {
                record.push(row.units_rounded.map(|u| u.to_string()).unwrap_or_default());
            }
            self.breakdown.write_record(&record)?;
        }
        debug!(rows = rows.len(), "wrote breakdown rows");
        Ok(())
    }

    fn write_timing(&mut self, rows: &[TimingRow]) -> OutputResult<()> {
        for row in rows {
            self.timing.write_record(&[
                row.index.to_string(),
                row.at_sec.to_string(),
                row.grams.to_string(),
                row.units.map(|u| u.to_string()).unwrap_or_default(),
                row.label.clone(),
            ])?;
        }
        debug!(rows = rows.len(), "wrote timing rows");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.breakdown.flush()?;
        self.timing.flush()?;
        Ok(())
    }
}
