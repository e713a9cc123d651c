//! Plain data row types written by export backends.

use fuel_schedule::{Interval, ScheduleItem};

/// One row of the breakdown export.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub index:         u32,
    pub start_sec:     u64,
    pub end_sec:       u64,
    pub duration_sec:  u64,
    pub label:         String,
    pub grams:         f64,
    /// Present only for unit-planned intervals.
    pub units_rounded: Option<u32>,
}

impl From<&Interval> for BreakdownRow {
    fn from(i: &Interval) -> Self {
        Self {
            index:         i.index,
            start_sec:     i.start_secs,
            end_sec:       i.end_secs,
            duration_sec:  i.duration_secs,
            label:         i.label.clone(),
            grams:         i.grams,
            units_rounded: i.units_rounded,
        }
    }
}

/// One row of the timing export.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingRow {
    /// 1-based position in the time-sorted schedule.
    pub index:  u32,
    pub at_sec: u64,
    pub grams:  f64,
    pub units:  Option<u32>,
    pub label:  String,
}

/// Number the (already sorted) schedule items into timing rows.
pub fn timing_rows(items: &[ScheduleItem]) -> Vec<TimingRow> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| TimingRow {
            index:  i as u32 + 1,
            at_sec: item.at_secs,
            grams:  item.grams,
            units:  item.units,
            label:  item.label.clone(),
        })
        .collect()
}
