//! Hourly breakdown: `Interval` and `build_breakdown`.
//!
//! # Two-phase policy
//!
//! ```text
//! total_hours = total_secs / 3600
//! full        = floor(total_hours)        → `full` intervals of 3600 s, `rate` grams each
//! f           = total_hours - full        → one tail of round(f*3600) s, `rate * f` grams
//! ```
//!
//! Whole hours carry the nominal flat rate; only the tail carries a
//! proportional share.  Tail grams are continuous here; rounding to whole
//! grams or product units happens later.
//!
//! The tail duration is rounded while its grams are not, so the tail's
//! grams-per-second can differ very slightly from `rate / 3600`.  Totals
//! downstream are defined relative to this, so it is kept.

use fuel_core::format_range;
use fuel_core::units::{SECS_PER_HOUR, SECS_PER_HOUR_F64};

// ── Interval ──────────────────────────────────────────────────────────────────

/// One row of a breakdown: a half-open time range and the grams owed in it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// 1-based position within its breakdown (or within the merged plan).
    pub index: u32,
    pub start_secs: u64,
    /// Exclusive end.  Always `start_secs + duration_secs`.
    pub end_secs: u64,
    pub duration_secs: u64,
    /// Grams owed.  Continuous until quantized, then `units * unit_grams`.
    pub grams: f64,
    /// Whole product units, set only by unit-based planning.
    pub units_rounded: Option<u32>,
    pub label: String,
}

impl Interval {
    fn new(index: u32, start_secs: u64, duration_secs: u64, grams: f64) -> Self {
        let end_secs = start_secs + duration_secs;
        Self {
            index,
            start_secs,
            end_secs,
            duration_secs,
            grams,
            units_rounded: None,
            label: format_range(start_secs, end_secs),
        }
    }
}

// ── Breakdown ─────────────────────────────────────────────────────────────────

/// Output of [`build_breakdown`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakdown {
    /// Contiguous intervals partitioning `[0, total_secs)`.
    pub intervals: Vec<Interval>,
    /// `rate * total_hours`.
    pub total_grams: f64,
    pub total_hours: f64,
}

impl Breakdown {
    /// An empty breakdown (zero duration).
    pub fn empty() -> Self {
        Self { intervals: Vec::new(), total_grams: 0.0, total_hours: 0.0 }
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Sum of interval durations.
    pub fn duration_secs(&self) -> u64 {
        self.intervals.iter().map(|i| i.duration_secs).sum()
    }

    /// Copy with every interval's grams rounded to a whole number and
    /// `total_grams` re-summed from the rounded rows.
    ///
    /// Intended for display: the rounded total is what a reader adding up
    /// the table would get, which may differ from `rate * hours`.
    pub fn to_whole_grams(&self) -> Self {
        let intervals: Vec<Interval> = self
            .intervals
            .iter()
            .map(|i| Interval { grams: i.grams.round(), ..i.clone() })
            .collect();
        let total_grams = intervals.iter().map(|i| i.grams).sum();
        Self { intervals, total_grams, total_hours: self.total_hours }
    }
}

/// Split `total_secs` into whole-hour intervals plus a partial tail, each
/// carrying the grams owed at `rate_per_hour`.
///
/// A negative or NaN rate is treated as `0`.
pub fn build_breakdown(total_secs: u64, rate_per_hour: f64) -> Breakdown {
    if total_secs == 0 {
        return Breakdown::empty();
    }
    let rate = rate_per_hour.max(0.0);

    let total_hours = total_secs as f64 / SECS_PER_HOUR_F64;
    let full_hours = total_secs / SECS_PER_HOUR;
    let fraction = total_hours - full_hours as f64;

    let mut intervals = Vec::with_capacity(full_hours as usize + 1);
    let mut elapsed = 0u64;

    for i in 0..full_hours {
        intervals.push(Interval::new(i as u32 + 1, elapsed, SECS_PER_HOUR, rate));
        elapsed += SECS_PER_HOUR;
    }

    if fraction > 0.0 {
        let tail_secs = (fraction * SECS_PER_HOUR_F64).round() as u64;
        intervals.push(Interval::new(full_hours as u32 + 1, elapsed, tail_secs, rate * fraction));
    }

    let breakdown = Breakdown { intervals, total_grams: rate * total_hours, total_hours };
    assert_eq!(
        breakdown.duration_secs(),
        total_secs,
        "breakdown intervals must partition the full duration"
    );
    breakdown
}
