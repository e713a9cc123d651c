//! Chaining per-segment breakdowns onto one global timeline.
//!
//! ```text
//! offset(seg k)   = Σ duration(seg 0..k)
//! start/end       = local start/end + offset
//! index           = running 1-based count across all segments
//! label           = "{segment label} {local label}"
//! ```
//!
//! Labels keep the segment-local time range; only `start_secs`/`end_secs`
//! move onto the global timeline.

use crate::{Breakdown, Interval};

/// Incrementally appends segment breakdowns, tracking the running offset
/// and interval index.
#[derive(Debug, Default)]
pub struct SegmentChainer {
    offset_secs: u64,
    intervals:   Vec<Interval>,
}

impl SegmentChainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Global start time of the next segment pushed.
    pub fn offset_secs(&self) -> u64 {
        self.offset_secs
    }

    /// Append one segment and return its intervals, shifted and relabelled.
    ///
    /// The offset advances by the breakdown's total duration, so the next
    /// segment starts exactly where this one ends.
    pub fn push(&mut self, segment_label: &str, breakdown: &Breakdown) -> &[Interval] {
        let first = self.intervals.len();
        for local in &breakdown.intervals {
            self.intervals.push(Interval {
                index:         self.intervals.len() as u32 + 1,
                start_secs:    local.start_secs + self.offset_secs,
                end_secs:      local.end_secs + self.offset_secs,
                duration_secs: local.duration_secs,
                grams:         local.grams,
                units_rounded: local.units_rounded,
                label:         format!("{segment_label} {}", local.label),
            });
        }
        self.offset_secs += breakdown.duration_secs();
        &self.intervals[first..]
    }

    /// Consume the chainer, returning the merged intervals.
    pub fn finish(self) -> Vec<Interval> {
        self.intervals
    }
}

/// Chain `(segment label, breakdown)` pairs in order into one interval list.
pub fn chain_segments<'a, I>(parts: I) -> Vec<Interval>
where
    I: IntoIterator<Item = (&'a str, &'a Breakdown)>,
{
    let mut chainer = SegmentChainer::new();
    for (label, breakdown) in parts {
        chainer.push(label, breakdown);
    }
    chainer.finish()
}
