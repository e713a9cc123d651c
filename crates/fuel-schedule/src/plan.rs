//! Whole-plan computation.
//!
//! # Pipeline (per segment, in input order)
//!
//! ```text
//! ① duration   — Course::duration_secs
//! ② breakdown  — build_breakdown(duration, rate)
//! ③ quantize   — only when plan_by_units and the segment has a unit size
//! ④ chain      — shift onto the global timeline, relabel, renumber
//! ⑤ schedule   — micro-interval items for each chained interval
//! ```
//!
//! then all items are stable-sorted by time.  A `Plan` is a pure function of
//! the segment list and settings; any edit means recomputing from scratch.

use tracing::debug;

use crate::chain::SegmentChainer;
use crate::micro::{merge_schedule, schedule_interval};
use crate::quantize::{RoundingPolicy, quantize_intervals};
use crate::{Interval, ScheduleItem, Segment, build_breakdown};

// ── Settings ──────────────────────────────────────────────────────────────────

/// Global knobs applied to every segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlanSettings {
    /// Rounding applied when converting grams to units.
    pub rounding: RoundingPolicy,
    /// Quantize to whole units for segments that define `unit_grams`.
    pub plan_by_units: bool,
    /// Produce the micro-interval schedule.  When `false`, `Plan::schedule`
    /// is empty.
    pub timing_enabled: bool,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            rounding:       RoundingPolicy::Nearest,
            plan_by_units:  false,
            timing_enabled: true,
        }
    }
}

// ── Plan ──────────────────────────────────────────────────────────────────────

/// Aggregate figures for a plan.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanTotals {
    /// Grams actually planned (after quantization where it applies).
    pub total_grams: f64,
    /// `Σ rate × hours` over all segments, before any rounding.
    pub nominal_grams: f64,
    /// Units planned, or `None` if no interval was quantized.
    pub total_units: Option<u64>,
    pub total_duration_secs: u64,
}

impl PlanTotals {
    /// `total_grams - nominal_grams`: what unit rounding added (positive)
    /// or dropped (negative).
    pub fn rounding_delta(&self) -> f64 {
        self.total_grams - self.nominal_grams
    }
}

/// Merged intervals and intake schedule for an ordered list of segments.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    pub intervals: Vec<Interval>,
    /// Sorted ascending by `at_secs`.
    pub schedule:  Vec<ScheduleItem>,
    pub totals:    PlanTotals,
}

/// Compute the full plan for `segments` under `settings`.
pub fn compute_plan(segments: &[Segment], settings: &PlanSettings) -> Plan {
    let mut chainer = SegmentChainer::new();
    let mut items: Vec<ScheduleItem> = Vec::new();
    let mut nominal_grams = 0.0_f64;

    for segment in segments {
        let duration_secs = segment.duration_secs();
        let mut breakdown = build_breakdown(duration_secs, segment.rate_per_hour);
        nominal_grams += breakdown.total_grams;

        let unit_grams = segment.effective_unit_grams().filter(|_| settings.plan_by_units);
        if let Some(unit_grams) = unit_grams {
            quantize_intervals(&mut breakdown.intervals, unit_grams, settings.rounding);
        }

        debug!(
            segment = %segment.key,
            offset_secs = chainer.offset_secs(),
            duration_secs,
            intervals = breakdown.len(),
            quantized = unit_grams.is_some(),
            "planning segment"
        );

        let chained = chainer.push(&segment.label, &breakdown);
        if settings.timing_enabled {
            let micro_minutes = segment.effective_micro_minutes();
            for interval in chained {
                items.extend(schedule_interval(interval, micro_minutes, unit_grams));
            }
        }
    }

    let total_duration_secs = chainer.offset_secs();
    let intervals = chainer.finish();
    let schedule = merge_schedule(items);

    let total_grams: f64 = intervals.iter().map(|i| i.grams).sum();
    let total_units = intervals
        .iter()
        .filter_map(|i| i.units_rounded)
        .fold(None, |acc: Option<u64>, u| Some(acc.unwrap_or(0) + u as u64));

    debug!(
        segments = segments.len(),
        intervals = intervals.len(),
        items = schedule.len(),
        total_duration_secs,
        total_grams,
        "plan computed"
    );

    Plan {
        intervals,
        schedule,
        totals: PlanTotals { total_grams, nominal_grams, total_units, total_duration_secs },
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

/// One independent plan request for [`compute_plans`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    pub segments: Vec<Segment>,
    pub settings: PlanSettings,
}

/// Compute many independent plans, in request order.
///
/// With the `parallel` feature the requests are spread over Rayon's thread
/// pool.  Plans share no state, so the output is identical either way.
pub fn compute_plans(requests: &[PlanRequest]) -> Vec<Plan> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        requests
            .par_iter()
            .map(|r| compute_plan(&r.segments, &r.settings))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        requests
            .iter()
            .map(|r| compute_plan(&r.segments, &r.settings))
            .collect()
    }
}
