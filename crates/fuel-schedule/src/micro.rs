//! Micro-interval intake timing.
//!
//! Each interval is cut into equal slots no longer than the segment's
//! micro-interval:
//!
//! ```text
//! micro_secs = micro_minutes * 60
//! slots      = max(1, ceil(duration / micro_secs))
//! slot_secs  = floor(duration / slots)
//! at_secs[i] = interval.start + i * slot_secs          for i in 0..slots
//! ```
//!
//! Grams are split evenly.  Whole units are dealt out round-robin starting at
//! slot 0, so when they do not divide evenly the earlier slots carry one
//! extra unit and no two slots differ by more than one.

use fuel_core::units::SECS_PER_MINUTE;
use tracing::trace;

use crate::Interval;

/// One intake prompt: consume `grams` (or `units`) at `at_secs`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleItem {
    /// Global time, seconds from race start.
    pub at_secs: u64,
    pub grams: f64,
    /// Whole units, present only when the interval was quantized.
    pub units: Option<u32>,
    /// Label of the interval this item belongs to.
    pub label: String,
}

/// Number of slots and the length of each for an interval of
/// `duration_secs` cut at `micro_minutes`.
///
/// `micro_minutes == 0` is treated as a single slot spanning the interval.
pub fn slot_layout(duration_secs: u64, micro_minutes: u32) -> (u64, u64) {
    let micro_secs = micro_minutes as u64 * SECS_PER_MINUTE;
    let slots = if micro_secs == 0 { 1 } else { duration_secs.div_ceil(micro_secs).max(1) };
    (slots, duration_secs / slots)
}

/// Deal `units` whole units across `slots` slots round-robin from slot 0.
///
/// # Panics
///
/// Panics if `slots == 0`.
pub fn distribute_units(units: u32, slots: usize) -> Vec<u32> {
    assert!(slots > 0, "distribute_units needs at least one slot");
    let base = units / slots as u32;
    let extra = (units % slots as u32) as usize;
    let dealt: Vec<u32> = (0..slots).map(|i| base + u32::from(i < extra)).collect();
    assert_eq!(
        dealt.iter().map(|&u| u as u64).sum::<u64>(),
        units as u64,
        "distributed units must sum to the interval's unit count"
    );
    dealt
}

/// Expand one interval into its micro-interval schedule.
///
/// If the interval carries `units_rounded` and `unit_grams` is given, whole
/// units are distributed and each item's grams is `units * unit_grams`;
/// otherwise the interval's grams are split evenly.
pub fn schedule_interval(
    interval:      &Interval,
    micro_minutes: u32,
    unit_grams:    Option<f64>,
) -> Vec<ScheduleItem> {
    let (slots, slot_secs) = slot_layout(interval.duration_secs, micro_minutes);
    trace!(index = interval.index, slots, slot_secs, "scheduling interval");

    let at = |i: u64| interval.start_secs + i * slot_secs;

    match (interval.units_rounded, unit_grams) {
        (Some(units), Some(unit_grams)) => distribute_units(units, slots as usize)
            .into_iter()
            .enumerate()
            .map(|(i, u)| ScheduleItem {
                at_secs: at(i as u64),
                grams:   u as f64 * unit_grams,
                units:   Some(u),
                label:   interval.label.clone(),
            })
            .collect(),
        _ => {
            let grams = interval.grams / slots as f64;
            (0..slots)
                .map(|i| ScheduleItem {
                    at_secs: at(i),
                    grams,
                    units:   None,
                    label:   interval.label.clone(),
                })
                .collect()
        }
    }
}

/// Sort items by `at_secs`, keeping input order for equal timestamps.
pub fn merge_schedule(mut items: Vec<ScheduleItem>) -> Vec<ScheduleItem> {
    items.sort_by_key(|item| item.at_secs);
    items
}
