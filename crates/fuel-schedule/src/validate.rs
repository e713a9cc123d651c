//! Input checks for the caller to surface as warnings.
//!
//! `compute_plan` accepts any segment list and never fails; a zero-length
//! race or a negative rate simply produces an empty or zero-gram plan.
//! `validate` reports those situations so a UI can tell the user why.

use std::fmt;

use crate::Segment;

/// A problem with the planner's input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanWarning {
    /// The segments add up to no time at all.
    ZeroTotalDuration,
    /// One segment has no duration (bad pace text, zero distance, …).
    ZeroSegmentDuration { key: String },
    /// Rate is negative or not a number.
    InvalidRate { key: String },
    /// `unit_grams` is set but is not a positive number.
    InvalidUnitGrams { key: String },
    /// Two segments share the same key.
    DuplicateKey { key: String },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::ZeroTotalDuration => write!(f, "total duration must be greater than zero"),
            PlanWarning::ZeroSegmentDuration { key } => write!(f, "segment {key:?} has zero duration"),
            PlanWarning::InvalidRate { key } => {
                write!(f, "segment {key:?} needs a non-negative grams-per-hour rate")
            }
            PlanWarning::InvalidUnitGrams { key } => {
                write!(f, "segment {key:?} has a unit size that is not a positive number")
            }
            PlanWarning::DuplicateKey { key } => write!(f, "segment key {key:?} is used more than once"),
        }
    }
}

/// Check `segments` for input the planner will silently degrade on.
pub fn validate(segments: &[Segment]) -> Vec<PlanWarning> {
    let mut warnings = Vec::new();
    let mut total_secs = 0u64;

    for (i, seg) in segments.iter().enumerate() {
        let secs = seg.duration_secs();
        total_secs = total_secs.saturating_add(secs);

        if segments[..i].iter().any(|prev| prev.key == seg.key) {
            warnings.push(PlanWarning::DuplicateKey { key: seg.key.clone() });
        }
        if secs == 0 {
            warnings.push(PlanWarning::ZeroSegmentDuration { key: seg.key.clone() });
        }
        if seg.rate_per_hour.is_nan() || seg.rate_per_hour < 0.0 {
            warnings.push(PlanWarning::InvalidRate { key: seg.key.clone() });
        }
        if seg.unit_grams.is_some() && seg.effective_unit_grams().is_none() {
            warnings.push(PlanWarning::InvalidUnitGrams { key: seg.key.clone() });
        }
    }

    if total_secs == 0 {
        warnings.push(PlanWarning::ZeroTotalDuration);
    }
    warnings
}
