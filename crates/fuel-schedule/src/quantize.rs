//! Converting continuous grams into whole product units.
//!
//! ```text
//! raw_units    = desired_grams / unit_grams
//! units        = floor | round-half-up | ceil (raw_units)
//! actual_grams = units * unit_grams
//! ```
//!
//! Once quantized, `actual_grams` replaces the interval's continuous grams.
//! Summed over a plan this can differ from `rate × time`; the plan reports
//! both figures rather than hiding the gap.

use std::fmt;
use std::str::FromStr;

use fuel_core::FuelError;

use crate::Interval;

// ── RoundingPolicy ────────────────────────────────────────────────────────────

/// How a fractional unit count becomes a whole one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RoundingPolicy {
    /// Never exceed the target.
    Floor,
    /// Nearest whole unit; exact halves round up.
    #[default]
    Nearest,
    /// Never fall short of the target.
    Ceil,
}

impl RoundingPolicy {
    pub fn apply(self, raw_units: f64) -> f64 {
        match self {
            RoundingPolicy::Floor => raw_units.floor(),
            RoundingPolicy::Nearest => (raw_units + 0.5).floor(),
            RoundingPolicy::Ceil => raw_units.ceil(),
        }
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoundingPolicy::Floor => "floor",
            RoundingPolicy::Nearest => "nearest",
            RoundingPolicy::Ceil => "ceil",
        })
    }
}

impl FromStr for RoundingPolicy {
    type Err = FuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "floor" => Ok(RoundingPolicy::Floor),
            "nearest" | "round" => Ok(RoundingPolicy::Nearest),
            "ceil" => Ok(RoundingPolicy::Ceil),
            other => Err(FuelError::Parse(format!(
                "unknown rounding policy {other:?}: expected \"floor\", \"nearest\", or \"ceil\""
            ))),
        }
    }
}

// ── Quantization ──────────────────────────────────────────────────────────────

/// Result of [`quantize`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quantized {
    pub units: u32,
    /// `units * unit_grams`.
    pub grams: f64,
}

/// Round `desired_grams` to a whole number of `unit_grams`-sized units.
///
/// Returns `None` when `unit_grams` is not a positive finite number, in
/// which case the caller keeps the continuous gram value.  Negative or NaN
/// `desired_grams` quantize to zero units.
pub fn quantize(desired_grams: f64, unit_grams: f64, policy: RoundingPolicy) -> Option<Quantized> {
    if !unit_grams.is_finite() || unit_grams <= 0.0 {
        return None;
    }
    let raw_units = desired_grams.max(0.0) / unit_grams;
    // Saturating float→int cast: absurd targets clamp to u32::MAX rather than wrap.
    let units = policy.apply(raw_units) as u32;
    Some(Quantized { units, grams: units as f64 * unit_grams })
}

/// Quantize every interval in place, replacing `grams` and setting
/// `units_rounded`.  Leaves the intervals untouched if `unit_grams` is
/// unusable.
pub fn quantize_intervals(intervals: &mut [Interval], unit_grams: f64, policy: RoundingPolicy) {
    for interval in intervals {
        if let Some(q) = quantize(interval.grams, unit_grams, policy) {
            interval.units_rounded = Some(q.units);
            interval.grams = q.grams;
        }
    }
}
