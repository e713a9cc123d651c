//! Race segments and duration derivation.
//!
//! A segment's duration either comes straight from a duration string or is
//! derived from a distance and a pace field whose meaning depends on the
//! activity:
//!
//! | Activity | Pace field          | Duration                          |
//! |----------|---------------------|-----------------------------------|
//! | `run`    | `m:ss` per km       | `distance_km * pace`              |
//! | `swim`   | `m:ss` per 100 m    | `distance_km * 10 * pace`         |
//! | `bike`   | km/h (plain number) | `distance_km / speed * 3600`      |
//!
//! All durations are rounded to the nearest whole second.  Unparsable pace
//! text, and non-positive bike speeds, give a duration of `0`.

use std::fmt;
use std::str::FromStr;

use fuel_core::units::{METERS_PER_KM, SECS_PER_HOUR_F64, SWIM_PACE_METERS};
use fuel_core::{FuelError, parse_duration, parse_pace};

/// Micro-interval length used when a segment specifies `0`.
pub const DEFAULT_MICRO_MINUTES: u32 = 20;

/// Micro-interval lengths offered to users.  Any positive value works.
pub const MICRO_MINUTE_CHOICES: [u32; 4] = [10, 15, 20, 30];

// ── Activity ──────────────────────────────────────────────────────────────────

/// Activity type, which decides how the pace field is read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Activity {
    Run,
    Swim,
    Bike,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Activity::Run => "run",
            Activity::Swim => "swim",
            Activity::Bike => "bike",
        })
    }
}

impl FromStr for Activity {
    type Err = FuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "run" => Ok(Activity::Run),
            "swim" => Ok(Activity::Swim),
            "bike" => Ok(Activity::Bike),
            other => Err(FuelError::Parse(format!(
                "unknown activity {other:?}: expected \"run\", \"swim\", or \"bike\""
            ))),
        }
    }
}

/// Derive a duration in seconds from a distance and a textual pace field.
pub fn duration(activity: Activity, distance_km: f64, pace_field: &str) -> u64 {
    Course::from_pace_field(activity, distance_km, pace_field).duration_secs()
}

// ── Course ────────────────────────────────────────────────────────────────────

/// How long a segment takes, with the pace already parsed into numbers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Course {
    Run { distance_km: f64, pace_secs_per_km: u64 },
    Swim { distance_km: f64, pace_secs_per_100m: u64 },
    Bike { distance_km: f64, speed_kmh: f64 },
    /// An explicit duration, independent of distance.
    Fixed { duration_secs: u64 },
}

impl Course {
    /// Build a course from the raw pace text as a user would type it.
    pub fn from_pace_field(activity: Activity, distance_km: f64, pace_field: &str) -> Self {
        match activity {
            Activity::Run => Course::Run { distance_km, pace_secs_per_km: parse_pace(pace_field) },
            Activity::Swim => Course::Swim { distance_km, pace_secs_per_100m: parse_pace(pace_field) },
            Activity::Bike => Course::Bike {
                distance_km,
                speed_kmh: pace_field.trim().parse().unwrap_or(0.0),
            },
        }
    }

    /// A course whose duration is parsed from `"H:MM:SS"`, `"MM:SS"`, or
    /// whole hours.
    pub fn from_duration_str(text: &str) -> Self {
        Course::Fixed { duration_secs: parse_duration(text) }
    }

    /// The activity this course was derived from, if any.
    pub fn activity(&self) -> Option<Activity> {
        match self {
            Course::Run { .. } => Some(Activity::Run),
            Course::Swim { .. } => Some(Activity::Swim),
            Course::Bike { .. } => Some(Activity::Bike),
            Course::Fixed { .. } => None,
        }
    }

    /// Duration in whole seconds (rounded to nearest).
    pub fn duration_secs(&self) -> u64 {
        let secs = match *self {
            Course::Run { distance_km, pace_secs_per_km } => distance_km * pace_secs_per_km as f64,
            Course::Swim { distance_km, pace_secs_per_100m } => {
                distance_km * METERS_PER_KM / SWIM_PACE_METERS * pace_secs_per_100m as f64
            }
            Course::Bike { distance_km, speed_kmh } => {
                if speed_kmh.is_nan() || speed_kmh <= 0.0 {
                    return 0;
                }
                distance_km / speed_kmh * SECS_PER_HOUR_F64
            }
            Course::Fixed { duration_secs } => return duration_secs,
        };
        if secs.is_finite() && secs > 0.0 { secs.round() as u64 } else { 0 }
    }
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// One leg of a race with its own intake target.
///
/// Segments are plain values.  Editing one means building a new value
/// (see the `with_*` methods) and recomputing the plan from the new list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Unique within a plan.
    pub key: String,
    /// Prefixed to every interval label, e.g. `"Bike"`.
    pub label: String,
    pub course: Course,
    /// Target grams per hour.
    pub rate_per_hour: f64,
    /// Grams per product unit (gel, chew, …).  `None` plans in grams only.
    pub unit_grams: Option<f64>,
    /// Micro-interval length in minutes.  `0` means [`DEFAULT_MICRO_MINUTES`].
    pub micro_minutes: u32,
}

impl Segment {
    pub fn new(key: impl Into<String>, label: impl Into<String>, course: Course, rate_per_hour: f64) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            course,
            rate_per_hour,
            unit_grams: None,
            micro_minutes: DEFAULT_MICRO_MINUTES,
        }
    }

    pub fn duration_secs(&self) -> u64 {
        self.course.duration_secs()
    }

    /// `micro_minutes`, with `0` replaced by the default.
    pub fn effective_micro_minutes(&self) -> u32 {
        if self.micro_minutes == 0 { DEFAULT_MICRO_MINUTES } else { self.micro_minutes }
    }

    /// `unit_grams` if it is a usable (positive, finite) unit size.
    pub fn effective_unit_grams(&self) -> Option<f64> {
        self.unit_grams.filter(|g| g.is_finite() && *g > 0.0)
    }

    // ── Edits ─────────────────────────────────────────────────────────────

    pub fn with_course(self, course: Course) -> Self {
        Self { course, ..self }
    }

    pub fn with_rate(self, rate_per_hour: f64) -> Self {
        Self { rate_per_hour, ..self }
    }

    pub fn with_unit_grams(self, unit_grams: Option<f64>) -> Self {
        Self { unit_grams, ..self }
    }

    pub fn with_micro_minutes(self, micro_minutes: u32) -> Self {
        Self { micro_minutes, ..self }
    }
}
