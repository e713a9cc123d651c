//! Unit conversion constants used by duration and pace arithmetic.

pub const SECS_PER_MINUTE: u64 = 60;
pub const SECS_PER_HOUR: u64 = 3_600;

/// `SECS_PER_HOUR` as a float, for rate arithmetic.
pub const SECS_PER_HOUR_F64: f64 = 3_600.0;

pub const METERS_PER_KM: f64 = 1_000.0;

/// Swim paces are quoted per 100 m.
pub const SWIM_PACE_METERS: f64 = 100.0;
