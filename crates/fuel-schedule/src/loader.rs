//! CSV segment loader.
//!
//! # CSV format
//!
//! One row per segment, in race order.
//!
//! ```csv
//! key,label,activity,distance_km,pace,rate_per_hour,unit_grams,micro_minutes
//! swim,Swim,swim,3.8,02:10,0,,30
//! bike,Bike,bike,180,30,85,25,20
//! run,Run,run,42.2,05:30,70,22.5,20
//! ```
//!
//! **`activity`** / **`pace`** fields:
//!
//! | Activity | `pace` means                 | `distance_km`   |
//! |----------|------------------------------|-----------------|
//! | `run`    | `m:ss` per km                | used            |
//! | `swim`   | `m:ss` per 100 m             | used            |
//! | `bike`   | speed in km/h                | used            |
//! | `time`   | duration, `H:MM:SS`/`MM:SS`/hours | ignored    |
//!
//! `unit_grams` may be left empty to plan in grams only.  `micro_minutes`
//! of `0` falls back to the default.
//!
//! Unparsable pace text is not an error: the segment gets a zero duration,
//! which [`validate`](crate::validate()) reports.  Unknown activities and
//! malformed numeric columns are errors.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::segment::{Activity, Course, Segment};
use crate::{ScheduleError, ScheduleResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SegmentRecord {
    key:           String,
    label:         String,
    activity:      String,
    distance_km:   f64,
    pace:          String,
    rate_per_hour: f64,
    unit_grams:    Option<f64>,
    micro_minutes: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an ordered segment list from a CSV file.
pub fn load_segments_csv(path: &Path) -> ScheduleResult<Vec<Segment>> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_segments_reader(file)
}

/// Like [`load_segments_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for segment tables
/// embedded in a binary.
pub fn load_segments_reader<R: Read>(reader: R) -> ScheduleResult<Vec<Segment>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut segments = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (row_no, result) in csv_reader.deserialize::<SegmentRecord>().enumerate() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;

        if !seen.insert(row.key.clone()) {
            warn!(key = %row.key, row = row_no + 1, "duplicate segment key");
        }

        let course = parse_course(&row.activity, row.distance_km, &row.pace)?;
        segments.push(Segment {
            key:           row.key,
            label:         row.label,
            course,
            rate_per_hour: row.rate_per_hour,
            unit_grams:    row.unit_grams,
            micro_minutes: row.micro_minutes,
        });
    }

    debug!(segments = segments.len(), "loaded segment table");
    Ok(segments)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_course(activity: &str, distance_km: f64, pace: &str) -> ScheduleResult<Course> {
    if activity.trim().eq_ignore_ascii_case("time") {
        return Ok(Course::from_duration_str(pace));
    }
    let activity: Activity = activity.parse()?;
    Ok(Course::from_pace_field(activity, distance_km, pace))
}
