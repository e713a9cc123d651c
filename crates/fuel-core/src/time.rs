//! Duration text codec.
//!
//! # Design
//!
//! Every duration in the workspace is an integer count of seconds (`u64`).
//! Text only appears at the edges, in two shapes:
//!
//! ```text
//! "H:MM:SS"  → h*3600 + m*60 + s
//! "MM:SS"    → m*60 + s
//! "H"        → h*3600          (bare integer = whole hours)
//! ```
//!
//! Parsing never fails.  Malformed text (non-integer parts, negative signs,
//! too many fields, overflow) parses to `0` and it is up to the caller to
//! reject a zero duration where one makes no sense.

use crate::units::{SECS_PER_HOUR, SECS_PER_MINUTE};

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `"H:MM:SS"`, `"MM:SS"`, or a bare integer number of hours.
///
/// Returns `0` for anything that is not one to three `:`-separated
/// non-negative integers.
pub fn parse_duration(text: &str) -> u64 {
    let Some(parts) = split_fields(text) else {
        return 0;
    };
    let secs = match parts.as_slice() {
        [h, m, s] => h
            .checked_mul(SECS_PER_HOUR)
            .and_then(|v| v.checked_add(m.checked_mul(SECS_PER_MINUTE)?))
            .and_then(|v| v.checked_add(*s)),
        [m, s] => m.checked_mul(SECS_PER_MINUTE).and_then(|v| v.checked_add(*s)),
        [h] => h.checked_mul(SECS_PER_HOUR),
        _ => None,
    };
    secs.unwrap_or(0)
}

/// Parse a pace string of exactly `m:ss` (minutes and seconds per distance
/// unit) into seconds.
///
/// Unlike [`parse_duration`] a bare number is not accepted: `"5"` is `0`,
/// not five hours.
pub fn parse_pace(text: &str) -> u64 {
    match split_fields(text).as_deref() {
        Some([m, s]) => m
            .checked_mul(SECS_PER_MINUTE)
            .and_then(|v| v.checked_add(*s))
            .unwrap_or(0),
        _ => 0,
    }
}

/// Split on `:` and parse each field as `u64`.  `None` if any field is
/// empty or not an unsigned integer.
fn split_fields(text: &str) -> Option<Vec<u64>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.split(':')
        .map(|part| part.trim().parse::<u64>().ok())
        .collect()
}

// ── Formatting ────────────────────────────────────────────────────────────────

/// Format whole seconds as `HH:MM:SS`.
///
/// Each field is zero-padded to two digits; hours grow past two digits
/// rather than wrapping (`100:00:00` for 360 000 s).
pub fn format_duration(secs: u64) -> String {
    let h = secs / SECS_PER_HOUR;
    let m = (secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let s = secs % SECS_PER_MINUTE;
    format!("{h:02}:{m:02}:{s:02}")
}

/// Like [`format_duration`] for a floating-point input.
///
/// Negative, NaN, and infinite values format as `00:00:00`; fractional
/// seconds are truncated.
pub fn format_duration_f64(secs: f64) -> String {
    let whole = if secs.is_finite() && secs > 0.0 { secs.floor() as u64 } else { 0 };
    format_duration(whole)
}

/// `"HH:MM:SS → HH:MM:SS"` label for the half-open range `[start, end)`.
pub fn format_range(start_secs: u64, end_secs: u64) -> String {
    format!("{} → {}", format_duration(start_secs), format_duration(end_secs))
}
