//! `fuel-core` — foundational types for the fuel-plan workspace.
//!
//! This crate is a dependency of every other `fuel-*` crate.  It has no
//! `fuel-*` dependencies and only `thiserror` from outside.
//!
//! # What lives here
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`time`]  | `parse_duration`, `format_duration`, `parse_pace`            |
//! | [`units`] | Unit conversion constants (seconds, meters)                  |
//! | [`error`] | `FuelError`                                                  |

pub mod error;
pub mod time;
pub mod units;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::FuelError;
pub use time::{format_duration, format_duration_f64, format_range, parse_duration, parse_pace};
