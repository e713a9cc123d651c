//! Workspace error type.
//!
//! Duration and pace parsing never fail (malformed text degrades to zero),
//! so `FuelError` only covers text that names something: an activity type
//! or a rounding policy.  Sub-crates wrap it in their own enums.

use thiserror::Error;

/// The base error type shared by the `fuel-*` crates.
#[derive(Debug, Error)]
pub enum FuelError {
    #[error("parse error: {0}")]
    Parse(String),
}
