//! `fuel-schedule` — carbohydrate intake breakdowns and timing schedules.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`breakdown`] | `Interval`, `Breakdown`, `build_breakdown`                     |
//! | [`segment`]   | `Activity`, `Course`, `Segment`, `duration`                    |
//! | [`chain`]     | `SegmentChainer`, `chain_segments`                             |
//! | [`quantize`]  | `RoundingPolicy`, `quantize`, `quantize_intervals`             |
//! | [`micro`]     | `ScheduleItem`, `schedule_interval`, `distribute_units`        |
//! | [`plan`]      | `PlanSettings`, `Plan`, `compute_plan`, `compute_plans`        |
//! | [`validate`]  | `PlanWarning`, `validate`                                      |
//! | [`loader`]    | `load_segments_csv`, `load_segments_reader`                    |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                           |
//!
//! # Pipeline (summary)
//!
//! ```text
//! Segment ─duration→ build_breakdown ─→ quantize ─→ chain ─→ micro schedule
//! ```
//!
//! Everything here is pure, synchronous computation; the only I/O is the
//! optional CSV loader.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `serde`    | `Serialize`/`Deserialize` on public types.             |
//! | `parallel` | `compute_plans` runs on Rayon's thread pool.           |

pub mod breakdown;
pub mod chain;
pub mod error;
pub mod loader;
pub mod micro;
pub mod plan;
pub mod quantize;
pub mod segment;
pub mod validate;


pub use breakdown::{Breakdown, Interval, build_breakdown};
pub use chain::{SegmentChainer, chain_segments};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_segments_csv, load_segments_reader};
pub use micro::{ScheduleItem, distribute_units, merge_schedule, schedule_interval, slot_layout};
pub use plan::{Plan, PlanRequest, PlanSettings, PlanTotals, compute_plan, compute_plans};
pub use quantize::{Quantized, RoundingPolicy, quantize, quantize_intervals};
pub use segment::{Activity, Course, DEFAULT_MICRO_MINUTES, MICRO_MINUTE_CHOICES, Segment, duration};
pub use validate::{PlanWarning, validate};
