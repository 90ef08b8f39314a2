//! Calculation logic for the schedule engine.
//!
//! This module contains the pure functions behind a saved day: wall-clock
//! interval arithmetic across midnight, night-hours overlap, early-morning
//! and maintenance bonus eligibility, minimum-duration validation, and the
//! aggregation of one or two shifts into a day summary.

mod bonus;
mod day_summary;
mod ids;
mod interval;
mod night_hours;
mod validation;

pub use bonus::{
    DEFAULT_EARLY_MORNING_WINDOW, DEFAULT_MAINTENANCE_MIN_DURATION, DEFAULT_MAINTENANCE_WINDOWS,
    is_early_morning_eligible, is_maintenance_eligible,
};
pub use day_summary::{DayComputation, ShiftBreakdown, compute_day_summary, evaluate_shift};
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use interval::{duration, is_within, overlap};
pub use night_hours::{DEFAULT_NIGHT_WINDOW, night_minutes};
pub use validation::{
    DEFAULT_MIN_SHIFT_MINUTES, DEFAULT_MIN_SPLIT_TOTAL_MINUTES, ValidationError, validate_day,
    validate_day_shifts, validate_shift,
};
