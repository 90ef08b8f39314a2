//! Core data models for the schedule engine.
//!
//! This module contains all the domain models used throughout the engine.

mod records;
mod shift;
mod time;

pub use records::{CalendarEvent, DaySummary, ShiftEventRecord, StoredRecord};
pub use shift::{DayForm, DayShifts, ShiftEntry, ShiftForm};
pub use time::{LABEL_SEPARATOR, MINUTES_PER_DAY, ShiftInterval, TimeOfDay};
