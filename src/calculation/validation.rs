//! Shift validation.
//!
//! Minimum-duration rules per shift and across the two shifts of a day.
//! Only complete shifts (both times set) are checked; a shift that is absent
//! or still missing one of its times is not an error.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::ScheduleConfig;
use crate::models::{DayShifts, ShiftInterval};

/// Default minimum length of one shift, in minutes (2 hours).
pub const DEFAULT_MIN_SHIFT_MINUTES: u32 = 120;

/// Default minimum combined length of a split-shift day, in minutes (5 hours).
pub const DEFAULT_MIN_SPLIT_TOTAL_MINUTES: u32 = 300;

/// A rule violation found while validating a day.
///
/// The `Display` output is the message shown to the user.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::ValidationError;
///
/// let error = ValidationError::MinShiftDuration {
///     shift_index: 1,
///     minutes: 90,
///     minimum: 120,
/// };
/// assert_eq!(error.to_string(), "El turno debe ser de mínimo 2 horas");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A time field was not valid `HH:MM` text.
    #[error("Hora no válida: '{value}'")]
    InvalidTime {
        /// The rejected text.
        value: String,
    },

    /// A single shift is shorter than the minimum.
    #[error("El turno debe ser de mínimo {} horas", hours(.minimum))]
    MinShiftDuration {
        /// Which shift of the day (1 or 2).
        shift_index: u8,
        /// The shift's length in minutes.
        minutes: u32,
        /// The required minimum in minutes.
        minimum: u32,
    },

    /// The two shifts of a split day together are shorter than the minimum.
    #[error("El total de ambos turnos debe ser mínimo {} horas", hours(.minimum))]
    MinTotalDuration {
        /// Combined length in minutes.
        minutes: u32,
        /// The required minimum in minutes.
        minimum: u32,
    },
}

fn hours(minutes: &u32) -> Decimal {
    (Decimal::new(i64::from(*minutes), 0) / Decimal::new(60, 0)).normalize()
}

/// Checks one shift against the single-shift minimum.
///
/// Returns `None` for an absent shift.
pub fn validate_shift(
    shift_index: u8,
    shift: Option<&ShiftInterval>,
    config: &ScheduleConfig,
) -> Option<ValidationError> {
    let minutes = shift?.duration_minutes();
    (minutes < config.min_shift_minutes).then(|| ValidationError::MinShiftDuration {
        shift_index,
        minutes,
        minimum: config.min_shift_minutes,
    })
}

/// Checks the combined length when both shifts are present.
pub fn validate_day(
    shift1: Option<&ShiftInterval>,
    shift2: Option<&ShiftInterval>,
    config: &ScheduleConfig,
) -> Option<ValidationError> {
    let (first, second) = (shift1?, shift2?);
    let minutes = first.duration_minutes() + second.duration_minutes();
    (minutes < config.min_split_total_minutes).then(|| ValidationError::MinTotalDuration {
        minutes,
        minimum: config.min_split_total_minutes,
    })
}

/// Runs every check for a day and returns all violations, in order: shift 1,
/// shift 2, then the combined total.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::{validate_day_shifts, ValidationError};
/// use schedule_engine::config::ScheduleConfig;
/// use schedule_engine::models::{DayShifts, ShiftInterval};
///
/// let day = DayShifts::split(
///     ShiftInterval::parse("08:00", "09:00").unwrap(),
///     ShiftInterval::parse("14:00", "16:00").unwrap(),
/// );
/// let errors = validate_day_shifts(&day, &ScheduleConfig::default());
/// assert_eq!(errors.len(), 2);
/// assert!(matches!(errors[0], ValidationError::MinShiftDuration { shift_index: 1, .. }));
/// assert!(matches!(errors[1], ValidationError::MinTotalDuration { minutes: 180, .. }));
/// ```
pub fn validate_day_shifts(day: &DayShifts, config: &ScheduleConfig) -> Vec<ValidationError> {
    let shift1 = day.shift1.interval();
    let shift2 = day.shift2.interval();

    [
        validate_shift(1, shift1.as_ref(), config),
        validate_shift(2, shift2.as_ref(), config),
        validate_day(shift1.as_ref(), shift2.as_ref(), config),
    ]
    .into_iter()
    .flatten()
    .collect()
}
