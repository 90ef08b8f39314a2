//! Daily summary aggregation.
//!
//! This module turns the (up to) two shifts of a date into the records that
//! get persisted: one [`ShiftEventRecord`] per complete shift plus one
//! [`DaySummary`] carrying the day's totals and bonus flags.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScheduleConfig;
use crate::models::{DayShifts, DaySummary, ShiftEventRecord, ShiftInterval};

use super::bonus::{is_early_morning_eligible, is_maintenance_eligible};
use super::ids::IdGenerator;
use super::night_hours::night_minutes;
use super::validation::{ValidationError, validate_day_shifts};

/// Derived values for one complete shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftBreakdown {
    /// Which shift of the day (1 or 2).
    pub shift_index: u8,
    /// The worked interval.
    pub interval: ShiftInterval,
    /// Length in minutes.
    pub duration_minutes: u32,
    /// Minutes inside the night window.
    pub night_minutes: u32,
    /// Whether the shift start earns the early-morning bonus.
    pub early_morning_bonus: bool,
    /// Whether the shift earns the maintenance bonus.
    pub maintenance_bonus: bool,
}

/// Evaluates a single complete shift against the configured rules.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::evaluate_shift;
/// use schedule_engine::config::ScheduleConfig;
/// use schedule_engine::models::ShiftInterval;
///
/// let shift = ShiftInterval::parse("05:00", "14:00").unwrap();
/// let breakdown = evaluate_shift(1, shift, &ScheduleConfig::default());
/// assert_eq!(breakdown.duration_minutes, 540);
/// assert_eq!(breakdown.night_minutes, 60);
/// assert!(breakdown.early_morning_bonus);
/// assert!(!breakdown.maintenance_bonus);
/// ```
pub fn evaluate_shift(
    shift_index: u8,
    interval: ShiftInterval,
    config: &ScheduleConfig,
) -> ShiftBreakdown {
    ShiftBreakdown {
        shift_index,
        interval,
        duration_minutes: interval.duration_minutes(),
        night_minutes: night_minutes(&interval, &config.night_window),
        early_morning_bonus: is_early_morning_eligible(
            interval.start,
            &config.early_morning_window,
        ),
        maintenance_bonus: is_maintenance_eligible(&interval, &config.maintenance),
    }
}

/// The output of a successful day computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayComputation {
    /// Per-shift values, in shift order.
    pub shifts: Vec<ShiftBreakdown>,
    /// One record per complete shift, in shift order.
    pub records: Vec<ShiftEventRecord>,
    /// The day summary.
    pub summary: DaySummary,
}

/// Validates and aggregates the shifts of `date`.
///
/// Every validation error is returned together; nothing is produced when
/// there is at least one. Otherwise each complete shift (first, then second)
/// contributes its duration and night minutes to the totals, the bonus flags
/// are OR-ed across shifts, and a record is emitted for it. The day is a
/// split shift when the second shift is complete. The transport bonus is
/// always granted.
///
/// Records and summary share one group id drawn from `ids`; each record also
/// draws its own id.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::{compute_day_summary, SequentialIds};
/// use schedule_engine::config::ScheduleConfig;
/// use schedule_engine::models::{DayShifts, ShiftInterval};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 7, 24).unwrap();
/// let day = DayShifts::split(
///     ShiftInterval::parse("05:00", "09:00").unwrap(),
///     ShiftInterval::parse("21:00", "23:00").unwrap(),
/// );
///
/// let config = ScheduleConfig::default();
/// let result = compute_day_summary(date, &day, &config, &SequentialIds::default()).unwrap();
/// assert_eq!(result.records.len(), 2);
/// assert_eq!(result.summary.total_duration_minutes, 360);
/// assert_eq!(result.summary.night_minutes, 120);
/// assert!(result.summary.is_split_shift);
/// assert!(result.summary.early_morning_bonus);
/// ```
pub fn compute_day_summary(
    date: NaiveDate,
    day: &DayShifts,
    config: &ScheduleConfig,
    ids: &dyn IdGenerator,
) -> Result<DayComputation, Vec<ValidationError>> {
    let errors = validate_day_shifts(day, config);
    if !errors.is_empty() {
        return Err(errors);
    }

    let group_id = ids.generate();
    let shifts: Vec<ShiftBreakdown> = day
        .complete_shifts()
        .map(|(index, interval)| evaluate_shift(index, interval, config))
        .collect();

    let records = shifts
        .iter()
        .map(|shift| ShiftEventRecord {
            id: ids.generate(),
            group_id,
            label: shift.interval.to_string(),
            date,
            shift_index: Some(shift.shift_index),
        })
        .collect();

    let summary = DaySummary {
        id: group_id,
        group_id,
        date,
        total_duration_minutes: shifts.iter().map(|s| s.duration_minutes).sum(),
        night_minutes: shifts.iter().map(|s| s.night_minutes).sum(),
        is_split_shift: day.is_split(),
        early_morning_bonus: shifts.iter().any(|s| s.early_morning_bonus),
        maintenance_bonus: shifts.iter().any(|s| s.maintenance_bonus),
        transport_bonus: true,
    };

    debug!(
        %date,
        shifts = shifts.len(),
        total_minutes = summary.total_duration_minutes,
        night_minutes = summary.night_minutes,
        split = summary.is_split_shift,
        "Computed day summary"
    );

    Ok(DayComputation {
        shifts,
        records,
        summary,
    })
}
