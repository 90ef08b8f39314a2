//! Bonus eligibility rules.
//!
//! Two flags are derived per shift:
//!
//! - **Early morning** ("plus madrugada"): the shift starts inside the
//!   early-morning window.
//! - **Maintenance** ("plus mantenimiento"): the shift is long enough and
//!   both bounds of at least one maintenance window lie inside the shift.
//!
//! The maintenance check nests the window inside the shift, the opposite
//! direction from the night-hours overlap. The two are kept separate.

use crate::config::MaintenanceRule;
use crate::models::{ShiftInterval, TimeOfDay};

use super::interval::is_within;

/// The default early-morning window, 04:00 to 06:55.
pub const DEFAULT_EARLY_MORNING_WINDOW: ShiftInterval =
    ShiftInterval::new(TimeOfDay::hm(4, 0), TimeOfDay::hm(6, 55));

/// The default maintenance windows, 14:00-16:00 and 21:00-23:00.
pub const DEFAULT_MAINTENANCE_WINDOWS: [ShiftInterval; 2] = [
    ShiftInterval::new(TimeOfDay::hm(14, 0), TimeOfDay::hm(16, 0)),
    ShiftInterval::new(TimeOfDay::hm(21, 0), TimeOfDay::hm(23, 0)),
];

/// Default minimum shift length for the maintenance bonus, in minutes.
pub const DEFAULT_MAINTENANCE_MIN_DURATION: u32 = 360;

/// Whether a shift starting at `start` earns the early-morning bonus.
///
/// # Examples
///
/// ```
/// use schedule_engine::calculation::{is_early_morning_eligible, DEFAULT_EARLY_MORNING_WINDOW};
/// use schedule_engine::models::TimeOfDay;
///
/// let start: TimeOfDay = "05:00".parse().unwrap();
/// assert!(is_early_morning_eligible(start, &DEFAULT_EARLY_MORNING_WINDOW));
///
/// let start: TimeOfDay = "07:30".parse().unwrap();
/// assert!(!is_early_morning_eligible(start, &DEFAULT_EARLY_MORNING_WINDOW));
/// ```
pub fn is_early_morning_eligible(start: TimeOfDay, window: &ShiftInterval) -> bool {
    is_within(window.start, window.end, start)
}

/// Whether `shift` earns the maintenance bonus under `rule`.
///
/// Requires `shift.duration_minutes() >= rule.min_duration_minutes` and, for
/// some window, both its start and end inside the shift (inclusive).
pub fn is_maintenance_eligible(shift: &ShiftInterval, rule: &MaintenanceRule) -> bool {
    if shift.duration_minutes() < rule.min_duration_minutes {
        return false;
    }

    rule.windows.iter().any(|window| {
        is_within(shift.start, shift.end, window.start)
            && is_within(shift.start, shift.end, window.end)
    })
}
