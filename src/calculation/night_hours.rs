//! Night-hours ("nocturnidad") calculation.

use crate::models::{ShiftInterval, TimeOfDay};

use super::interval::overlap;

/// The default night window, 22:00 to 06:00.
pub const DEFAULT_NIGHT_WINDOW: ShiftInterval =
    ShiftInterval::new(TimeOfDay::hm(22, 0), TimeOfDay::hm(6, 0));

/// Minutes of `shift` worked inside `night_window`.
///
/// Uses the endpoint-based [`overlap`]: a shift that starts before and ends
/// after the whole window counts 0 night minutes.
///
/// # Examples
///
/// ```
/// use schedule_engine::calculation::{night_minutes, DEFAULT_NIGHT_WINDOW};
/// use schedule_engine::models::ShiftInterval;
///
/// let late = ShiftInterval::parse("21:00", "23:00").unwrap();
/// assert_eq!(night_minutes(&late, &DEFAULT_NIGHT_WINDOW), 60);
///
/// let day = ShiftInterval::parse("09:00", "17:00").unwrap();
/// assert_eq!(night_minutes(&day, &DEFAULT_NIGHT_WINDOW), 0);
/// ```
pub fn night_minutes(shift: &ShiftInterval, night_window: &ShiftInterval) -> u32 {
    overlap(shift, night_window)
}
