//! Wall-clock interval arithmetic.
//!
//! All functions work on minutes since midnight. A time that is "before" the
//! reference point is rolled forward one day, which is how midnight-crossing
//! intervals are handled without dates.

use crate::models::{MINUTES_PER_DAY, ShiftInterval, TimeOfDay};

/// Minutes from `start` to `end`, rolling `end` to the next day when it is
/// earlier on the clock than `start`.
///
/// The result is always in `0..=1440`. Equal times give 0.
///
/// # Examples
///
/// ```
/// use schedule_engine::calculation::duration;
/// use schedule_engine::models::TimeOfDay;
///
/// let t = |s: &str| s.parse::<TimeOfDay>().unwrap();
/// assert_eq!(duration(t("09:00"), t("17:00")), 480);
/// assert_eq!(duration(t("23:00"), t("01:00")), 120);
/// assert_eq!(duration(t("08:00"), t("08:00")), 0);
/// ```
pub fn duration(start: TimeOfDay, end: TimeOfDay) -> u32 {
    let start = start.minutes_from_midnight();
    let mut end = end.minutes_from_midnight();
    if end < start {
        end += MINUTES_PER_DAY;
    }
    end - start
}

/// Whether `time` falls inside the closed window `[lower, upper]`.
///
/// A window whose upper bound is earlier than its lower bound wraps past
/// midnight. A `time` earlier than `lower` is compared as the next day's
/// occurrence, so `is_within(22:00, 06:00, 03:00)` holds.
///
/// Both bounds are inclusive.
///
/// # Examples
///
/// ```
/// use schedule_engine::calculation::is_within;
/// use schedule_engine::models::TimeOfDay;
///
/// let t = |s: &str| s.parse::<TimeOfDay>().unwrap();
/// assert!(is_within(t("22:00"), t("06:00"), t("03:00")));
/// assert!(is_within(t("22:00"), t("06:00"), t("06:00")));
/// assert!(!is_within(t("22:00"), t("06:00"), t("21:59")));
/// assert!(is_within(t("04:00"), t("06:55"), t("04:00")));
/// ```
pub fn is_within(lower: TimeOfDay, upper: TimeOfDay, time: TimeOfDay) -> bool {
    let lower = lower.minutes_from_midnight();
    let mut upper = upper.minutes_from_midnight();
    let mut time = time.minutes_from_midnight();

    if upper < lower {
        upper += MINUTES_PER_DAY;
    }
    if time < lower {
        time += MINUTES_PER_DAY;
    }

    time >= lower && time <= upper
}

/// Minutes of `shift` that fall inside `window`, decided by where the
/// shift's endpoints land.
///
/// | start in window | end in window | result                          |
/// |-----------------|---------------|---------------------------------|
/// | yes             | yes           | `duration(shift)`               |
/// | no              | yes           | `duration(window.start, end)`   |
/// | yes             | no            | `duration(start, window.end)`   |
/// | no              | no            | 0                               |
///
/// The last row also covers a shift that fully contains the window; that
/// case is not counted.
pub fn overlap(shift: &ShiftInterval, window: &ShiftInterval) -> u32 {
    let start_inside = is_within(window.start, window.end, shift.start);
    let end_inside = is_within(window.start, window.end, shift.end);

    match (start_inside, end_inside) {
        (true, true) => duration(shift.start, shift.end),
        (false, true) => duration(window.start, shift.end),
        (true, false) => duration(shift.start, window.end),
        (false, false) => 0,
    }
}
