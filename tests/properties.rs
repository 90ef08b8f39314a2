//! Property tests for the schedule calculations and the save/load cycle.

use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;

use schedule_engine::calculation::{
    DEFAULT_NIGHT_WINDOW, SequentialIds, compute_day_summary, duration, night_minutes,
};
use schedule_engine::config::ScheduleConfig;
use schedule_engine::models::{DayForm, DayShifts, ShiftForm, ShiftInterval, TimeOfDay};
use schedule_engine::service::ScheduleService;
use schedule_engine::storage::{InMemoryStore, ScheduleStore};

fn time_of_day() -> impl Strategy<Value = TimeOfDay> {
    (0u32..24, 0u32..60).prop_map(|(hour, minute)| TimeOfDay::new(hour, minute).unwrap())
}

/// Shifts long enough that any pair of them also passes the split-day total.
fn valid_shift() -> impl Strategy<Value = ShiftInterval> {
    (time_of_day(), 150u32..1440).prop_map(|(start, length)| {
        let end = (start.minutes_from_midnight() + length) % 1440;
        let end = TimeOfDay::new(end / 60, end % 60).unwrap();
        ShiftInterval::new(start, end)
    })
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 24).unwrap()
}

proptest! {
    #[test]
    fn duration_stays_within_one_day(start in time_of_day(), end in time_of_day()) {
        let minutes = duration(start, end);
        prop_assert!(minutes < 1440);
        prop_assert_eq!(minutes == 0, start == end);
    }

    #[test]
    fn night_minutes_never_exceed_duration(start in time_of_day(), end in time_of_day()) {
        let shift = ShiftInterval::new(start, end);
        prop_assert!(night_minutes(&shift, &DEFAULT_NIGHT_WINDOW) <= shift.duration_minutes());
    }

    #[test]
    fn single_valid_shift_always_summarises(shift in valid_shift()) {
        let result = compute_day_summary(
            date(),
            &DayShifts::single(shift),
            &ScheduleConfig::default(),
            &SequentialIds::default(),
        );
        let result = result.unwrap();

        prop_assert_eq!(result.records.len(), 1);
        prop_assert_eq!(result.summary.total_duration_minutes, shift.duration_minutes());
        prop_assert!(!result.summary.is_split_shift);
        prop_assert!(result.summary.transport_bonus);
        prop_assert_eq!(result.records[0].group_id, result.summary.group_id);
    }

    #[test]
    fn save_then_load_returns_entered_times(first in valid_shift(), second in valid_shift()) {
        let store = Arc::new(InMemoryStore::new());
        let service = ScheduleService::new(store.clone(), ScheduleConfig::default());
        let form = DayForm {
            shift1: ShiftForm::from(first),
            shift2: ShiftForm::from(second),
        };

        let outcome = service.save_day(date(), &form);
        prop_assert!(outcome.success);
        prop_assert_eq!(service.load_day(date()).unwrap(), form.clone());

        // Saving the same day again leaves one set of records behind
        prop_assert!(service.save_day(date(), &form).success);
        prop_assert_eq!(store.records_for_date(date()).unwrap().len(), 2);
        prop_assert!(store.summary_for_date(date()).unwrap().is_some());
    }
}
