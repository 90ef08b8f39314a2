//! Front-end facing entry points.
//!
//! [`ScheduleService`] ties the pure calculation code to a
//! [`ScheduleStore`]: it parses the text a front end sends, validates and
//! aggregates a day, persists the result, and rebuilds the editable form of
//! a stored day.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculation::{IdGenerator, RandomIds, ValidationError, compute_day_summary};
use crate::config::ScheduleConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalendarEvent, DayForm, DaySummary, ShiftForm};
use crate::storage::ScheduleStore;

/// Message returned when the store fails during a save.
pub const SAVE_FAILED_MESSAGE: &str = "Error al guardar los datos";

/// Result of a save: `{"success": true}` or `{"success": false, "errors": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    /// Whether the day was stored.
    pub success: bool,
    /// User-facing messages when it was not.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Whether the failure came from storage rather than validation.
    #[serde(skip)]
    pub storage_failure: bool,
}

impl SaveOutcome {
    fn saved() -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            storage_failure: false,
        }
    }

    fn rejected(errors: Vec<ValidationError>) -> Self {
        Self {
            success: false,
            errors: errors.iter().map(ToString::to_string).collect(),
            storage_failure: false,
        }
    }

    fn storage_failed() -> Self {
        Self {
            success: false,
            errors: vec![SAVE_FAILED_MESSAGE.to_string()],
            storage_failure: true,
        }
    }
}

/// The schedule engine wired to a store.
#[derive(Clone)]
pub struct ScheduleService {
    store: Arc<dyn ScheduleStore>,
    config: ScheduleConfig,
    ids: Arc<dyn IdGenerator>,
}

impl ScheduleService {
    /// A service generating random identifiers.
    pub fn new(store: Arc<dyn ScheduleStore>, config: ScheduleConfig) -> Self {
        Self::with_id_generator(store, config, Arc::new(RandomIds))
    }

    /// A service drawing identifiers from `ids`.
    pub fn with_id_generator(
        store: Arc<dyn ScheduleStore>,
        config: ScheduleConfig,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { store, config, ids }
    }

    /// The rules in use.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Validates, computes and stores the shifts entered for `date`.
    ///
    /// Blank fields mean "not entered". Malformed times and rule violations
    /// come back as messages with nothing stored. Otherwise the date's
    /// records are replaced by the new shift records plus one summary, which
    /// has zero totals when no shift is complete.
    pub fn save_day(&self, date: NaiveDate, form: &DayForm) -> SaveOutcome {
        let day = match form.parse() {
            Ok(day) => day,
            Err(errors) => {
                let errors: Vec<ValidationError> =
                    errors.into_iter().map(invalid_time).collect();
                warn!(%date, errors = errors.len(), "Rejected malformed shift times");
                return SaveOutcome::rejected(errors);
            }
        };

        let computation = match compute_day_summary(date, &day, &self.config, self.ids.as_ref()) {
            Ok(computation) => computation,
            Err(errors) => {
                warn!(%date, errors = errors.len(), "Rejected day failing validation");
                return SaveOutcome::rejected(errors);
            }
        };

        let stored = self.store.replace_records_for_date(
            date,
            &computation.records,
            &computation.summary,
        );

        match stored {
            Ok(()) => {
                info!(
                    %date,
                    group_id = %computation.summary.group_id,
                    shifts = computation.records.len(),
                    total_minutes = computation.summary.total_duration_minutes,
                    "Saved day"
                );
                SaveOutcome::saved()
            }
            Err(err) => {
                warn!(%date, error = %err, "Failed to store day");
                SaveOutcome::storage_failed()
            }
        }
    }

    /// Rebuilds the editable form of `date` from its stored shift records.
    ///
    /// Records carrying a shift index fill that slot; records without one
    /// fill the remaining slots in stored order. Two records claiming the
    /// same slot are a [`EngineError::CorruptRecord`].
    pub fn load_day(&self, date: NaiveDate) -> EngineResult<DayForm> {
        let records = self.store.records_for_date(date)?;
        let mut slots: [Option<ShiftForm>; 2] = [None, None];

        let mut unindexed = Vec::new();
        for record in &records {
            let slot = match record.shift_index {
                Some(1) => 0,
                Some(2) => 1,
                _ => {
                    unindexed.push(record);
                    continue;
                }
            };
            if slots[slot].is_some() {
                return Err(EngineError::CorruptRecord {
                    id: record.id.to_string(),
                    message: format!("duplicate shift {} on {}", slot + 1, date),
                });
            }
            slots[slot] = Some(record.interval()?.into());
        }
        for record in unindexed {
            if let Some(slot) = slots.iter_mut().find(|slot| slot.is_none()) {
                *slot = Some(record.interval()?.into());
            }
        }

        let [shift1, shift2] = slots;
        Ok(DayForm {
            shift1: shift1.unwrap_or_default(),
            shift2: shift2.unwrap_or_default(),
        })
    }

    /// Every stored shift as a calendar event.
    pub fn calendar_events(&self) -> EngineResult<Vec<CalendarEvent>> {
        Ok(self
            .store
            .all_event_records()?
            .iter()
            .map(CalendarEvent::from)
            .collect())
    }

    /// The stored summary for `date`, if the day was saved.
    pub fn day_summary(&self, date: NaiveDate) -> EngineResult<Option<DaySummary>> {
        self.store.summary_for_date(date)
    }
}

fn invalid_time(err: EngineError) -> ValidationError {
    match err {
        EngineError::InvalidTime { value } => ValidationError::InvalidTime { value },
        other => ValidationError::InvalidTime {
            value: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::SequentialIds;
    use crate::models::{ShiftEventRecord, StoredRecord};
    use crate::storage::InMemoryStore;
    use uuid::Uuid;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn form(shift1: (&str, &str), shift2: (&str, &str)) -> DayForm {
        DayForm {
            shift1: ShiftForm::new(shift1.0, shift1.1),
            shift2: ShiftForm::new(shift2.0, shift2.1),
        }
    }

    fn service_with(store: Arc<InMemoryStore>) -> ScheduleService {
        ScheduleService::with_id_generator(
            store,
            ScheduleConfig::default(),
            Arc::new(SequentialIds::starting_at(1)),
        )
    }

    /// A store whose writes always fail.
    struct FailingStore;

    impl ScheduleStore for FailingStore {
        fn records_for_date(&self, _: NaiveDate) -> EngineResult<Vec<ShiftEventRecord>> {
            Ok(Vec::new())
        }
        fn all_event_records(&self) -> EngineResult<Vec<ShiftEventRecord>> {
            Ok(Vec::new())
        }
        fn summary_for_date(&self, _: NaiveDate) -> EngineResult<Option<DaySummary>> {
            Ok(None)
        }
        fn replace_records_for_date(
            &self,
            _: NaiveDate,
            _: &[ShiftEventRecord],
            _: &DaySummary,
        ) -> EngineResult<()> {
            Err(EngineError::Storage {
                message: "unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let service = service_with(Arc::new(InMemoryStore::new()));
        let date = make_date("2025-07-24");
        let entered = form(("05:00", "09:00"), ("21:00", "23:30"));

        assert_eq!(service.save_day(date, &entered), SaveOutcome::saved());
        assert_eq!(service.load_day(date).unwrap(), entered);
    }

    #[test]
    fn test_save_stores_summary() {
        let service = service_with(Arc::new(InMemoryStore::new()));
        let date = make_date("2025-07-24");
        service.save_day(date, &form(("13:00", "20:00"), ("", "")));

        let summary = service.day_summary(date).unwrap().unwrap();
        assert_eq!(summary.total_duration_minutes, 420);
        assert!(summary.maintenance_bonus);
        assert!(!summary.is_split_shift);
        assert_eq!(summary.group_id, Uuid::from_u128(1));
    }

    #[test]
    fn test_validation_failure_stores_nothing() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(store.clone());

        let outcome = service.save_day(
            make_date("2025-07-24"),
            &form(("08:00", "10:00"), ("14:00", "16:00")),
        );
        assert!(!outcome.success);
        assert!(!outcome.storage_failure);
        assert_eq!(
            outcome.errors,
            vec!["El total de ambos turnos debe ser mínimo 5 horas"]
        );
        assert!(store.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_time_is_reported() {
        let service = service_with(Arc::new(InMemoryStore::new()));
        let outcome = service.save_day(make_date("2025-07-24"), &form(("8:00", "16:00"), ("", "")));
        assert!(!outcome.success);
        assert_eq!(outcome.errors, vec!["Hora no válida: '8:00'"]);
    }

    #[test]
    fn test_resave_replaces_previous_day() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(store.clone());
        let date = make_date("2025-07-24");

        service.save_day(date, &form(("06:00", "10:00"), ("16:00", "20:00")));
        service.save_day(date, &form(("08:00", "16:00"), ("", "")));

        let loaded = service.load_day(date).unwrap();
        assert_eq!(loaded, form(("08:00", "16:00"), ("", "")));
        assert_eq!(store.snapshot().unwrap().len(), 2);
        assert!(!service.day_summary(date).unwrap().unwrap().is_split_shift);
    }

    #[test]
    fn test_saving_empty_day_stores_zero_summary() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(store.clone());
        let date = make_date("2025-07-24");

        service.save_day(date, &form(("08:00", "16:00"), ("", "")));
        assert!(service.save_day(date, &DayForm::default()).success);

        assert!(store.records_for_date(date).unwrap().is_empty());
        let summary = store.summary_for_date(date).unwrap().unwrap();
        assert_eq!(summary.total_duration_minutes, 0);
        assert_eq!(summary.night_minutes, 0);
        assert!(!summary.is_split_shift);
        assert!(summary.transport_bonus);
        assert_eq!(store.snapshot().unwrap().len(), 1);
        assert_eq!(service.load_day(date).unwrap(), DayForm::default());
    }

    #[test]
    fn test_partial_only_day_stores_zero_summary() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(store.clone());
        let date = make_date("2025-07-24");

        assert!(service.save_day(date, &form(("08:00", ""), ("", ""))).success);

        assert!(store.records_for_date(date).unwrap().is_empty());
        let summary = store.summary_for_date(date).unwrap().unwrap();
        assert_eq!(summary.total_duration_minutes, 0);
        assert!(summary.transport_bonus);
    }

    #[test]
    fn test_storage_failure_is_generic() {
        let service = ScheduleService::new(Arc::new(FailingStore), ScheduleConfig::default());
        let outcome = service.save_day(
            make_date("2025-07-24"),
            &form(("08:00", "16:00"), ("", "")),
        );
        assert!(!outcome.success);
        assert!(outcome.storage_failure);
        assert_eq!(outcome.errors, vec![SAVE_FAILED_MESSAGE]);
    }

    #[test]
    fn test_load_day_uses_shift_index_over_order() {
        let date = make_date("2025-07-24");
        let record = |id: u128, label: &str, index: Option<u8>| {
            StoredRecord::Shift(ShiftEventRecord {
                id: Uuid::from_u128(id),
                group_id: Uuid::from_u128(9),
                label: label.to_string(),
                date,
                shift_index: index,
            })
        };
        let store = InMemoryStore::with_records(vec![
            record(1, "17:00 - 21:00", Some(2)),
            record(2, "06:00 - 10:00", Some(1)),
        ]);
        let service = service_with(Arc::new(store));

        assert_eq!(
            service.load_day(date).unwrap(),
            form(("06:00", "10:00"), ("17:00", "21:00"))
        );
    }

    #[test]
    fn test_load_day_falls_back_to_stored_order() {
        let date = make_date("2025-07-24");
        let record = |id: u128, label: &str| {
            StoredRecord::Shift(ShiftEventRecord {
                id: Uuid::from_u128(id),
                group_id: Uuid::from_u128(9),
                label: label.to_string(),
                date,
                shift_index: None,
            })
        };
        let store = InMemoryStore::with_records(vec![
            record(1, "06:00 - 10:00"),
            record(2, "17:00 - 21:00"),
        ]);
        let service = service_with(Arc::new(store));

        assert_eq!(
            service.load_day(date).unwrap(),
            form(("06:00", "10:00"), ("17:00", "21:00"))
        );
    }

    #[test]
    fn test_load_day_rejects_duplicate_shift_index() {
        let date = make_date("2025-07-24");
        let record = |id: u128, label: &str| {
            StoredRecord::Shift(ShiftEventRecord {
                id: Uuid::from_u128(id),
                group_id: Uuid::from_u128(9),
                label: label.to_string(),
                date,
                shift_index: Some(1),
            })
        };
        let store = InMemoryStore::with_records(vec![
            record(1, "06:00 - 10:00"),
            record(2, "17:00 - 21:00"),
        ]);
        let service = service_with(Arc::new(store));

        match service.load_day(date) {
            Err(EngineError::CorruptRecord { id, .. }) => {
                assert_eq!(id, Uuid::from_u128(2).to_string())
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_day_with_corrupt_label_fails() {
        let date = make_date("2025-07-24");
        let store = InMemoryStore::with_records(vec![StoredRecord::Shift(ShiftEventRecord {
            id: Uuid::from_u128(1),
            group_id: Uuid::from_u128(9),
            label: "whenever".to_string(),
            date,
            shift_index: Some(1),
        })]);
        let service = service_with(Arc::new(store));

        assert!(matches!(
            service.load_day(date),
            Err(EngineError::CorruptRecord { .. })
        ));
    }

    #[test]
    fn test_calendar_events_exclude_summaries() {
        let service = service_with(Arc::new(InMemoryStore::new()));
        service.save_day(make_date("2025-07-24"), &form(("06:00", "10:00"), ("16:00", "20:00")));
        service.save_day(make_date("2025-07-25"), &form(("22:00", "06:00"), ("", "")));

        let events = service.calendar_events().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[2].text, "22:00 - 06:00");
        assert_eq!(events[0].group_id, events[1].group_id);
    }

    #[test]
    fn test_outcome_json_shape() {
        let ok = serde_json::to_value(SaveOutcome::saved()).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true}));

        let failed = serde_json::to_value(SaveOutcome::storage_failed()).unwrap();
        assert_eq!(
            failed,
            serde_json::json!({"success": false, "errors": [SAVE_FAILED_MESSAGE]})
        );
    }
}
