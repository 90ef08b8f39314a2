//! In-memory store.

use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{DaySummary, ShiftEventRecord, StoredRecord};

use super::{ScheduleStore, replace_in, shift_records, summary_for};

/// A [`ScheduleStore`] backed by a vector behind a mutex.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<StoredRecord>>,
}

impl InMemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `records`, in the given order.
    pub fn with_records(records: Vec<StoredRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// A copy of every stored record, summaries included.
    pub fn snapshot(&self) -> EngineResult<Vec<StoredRecord>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, Vec<StoredRecord>>> {
        self.records.lock().map_err(|_| EngineError::Storage {
            message: "in-memory store lock poisoned".to_string(),
        })
    }
}

impl ScheduleStore for InMemoryStore {
    fn records_for_date(&self, date: NaiveDate) -> EngineResult<Vec<ShiftEventRecord>> {
        let records = self.lock()?;
        Ok(shift_records(records.iter())
            .filter(|record| record.date == date)
            .cloned()
            .collect())
    }

    fn all_event_records(&self) -> EngineResult<Vec<ShiftEventRecord>> {
        let records = self.lock()?;
        Ok(shift_records(records.iter()).cloned().collect())
    }

    fn summary_for_date(&self, date: NaiveDate) -> EngineResult<Option<DaySummary>> {
        let records = self.lock()?;
        Ok(summary_for(records.iter(), date).cloned())
    }

    fn replace_records_for_date(
        &self,
        date: NaiveDate,
        records: &[ShiftEventRecord],
        summary: &DaySummary,
    ) -> EngineResult<()> {
        let mut all = self.lock()?;
        replace_in(&mut all, date, records, summary);
        Ok(())
    }
}
