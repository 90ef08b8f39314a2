//! Single-file JSON store.
//!
//! The whole schedule lives in one JSON array of [`StoredRecord`]s. Every
//! write goes to a sibling temp file which is then renamed over the live file,
//! so a crash mid-write leaves the previous contents in place.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{DaySummary, ShiftEventRecord, StoredRecord};

use super::{ScheduleStore, replace_in, shift_records, summary_for};

/// A [`ScheduleStore`] persisted to a JSON file.
///
/// A missing file reads as an empty schedule; it is created on the first
/// write. A file that exists but cannot be parsed is an error, never
/// silently treated as empty.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// A store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, action: &str, err: impl std::fmt::Display) -> EngineError {
        EngineError::Storage {
            message: format!("failed to {} {}: {}", action, self.path.display(), err),
        }
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| self.storage_error("lock", "mutex poisoned"))
    }

    fn load(&self) -> EngineResult<Vec<StoredRecord>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(self.storage_error("read", err)),
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&data).map_err(|err| self.storage_error("parse", err))
    }

    fn save(&self, records: &[StoredRecord]) -> EngineResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|err| self.storage_error("create directory for", err))?;
        }

        let data = serde_json::to_string_pretty(records)
            .map_err(|err| self.storage_error("serialize", err))?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, data).map_err(|err| self.storage_error("write", err))?;
        fs::rename(&tmp_path, &self.path).map_err(|err| self.storage_error("replace", err))?;

        debug!(path = %self.path.display(), records = records.len(), "Saved schedule file");
        Ok(())
    }
}

impl ScheduleStore for JsonFileStore {
    fn records_for_date(&self, date: NaiveDate) -> EngineResult<Vec<ShiftEventRecord>> {
        let _guard = self.lock()?;
        let records = self.load()?;
        Ok(shift_records(&records)
            .filter(|record| record.date == date)
            .cloned()
            .collect())
    }

    fn all_event_records(&self) -> EngineResult<Vec<ShiftEventRecord>> {
        let _guard = self.lock()?;
        let records = self.load()?;
        Ok(shift_records(&records).cloned().collect())
    }

    fn summary_for_date(&self, date: NaiveDate) -> EngineResult<Option<DaySummary>> {
        let _guard = self.lock()?;
        let records = self.load()?;
        Ok(summary_for(&records, date).cloned())
    }

    fn replace_records_for_date(
        &self,
        date: NaiveDate,
        records: &[ShiftEventRecord],
        summary: &DaySummary,
    ) -> EngineResult<()> {
        let _guard = self.lock()?;
        let mut all = self.load()?;
        replace_in(&mut all, date, records, summary);
        self.save(&all)
    }
}
