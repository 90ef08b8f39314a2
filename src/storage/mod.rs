//! Persistence collaborators.
//!
//! The engine never touches storage directly. It talks to a
//! [`ScheduleStore`], which keeps a flat list of shift records and day
//! summaries addressed by date. Two implementations are provided:
//!
//! - [`InMemoryStore`] for tests and embedding
//! - [`JsonFileStore`] for local persistence in a single JSON file

mod json_file;
mod memory;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{DaySummary, ShiftEventRecord, StoredRecord};

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

/// Storage for one user's schedule.
///
/// `replace_records_for_date` must be atomic from the caller's point of
/// view: readers see either the old set for the date or the new one.
pub trait ScheduleStore: Send + Sync {
    /// Shift records stored for `date`, in stored order. Summaries excluded.
    fn records_for_date(&self, date: NaiveDate) -> EngineResult<Vec<ShiftEventRecord>>;

    /// Every stored shift record. Summaries excluded.
    fn all_event_records(&self) -> EngineResult<Vec<ShiftEventRecord>>;

    /// The stored summary for `date`, if any.
    fn summary_for_date(&self, date: NaiveDate) -> EngineResult<Option<DaySummary>>;

    /// Discards everything stored for `date` and stores `records` plus
    /// `summary` in its place. `records` may be empty; the summary is always
    /// stored.
    fn replace_records_for_date(
        &self,
        date: NaiveDate,
        records: &[ShiftEventRecord],
        summary: &DaySummary,
    ) -> EngineResult<()>;
}

fn shift_records<'a>(
    records: impl IntoIterator<Item = &'a StoredRecord>,
) -> impl Iterator<Item = &'a ShiftEventRecord> {
    records.into_iter().filter_map(|record| match record {
        StoredRecord::Shift(shift) => Some(shift),
        StoredRecord::Summary(_) => None,
    })
}

fn summary_for<'a>(
    records: impl IntoIterator<Item = &'a StoredRecord>,
    date: NaiveDate,
) -> Option<&'a DaySummary> {
    records.into_iter().find_map(|record| match record {
        StoredRecord::Summary(summary) if summary.date == date => Some(summary),
        _ => None,
    })
}

/// Applies a replace-for-date to an in-memory record list.
fn replace_in(
    all: &mut Vec<StoredRecord>,
    date: NaiveDate,
    records: &[ShiftEventRecord],
    summary: &DaySummary,
) {
    all.retain(|record| record.date() != date);
    all.extend(records.iter().cloned().map(StoredRecord::Shift));
    all.push(StoredRecord::Summary(summary.clone()));
}
