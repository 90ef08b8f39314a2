//! Persisted record models.
//!
//! The store holds a flat list of [`StoredRecord`]s: one
//! [`ShiftEventRecord`] per worked shift and one [`DaySummary`] per saved
//! date, all addressed by date and correlated through a shared `group_id`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::time::ShiftInterval;

/// One persisted worked shift.
///
/// # Example
///
/// ```
/// use schedule_engine::models::ShiftEventRecord;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let record = ShiftEventRecord {
///     id: Uuid::from_u128(1),
///     group_id: Uuid::from_u128(2),
///     label: "22:00 - 06:00".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 7, 24).unwrap(),
///     shift_index: Some(1),
/// };
/// assert_eq!(record.interval().unwrap().duration_minutes(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEventRecord {
    /// Unique identifier of this record.
    pub id: Uuid,
    /// Identifier shared with the other shift and the summary of the same day.
    pub group_id: Uuid,
    /// `"HH:MM - HH:MM"` text of the shift.
    pub label: String,
    /// The calendar date the shift belongs to.
    pub date: NaiveDate,
    /// 1 for the first shift of the day, 2 for the second. Absent on records
    /// written before the index existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_index: Option<u8>,
}

impl ShiftEventRecord {
    /// Recovers the shift interval from the label.
    pub fn interval(&self) -> EngineResult<ShiftInterval> {
        self.label
            .parse()
            .map_err(|err: EngineError| EngineError::CorruptRecord {
                id: self.id.to_string(),
                message: err.to_string(),
            })
    }
}

/// Derived totals and bonus flags for one date ("resumen").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Identifier of the summary; equal to `group_id`.
    pub id: Uuid,
    /// Identifier shared with the day's shift records.
    pub group_id: Uuid,
    /// The summarised date.
    pub date: NaiveDate,
    /// Sum of all complete shift durations, in minutes.
    pub total_duration_minutes: u32,
    /// Minutes worked inside the night window.
    pub night_minutes: u32,
    /// Whether a second shift was worked ("turno partido").
    pub is_split_shift: bool,
    /// Early-morning bonus ("plus madrugada").
    pub early_morning_bonus: bool,
    /// Maintenance bonus ("plus mantenimiento").
    pub maintenance_bonus: bool,
    /// Transport bonus ("plus transporte"); always granted.
    pub transport_bonus: bool,
}

impl DaySummary {
    /// Total worked time in hours.
    ///
    /// ```
    /// # use schedule_engine::models::DaySummary;
    /// # use chrono::NaiveDate;
    /// # use rust_decimal::Decimal;
    /// # use uuid::Uuid;
    /// let summary = DaySummary {
    ///     id: Uuid::nil(),
    ///     group_id: Uuid::nil(),
    ///     date: NaiveDate::from_ymd_opt(2025, 7, 24).unwrap(),
    ///     total_duration_minutes: 450,
    ///     night_minutes: 90,
    ///     is_split_shift: false,
    ///     early_morning_bonus: false,
    ///     maintenance_bonus: true,
    ///     transport_bonus: true,
    /// };
    /// assert_eq!(summary.total_hours(), Decimal::new(75, 1)); // 7.5
    /// assert_eq!(summary.night_hours(), Decimal::new(15, 1)); // 1.5
    /// ```
    pub fn total_hours(&self) -> Decimal {
        minutes_to_hours(self.total_duration_minutes)
    }

    /// Night time in hours.
    pub fn night_hours(&self) -> Decimal {
        minutes_to_hours(self.night_minutes)
    }
}

fn minutes_to_hours(minutes: u32) -> Decimal {
    Decimal::new(i64::from(minutes), 0) / Decimal::new(60, 0)
}

/// An entry of the flat record list, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoredRecord {
    /// A worked shift.
    #[serde(rename = "shift")]
    Shift(ShiftEventRecord),
    /// The day summary.
    #[serde(rename = "resumen")]
    Summary(DaySummary),
}

impl StoredRecord {
    /// The date the record is addressed by.
    pub fn date(&self) -> NaiveDate {
        match self {
            StoredRecord::Shift(record) => record.date,
            StoredRecord::Summary(summary) => summary.date,
        }
    }
}

/// A shift record projected for month-view calendar display.
///
/// Events span the whole day they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Record identifier.
    pub id: Uuid,
    /// Display text, the shift label.
    pub text: String,
    /// 00:00:00 on the shift date.
    pub start: NaiveDateTime,
    /// 23:59:59 on the shift date.
    pub end: NaiveDateTime,
    /// Day correlation identifier.
    pub group_id: Uuid,
}

impl From<&ShiftEventRecord> for CalendarEvent {
    fn from(record: &ShiftEventRecord) -> Self {
        let start = record.date.and_time(NaiveTime::MIN);
        Self {
            id: record.id,
            text: record.label.clone(),
            start,
            end: start + Duration::seconds(86_399),
            group_id: record.group_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn shift_record(label: &str, index: Option<u8>) -> ShiftEventRecord {
        ShiftEventRecord {
            id: Uuid::from_u128(10),
            group_id: Uuid::from_u128(20),
            label: label.to_string(),
            date: make_date("2025-07-24"),
            shift_index: index,
        }
    }

    fn summary() -> DaySummary {
        DaySummary {
            id: Uuid::from_u128(20),
            group_id: Uuid::from_u128(20),
            date: make_date("2025-07-24"),
            total_duration_minutes: 480,
            night_minutes: 0,
            is_split_shift: false,
            early_morning_bonus: false,
            maintenance_bonus: true,
            transport_bonus: true,
        }
    }

    #[test]
    fn test_record_interval_from_label() {
        let record = shift_record("08:00 - 16:00", Some(1));
        assert_eq!(
            record.interval().unwrap(),
            ShiftInterval::parse("08:00", "16:00").unwrap()
        );
    }

    #[test]
    fn test_record_with_bad_label_is_corrupt() {
        let record = shift_record("morning", Some(1));
        match record.interval() {
            Err(EngineError::CorruptRecord { id, .. }) => {
                assert_eq!(id, Uuid::from_u128(10).to_string())
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_stored_records_are_tagged() {
        let record = shift_record("08:00 - 16:00", Some(2));
        let shift = serde_json::to_value(StoredRecord::Shift(record)).unwrap();
        assert_eq!(shift["type"], "shift");
        assert_eq!(shift["label"], "08:00 - 16:00");
        assert_eq!(shift["shift_index"], 2);
        assert_eq!(shift["date"], "2025-07-24");

        let summary = serde_json::to_value(StoredRecord::Summary(summary())).unwrap();
        assert_eq!(summary["type"], "resumen");
        assert_eq!(summary["total_duration_minutes"], 480);
        assert_eq!(summary["transport_bonus"], true);
    }

    #[test]
    fn test_record_without_index_deserializes() {
        let json = r#"{
            "type": "shift",
            "id": "00000000-0000-0000-0000-00000000000a",
            "group_id": "00000000-0000-0000-0000-000000000014",
            "label": "09:00 - 13:00",
            "date": "2025-07-24"
        }"#;
        let record: StoredRecord = serde_json::from_str(json).unwrap();
        match record {
            StoredRecord::Shift(shift) => assert_eq!(shift.shift_index, None),
            other => panic!("expected shift, got {:?}", other),
        }
    }

    #[test]
    fn test_stored_record_date() {
        assert_eq!(
            StoredRecord::Summary(summary()).date(),
            make_date("2025-07-24")
        );
    }

    #[test]
    fn test_calendar_event_spans_whole_day() {
        let event = CalendarEvent::from(&shift_record("22:00 - 06:00", Some(1)));
        assert_eq!(event.text, "22:00 - 06:00");
        assert_eq!(event.start.to_string(), "2025-07-24 00:00:00");
        assert_eq!(event.end.to_string(), "2025-07-24 23:59:59");
        assert_eq!(event.group_id, Uuid::from_u128(20));
    }

    #[test]
    fn test_summary_hours() {
        let summary = summary();
        assert_eq!(summary.total_hours(), Decimal::new(8, 0));
        assert_eq!(summary.night_hours(), Decimal::ZERO);
    }
}
