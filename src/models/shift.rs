//! Shift entry models.
//!
//! [`ShiftEntry`] and [`DayShifts`] are the typed view the calculation code
//! works on. [`ShiftForm`] and [`DayForm`] are the text view exchanged with a
//! front end, where an empty string means "not entered".

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::time::{ShiftInterval, TimeOfDay};

/// One shift as entered by the user. Either time may still be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEntry {
    /// Entry time, if set.
    pub start: Option<TimeOfDay>,
    /// Exit time, if set.
    pub end: Option<TimeOfDay>,
}

impl ShiftEntry {
    /// An entry with neither time set.
    pub const EMPTY: ShiftEntry = ShiftEntry {
        start: None,
        end: None,
    };

    /// An entry with both times set.
    pub fn complete(interval: ShiftInterval) -> Self {
        Self {
            start: Some(interval.start),
            end: Some(interval.end),
        }
    }

    /// The interval, only once both times are set.
    pub fn interval(&self) -> Option<ShiftInterval> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(ShiftInterval::new(start, end)),
            _ => None,
        }
    }

    /// True when neither time is set.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl From<ShiftInterval> for ShiftEntry {
    fn from(interval: ShiftInterval) -> Self {
        Self::complete(interval)
    }
}

/// The (up to) two shifts worked on one calendar date.
///
/// A complete second shift marks the day as a split shift ("turno partido").
///
/// # Example
///
/// ```
/// use schedule_engine::models::{DayShifts, ShiftInterval};
///
/// let day = DayShifts::split(
///     ShiftInterval::parse("08:00", "11:00").unwrap(),
///     ShiftInterval::parse("17:00", "21:00").unwrap(),
/// );
/// assert!(day.is_split());
/// assert_eq!(day.complete_shifts().count(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayShifts {
    /// First shift of the day.
    pub shift1: ShiftEntry,
    /// Second shift of the day.
    pub shift2: ShiftEntry,
}

impl DayShifts {
    /// A day with a single complete shift.
    pub fn single(interval: ShiftInterval) -> Self {
        Self {
            shift1: interval.into(),
            shift2: ShiftEntry::EMPTY,
        }
    }

    /// A split-shift day with two complete shifts.
    pub fn split(first: ShiftInterval, second: ShiftInterval) -> Self {
        Self {
            shift1: first.into(),
            shift2: second.into(),
        }
    }

    /// Complete shifts in fixed order, paired with their 1-based index.
    pub fn complete_shifts(&self) -> impl Iterator<Item = (u8, ShiftInterval)> + '_ {
        [(1, &self.shift1), (2, &self.shift2)]
            .into_iter()
            .filter_map(|(index, entry)| entry.interval().map(|interval| (index, interval)))
    }

    /// True when the second shift is complete.
    pub fn is_split(&self) -> bool {
        self.shift2.interval().is_some()
    }
}

/// Text form of one shift, as a front end sends and receives it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftForm {
    /// Entry time as `HH:MM`, or empty.
    #[serde(rename = "entrada", default)]
    pub start: String,
    /// Exit time as `HH:MM`, or empty.
    #[serde(rename = "salida", default)]
    pub end: String,
}

impl ShiftForm {
    /// Builds a form from raw strings.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses both fields. Blank fields become `None`; every malformed field
    /// is reported.
    pub fn parse(&self) -> Result<ShiftEntry, Vec<EngineError>> {
        let mut errors = Vec::new();
        let mut field = |text: &str| {
            if text.trim().is_empty() {
                return None;
            }
            TimeOfDay::parse(text)
                .map_err(|err| errors.push(err))
                .ok()
        };

        let start = field(&self.start);
        let end = field(&self.end);

        if errors.is_empty() {
            Ok(ShiftEntry { start, end })
        } else {
            Err(errors)
        }
    }
}

impl From<ShiftInterval> for ShiftForm {
    fn from(interval: ShiftInterval) -> Self {
        Self::new(interval.start.to_string(), interval.end.to_string())
    }
}

/// Text form of a whole day: `{"turno1": {...}, "turno2": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayForm {
    /// First shift.
    #[serde(rename = "turno1", default)]
    pub shift1: ShiftForm,
    /// Second shift.
    #[serde(rename = "turno2", default)]
    pub shift2: ShiftForm,
}

impl DayForm {
    /// Parses both shifts, collecting every malformed field across the day.
    pub fn parse(&self) -> Result<DayShifts, Vec<EngineError>> {
        match (self.shift1.parse(), self.shift2.parse()) {
            (Ok(shift1), Ok(shift2)) => Ok(DayShifts { shift1, shift2 }),
            (first, second) => Err(first
                .err()
                .into_iter()
                .chain(second.err())
                .flatten()
                .collect()),
        }
    }
}
