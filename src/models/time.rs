//! Wall-clock time and shift interval types.
//!
//! A [`TimeOfDay`] has no date and no timezone. A [`ShiftInterval`] pairs two
//! of them; when the end is earlier than the start the interval is read as
//! ending on the following day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calculation::duration;
use crate::error::{EngineError, EngineResult};

/// Number of minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Separator between start and end in a shift label ("08:00 - 16:00").
pub const LABEL_SEPARATOR: &str = " - ";

/// A wall-clock time with minute precision.
///
/// Ordering follows the clock within a single day, so `23:00 > 01:00`.
///
/// # Example
///
/// ```
/// use schedule_engine::models::TimeOfDay;
///
/// let time: TimeOfDay = "06:55".parse().unwrap();
/// assert_eq!(time.hour(), 6);
/// assert_eq!(time.minute(), 55);
/// assert_eq!(time.to_string(), "06:55");
/// assert!("6:55".parse::<TimeOfDay>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

    /// Builds a time from hour and minute, or `None` when either is out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    /// Const constructor for rule defaults. Out-of-range input fails const evaluation.
    pub(crate) const fn hm(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60);
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Parses strict `HH:MM` text (24-hour, zero-padded).
    pub fn parse(text: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidTime {
            value: text.to_string(),
        };

        let bytes = text.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let value = |hi: u8, lo: u8| u32::from(hi - b'0') * 10 + u32::from(lo - b'0');
        Self::new(value(digits[0], digits[1]), value(digits[2], digits[3])).ok_or_else(invalid)
    }

    /// The hour, 0-23.
    pub fn hour(self) -> u32 {
        u32::from(self.minutes / 60)
    }

    /// The minute, 0-59.
    pub fn minute(self) -> u32 {
        u32::from(self.minutes % 60)
    }

    /// Minutes elapsed since 00:00 on the same day.
    pub fn minutes_from_midnight(self) -> u32 {
        u32::from(self.minutes)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// A worked interval between two wall-clock times.
///
/// When `end < start` the interval crosses midnight. When `end == start` it
/// is treated as empty (0 minutes), never as a full day.
///
/// # Example
///
/// ```
/// use schedule_engine::models::ShiftInterval;
///
/// let night = ShiftInterval::parse("23:00", "01:00").unwrap();
/// assert!(night.crosses_midnight());
/// assert_eq!(night.duration_minutes(), 120);
/// assert_eq!(night.to_string(), "23:00 - 01:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftInterval {
    /// Entry time ("entrada").
    pub start: TimeOfDay,
    /// Exit time ("salida").
    pub end: TimeOfDay,
}

impl ShiftInterval {
    /// Creates an interval from two times.
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parses an interval from two `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        Ok(Self::new(TimeOfDay::parse(start)?, TimeOfDay::parse(end)?))
    }

    /// True when the end falls on the following day.
    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Length of the interval in minutes, in `0..=1440`.
    pub fn duration_minutes(&self) -> u32 {
        duration(self.start, self.end)
    }
}

impl fmt::Display for ShiftInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, LABEL_SEPARATOR, self.end)
    }
}

impl FromStr for ShiftInterval {
    type Err = EngineError;

    /// Parses a label of the form `"HH:MM - HH:MM"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(LABEL_SEPARATOR)
            .ok_or_else(|| EngineError::InvalidTime {
                value: s.to_string(),
            })?;
        Self::parse(start, end)
    }
}
