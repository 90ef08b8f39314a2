//! Request parsing for the schedule API.
//!
//! Bodies are [`DayForm`](crate::models::DayForm) JSON and need no extra
//! types. Dates arrive as path segments and are checked here.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Parses a `YYYY-MM-DD` path segment.
pub fn parse_date(text: &str) -> EngineResult<NaiveDate> {
    let invalid = || EngineError::InvalidDate {
        value: text.to_string(),
    };
    if text.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| invalid())
}
