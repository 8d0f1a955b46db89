use crate::error::CoreError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Plain calendar-date layouts, tried in order. ISO first; every form with
/// the year last is read month-first.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m-%d-%Y", "%m.%d.%Y", "%Y%m%d",
];

/// Date-time layouts whose time component is dropped.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parses the `date` column of a sales row into a calendar date.
///
/// Timestamps are truncated to their calendar day (in their own offset for
/// RFC 3339 values), so every record lands on exactly one day.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, CoreError> {
    let s = raw.trim();

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.date_naive());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ts.date());
        }
    }

    Err(CoreError::InvalidInput("date".to_string(), raw.to_string()))
}
