use crate::domain::error::DomainError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, SecondsFormat, Utc};

/// Offset-carrying forms beyond RFC 3339. `%#z` takes `Z`, `+hh`, `+hhmm` and `+hh:mm`.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
];

const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Parse an ISO-8601 date or date-time, keeping the offset it was written with.
///
/// Calendar-naive input (no offset, or a bare date) is read as UTC.
pub fn parse_timestamp_with_offset(s: &str) -> Result<DateTime<FixedOffset>, DomainError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(DateTime::from_naive_utc_and_offset(naive, Utc.fix()));
        }
    }
    for fmt in DATE_FORMATS {
        if let Some(naive) = NaiveDate::parse_from_str(s, fmt)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Ok(DateTime::from_naive_utc_and_offset(naive, Utc.fix()));
        }
    }
    Err(DomainError::Parse(format!(
        "Invalid timestamp: {s}. Expected ISO-8601 date or date-time"
    )))
}

/// Parse an ISO-8601 date or date-time into an absolute instant.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, DomainError> {
    parse_timestamp_with_offset(s).map(|dt| dt.with_timezone(&Utc))
}

/// Second-precision rendering used in reports.
pub fn format_report_date(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
