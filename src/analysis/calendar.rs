// Day-granularity helpers. All calendar math is UTC.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::error::AuditError;

/// Last representable millisecond of `date`; the "at/before" bound for that day's lookups.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::default()).and_utc() + Duration::days(1) - Duration::milliseconds(1)
}

/// Parses an ISO calendar date (`YYYY-MM-DD`) and rejects dates after `today`.
pub fn parse_reference_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, AuditError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| AuditError::InvalidDate(format!("{raw:?}: {e}")))?;
    if date > today {
        return Err(AuditError::InvalidDate(format!(
            "{date} is after today ({today})"
        )));
    }
    Ok(date)
}

/// Parses an RFC 3339 instant for range queries.
pub fn parse_instant(name: &str, raw: &str) -> Result<DateTime<Utc>, AuditError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| AuditError::InvalidRange(format!("{name} {raw:?}: {e}")))
}
