//! Calendar-date utilities.
//!
//! All arithmetic works on [`NaiveDate`] values and returns new values; no
//! time-of-day or time zone ever participates.

use chrono::{DateTime, Datelike, Local, Months, NaiveDate, NaiveDateTime};

use crate::error::{EngineError, EngineResult};

/// Returns the calendar date `years` years after `date`.
///
/// A day that does not exist in the target month is clamped to the month's
/// last day, so 29 February plus one year is 28 February.
///
/// # Errors
///
/// Returns `DateOutOfRange` if the result is past chrono's supported range.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::add_years;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
/// let first = add_years(hire, 1).unwrap();
/// assert_eq!(first, NaiveDate::from_ymd_opt(2021, 2, 28).unwrap());
/// assert_eq!(add_years(first, 3).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
/// ```
pub fn add_years(date: NaiveDate, years: u32) -> EngineResult<NaiveDate> {
    years
        .checked_mul(12)
        .and_then(|months| date.checked_add_months(Months::new(months)))
        .ok_or(EngineError::DateOutOfRange { date })
}

/// Builds the "start year-end year" label of a period.
pub fn period_label(start: NaiveDate, end: NaiveDate) -> String {
    format!("{}-{}", start.year(), end.year())
}

/// The current calendar date on the local clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Reads a calendar date from a loosely-typed record field.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive datetimes written with
/// either a `T` or a space between date and time. For timestamps the date as written is kept and the time part is
/// dropped, so an offset never shifts the day.
///
/// # Errors
///
/// Returns `InvalidDate` naming `field` if no format matches.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
/// assert_eq!(parse_calendar_date("start_date", "2024-08-01").unwrap(), expected);
/// assert_eq!(parse_calendar_date("start_date", "2024-08-01T23:30:00-06:00").unwrap(), expected);
/// assert!(parse_calendar_date("start_date", "01/08/2024").is_err());
/// ```
pub fn parse_calendar_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }

    Err(EngineError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}
