//! Calendar date helpers.
//!
//! Entries are keyed by calendar date. Users may type dates either as
//! `YYYY-MM-DD` or as the compact `YYYYMMDD`; both resolve to a `NaiveDate`.

use crate::constants;
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};

/// The current calendar date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a date string in YYYY-MM-DD or YYYYMMDD format.
///
/// # Examples
///
/// ```
/// use moodlog::dates::parse_date;
///
/// let iso = parse_date("2023-01-15").unwrap();
/// let compact = parse_date("20230115").unwrap();
/// assert_eq!(iso, compact);
/// assert!(parse_date("15/01/2023").is_err());
/// ```
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_COMPACT))
}

/// Resolves an optional user-supplied date, falling back to `today`.
pub fn resolve_date(date_str: Option<&str>, today: NaiveDate) -> AppResult<NaiveDate> {
    match date_str {
        Some(raw) => parse_date(raw.trim())
            .map_err(|e| AppError::Input(format!("Invalid date format '{}': {}", raw, e))),
        None => Ok(today),
    }
}
