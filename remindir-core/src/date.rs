//! Due-date normalization and display.
//!
//! Reminder dates reach the client as text in several shapes:
//! `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`, or a `YYYY-MM-DD` followed by a
//! `T` time-of-day. They are treated as calendar dates with no time component:
//! the date written in the text is the date used, with no timezone conversion.

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::constants::DATE_FORMAT;

/// Why a due date could not be normalized.
///
/// This never reaches the user: formatting falls back to the raw text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Due date is missing")]
    Missing,

    #[error("Unrecognized due date '{0}'. Expected YYYY-MM-DD, YYYY/MM/DD or MM/DD/YYYY")]
    Unrecognized(String),
}

/// The current calendar date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a loosely formatted due date into a calendar date.
pub fn normalize_date(raw: Option<&str>) -> Result<NaiveDate, DateError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(DateError::Missing);
    }

    let dashed = trimmed.replace('/', "-");

    // Year first; a trailing time-of-day is dropped.
    if let Ok((date, rest)) = NaiveDate::parse_and_remainder(&dashed, DATE_FORMAT) {
        if rest.is_empty() || is_time_of_day(rest) {
            return Ok(date);
        }
    }

    // Month first (US order)
    if let Ok(date) = NaiveDate::parse_from_str(&dashed, "%m-%d-%Y") {
        return Ok(date);
    }

    Err(DateError::Unrecognized(trimmed.to_string()))
}

/// `T10:00`, ` 10:00:00` and the like, after a year-first date.
fn is_time_of_day(rest: &str) -> bool {
    let time = match rest.strip_prefix('T') {
        Some(time) => time,
        None => rest.trim_start_matches(' '),
    };
    time.len() < rest.len() && time.starts_with(|c: char| c.is_ascii_digit())
}

/// Render a normalization outcome, passing `raw` through on failure.
pub fn format_normalized(outcome: &Result<NaiveDate, DateError>, raw: Option<&str>) -> String {
    match outcome {
        Ok(date) => date.format(DATE_FORMAT).to_string(),
        Err(_) => raw.unwrap_or_default().to_string(),
    }
}

/// Normalize and render a due date as `YYYY-MM-DD`, or the original text.
pub fn format_date(raw: Option<&str>) -> String {
    format_normalized(&normalize_date(raw), raw)
}
