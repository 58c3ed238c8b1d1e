use chrono::{Duration, NaiveDate};

use crate::ValidationError;

/// Wire and display format of expiry dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` date.
///
/// Blank input is a missing date, anything else that fails to parse is an
/// invalid one.
pub fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Parse a date as typed on the command line.
///
/// Accepts `today`, `tomorrow`, `+N` (N days after `today`) and anything
/// [`parse_date`] accepts.
pub fn parse_date_relative(text: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let trimmed = text.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "today" => return Ok(today),
        "tomorrow" => {
            return today
                .succ_opt()
                .ok_or_else(|| ValidationError::InvalidDate(trimmed.to_string()));
        }
        _ => {}
    }

    if let Some(offset) = trimmed.strip_prefix('+') {
        return Some(offset)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<i64>().ok())
            .and_then(Duration::try_days)
            .and_then(|delta| today.checked_add_signed(delta))
            .ok_or_else(|| ValidationError::InvalidDate(trimmed.to_string()));
    }

    parse_date(trimmed)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
