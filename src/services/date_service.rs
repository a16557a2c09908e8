use chrono::{Datelike, Duration, NaiveDate};
use thiserror::Error;

use crate::models::RateQuery;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

const MAX_DIGITS: usize = 8;

/// Reasons a typed or picked date is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Invalid date format. Use DD/MM/YYYY or YYYY-MM-DD")]
    InvalidFormat,
    #[error("Day must be between 1 and 31")]
    DayOutOfRange,
    #[error("Month must be between 1 and 12")]
    MonthOutOfRange,
    #[error("Year must be between 1900 and 2100")]
    YearOutOfRange,
    #[error("Date cannot be in the future")]
    InFuture,
}

/// Re-mask free text as `DD/MM/YYYY`
///
/// Drops every non-digit, keeps at most eight digits and puts a `/` after the
/// day and month groups once the next digit arrives. Does not validate.
pub fn mask_date_input(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DIGITS)
        .collect();

    let mut masked = String::with_capacity(MAX_DIGITS + 2);
    for (i, digit) in digits.iter().enumerate() {
        if i == 2 || i == 4 {
            masked.push('/');
        }
        masked.push(*digit);
    }
    masked
}

/// Validate a `DD/MM/YYYY` string against `today`
///
/// Only the [1, 31] day bound is checked. A day past the end of its month
/// rolls into the following month (31/02/2025 becomes 2025-03-03).
pub fn validate_display_date(input: &str, today: NaiveDate) -> Result<RateQuery, DateError> {
    let parts: Vec<&str> = input.trim().split('/').collect();
    if parts.len() != 3 {
        return Err(DateError::InvalidFormat);
    }

    let day: u32 = parts[0].parse().map_err(|_| DateError::InvalidFormat)?;
    let month: u32 = parts[1].parse().map_err(|_| DateError::InvalidFormat)?;
    let year: i32 = parts[2].parse().map_err(|_| DateError::InvalidFormat)?;

    if !(1..=31).contains(&day) {
        return Err(DateError::DayOutOfRange);
    }
    if !(1..=12).contains(&month) {
        return Err(DateError::MonthOutOfRange);
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DateError::YearOutOfRange);
    }

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1).ok_or(DateError::InvalidFormat)?;
    let date = first_of_month + Duration::days(i64::from(day) - 1);

    if date > today {
        return Err(DateError::InFuture);
    }

    Ok(RateQuery::new(date))
}

/// Validate an ISO `YYYY-MM-DD` date as a date picker would supply it
///
/// Dates after `today` are clamped to `today`.
pub fn validate_picker_date(input: &str, today: NaiveDate) -> Result<RateQuery, DateError> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| DateError::InvalidFormat)?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(DateError::YearOutOfRange);
    }

    Ok(RateQuery::new(date.min(today)))
}

fn looks_like_iso(arg: &str) -> bool {
    let parts: Vec<&str> = arg.split('-').collect();
    parts.len() == 3
        && parts[0].len() == 4
        && parts.iter().all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

/// Turn a command argument into a query. ISO goes through the picker path.
/// Three separated digit groups (`5/3/2001`, `17 10 2025`) are read as day,
/// month and year. Anything else is masked and validated as typed input.
pub fn parse_date_argument(arg: &str, today: NaiveDate) -> Result<RateQuery, DateError> {
    let arg = arg.trim();
    if looks_like_iso(arg) {
        return validate_picker_date(arg, today);
    }

    let groups: Vec<&str> = arg
        .split(|c: char| !c.is_ascii_digit())
        .filter(|g| !g.is_empty())
        .collect();

    if groups.len() == 3 {
        validate_display_date(&groups.join("/"), today)
    } else {
        validate_display_date(&mask_date_input(arg), today)
    }
}
