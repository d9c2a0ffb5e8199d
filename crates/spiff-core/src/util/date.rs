//! Calendar date helpers shared by the recurrence model and the grid.
//!
//! ## Summary
//! Dates are exchanged as ISO-8601 `YYYY-MM-DD`. The parser also accepts the
//! unpadded `YYYY-M-D` form written by older widget revisions.

use chrono::{Datelike, Months, NaiveDate, TimeDelta};

use crate::constants::MONTH_NAMES;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Parses a calendar date in `YYYY-MM-DD` or `YYYY-M-D` form.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the text is not a valid calendar date.
pub fn parse_date(text: &str) -> CoreResult<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|err| CoreError::ParseError(format!("invalid date {trimmed:?}: {err}")))
}

/// Formats a date as ISO-8601 `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats a date without zero padding (`2024-3-9`).
#[must_use]
pub fn format_legacy_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[must_use]
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// ## Summary
/// Shifts `date` by a signed number of days, saturating at the supported range.
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Number of days in the month containing `date`.
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    last_of_month(date).day()
}

/// ## Summary
/// Navbar title for a visible period starting at `date`, e.g. "February 2024".
#[must_use]
pub fn month_title(date: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[date.month0() as usize], date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_parse_padded() {
        assert_eq!(parse_date("2024-02-29").expect("parse"), ymd(2024, 2, 29));
    }

    #[test]
    fn test_parse_legacy_unpadded() {
        assert_eq!(parse_date("2024-3-9").expect("parse"), ymd(2024, 3, 9));
    }

    #[test]
    fn test_parse_rejects_invalid_day() {
        let err = parse_date("2023-02-29").expect_err("2023 is not a leap year");
        assert!(matches!(err, CoreError::ParseError(_)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date("next tuesday").is_err());
    }

    #[test]
    fn test_format_forms() {
        let date = ymd(2024, 3, 9);
        assert_eq!(format_date(date), "2024-03-09");
        assert_eq!(format_legacy_date(date), "2024-3-9");
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(first_of_month(ymd(2024, 2, 15)), ymd(2024, 2, 1));
        assert_eq!(last_of_month(ymd(2024, 2, 15)), ymd(2024, 2, 29));
        assert_eq!(last_of_month(ymd(2023, 12, 31)), ymd(2023, 12, 31));
        assert_eq!(days_in_month(ymd(2023, 2, 1)), 28);
        assert_eq!(days_in_month(ymd(2024, 4, 30)), 30);
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(ymd(2024, 2, 28), 2), ymd(2024, 3, 1));
        assert_eq!(add_days(ymd(2024, 1, 1), -1), ymd(2023, 12, 31));
        assert_eq!(add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(add_days(NaiveDate::MIN, -1), NaiveDate::MIN);
    }

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(ymd(2024, 2, 15)), "February 2024");
        assert_eq!(month_title(ymd(1999, 12, 1)), "December 1999");
    }
}
