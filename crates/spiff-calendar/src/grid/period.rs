//! Visible period of the calendar and the date range it covers.

use std::num::NonZeroU32;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use spiff_core::config::{CalendarConfig, PeriodMode};
use spiff_core::util::date::{add_days, first_of_month, last_of_month};

use crate::error::{CalendarError, CalendarResult};

/// What the calendar shows around its reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodSpec {
    /// The calendar month containing the reference date.
    Month,
    /// An N-day window. Multiples of 7 are aligned to Sunday.
    Days(NonZeroU32),
}

impl PeriodSpec {
    /// ## Summary
    /// Builds an N-day period.
    ///
    /// ## Errors
    /// Returns `CalendarError::Construction` if `days` is zero.
    pub fn days(days: u32) -> CalendarResult<Self> {
        NonZeroU32::new(days)
            .map(Self::Days)
            .ok_or_else(|| CalendarError::Construction("a day window needs at least one day".into()))
    }

    /// ## Summary
    /// Reads the period from the calendar section of the settings.
    ///
    /// ## Errors
    /// Returns a `CoreError::InvalidConfiguration` if `period = "days"` has no
    /// positive `days` value.
    pub fn from_config(config: &CalendarConfig) -> CalendarResult<Self> {
        match config.period {
            PeriodMode::Month => Ok(Self::Month),
            PeriodMode::Days => config
                .days
                .and_then(NonZeroU32::new)
                .map(Self::Days)
                .ok_or_else(|| {
                    spiff_core::error::CoreError::InvalidConfiguration(
                        "calendar.days must be a positive number when calendar.period is \"days\""
                            .into(),
                    )
                    .into()
                }),
        }
    }

    /// Returns true when the window starts on a Sunday.
    #[must_use]
    pub const fn is_week_aligned(self) -> bool {
        match self {
            Self::Month => false,
            Self::Days(days) => days.get() % 7 == 0,
        }
    }
}

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start: NaiveDate,
    pub last: NaiveDate,
}

impl VisibleRange {
    #[must_use]
    pub const fn new(start: NaiveDate, last: NaiveDate) -> Self {
        Self { start, last }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.last
    }

    /// Number of days in the range, counting both ends.
    #[must_use]
    pub fn len_days(&self) -> i64 {
        (self.last - self.start).num_days() + 1
    }

    /// Iterates every date of the range in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last;
        self.start.iter_days().take_while(move |date| *date <= last)
    }
}

/// Rounds back to the most recent Sunday (or `date` itself on a Sunday).
#[must_use]
pub fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    add_days(date, -i64::from(date.weekday().num_days_from_sunday()))
}

/// Rounds forward to the next Saturday (or `date` itself on a Saturday).
#[must_use]
pub fn saturday_on_or_after(date: NaiveDate) -> NaiveDate {
    add_days(date, 6 - i64::from(date.weekday().num_days_from_sunday()))
}

/// ## Summary
/// Computes the requested visible range for `period` around `reference`.
///
/// - `Month`: first through last day of the reference month.
/// - `Days(n)`, n a multiple of 7: n days starting at the preceding Sunday.
/// - `Days(n)` otherwise: n days starting at the reference date.
///
/// A caller-supplied `last` replaces the computed one unless it falls before
/// the computed start, in which case it is ignored.
#[must_use]
pub fn compute_visible_range(
    period: PeriodSpec,
    reference: NaiveDate,
    last: Option<NaiveDate>,
) -> VisibleRange {
    let (start, default_last) = match period {
        PeriodSpec::Month => (first_of_month(reference), last_of_month(reference)),
        PeriodSpec::Days(days) => {
            let start = if period.is_week_aligned() {
                sunday_on_or_before(reference)
            } else {
                reference
            };
            (start, add_days(start, i64::from(days.get()) - 1))
        }
    };

    let last = match last {
        Some(last) if last >= start => last,
        Some(discarded) => {
            tracing::debug!(%discarded, %start, "Ignoring last date before range start");
            default_last
        }
        None => default_last,
    };

    VisibleRange { start, last }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    fn days(n: u32) -> PeriodSpec {
        PeriodSpec::days(n).expect("positive day count")
    }

    #[test]
    fn test_month_leap_february() {
        let range = compute_visible_range(PeriodSpec::Month, ymd(2024, 2, 15), None);
        assert_eq!(range, VisibleRange::new(ymd(2024, 2, 1), ymd(2024, 2, 29)));
    }

    #[test]
    fn test_week_window_rounds_to_sunday() {
        // 2024-03-06 is a Wednesday
        let range = compute_visible_range(days(7), ymd(2024, 3, 6), None);
        assert_eq!(range, VisibleRange::new(ymd(2024, 3, 3), ymd(2024, 3, 9)));
    }

    #[test]
    fn test_two_week_window_on_sunday() {
        let range = compute_visible_range(days(14), ymd(2024, 3, 3), None);
        assert_eq!(range, VisibleRange::new(ymd(2024, 3, 3), ymd(2024, 3, 16)));
    }

    #[test]
    fn test_unaligned_window_starts_at_reference() {
        let range = compute_visible_range(days(3), ymd(2024, 3, 6), None);
        assert_eq!(range, VisibleRange::new(ymd(2024, 3, 6), ymd(2024, 3, 8)));

        let single = compute_visible_range(days(1), ymd(2024, 3, 6), None);
        assert_eq!(single.len_days(), 1);
    }

    #[test]
    fn test_supplied_last_kept() {
        let range =
            compute_visible_range(PeriodSpec::Month, ymd(2024, 2, 15), Some(ymd(2024, 3, 10)));
        assert_eq!(range.last, ymd(2024, 3, 10));
    }

    #[test_log::test]
    fn test_supplied_last_before_start_discarded() {
        let range =
            compute_visible_range(PeriodSpec::Month, ymd(2024, 2, 15), Some(ymd(2024, 1, 20)));
        assert_eq!(range.last, ymd(2024, 2, 29));
    }

    #[test]
    fn test_zero_days_is_construction_error() {
        let err = PeriodSpec::days(0).expect_err("zero days");
        assert!(matches!(err, CalendarError::Construction(_)));
    }

    #[test]
    fn test_from_config() {
        let mut config = CalendarConfig {
            period: PeriodMode::Days,
            days: Some(14),
            start: None,
            last: None,
            events: None,
        };
        assert_eq!(PeriodSpec::from_config(&config).expect("days"), days(14));

        config.days = None;
        assert!(matches!(
            PeriodSpec::from_config(&config),
            Err(CalendarError::CoreError(_))
        ));

        config.period = PeriodMode::Month;
        assert_eq!(PeriodSpec::from_config(&config).expect("month"), PeriodSpec::Month);
    }

    #[test]
    fn test_range_dates_and_contains() {
        let range = VisibleRange::new(ymd(2024, 12, 30), ymd(2025, 1, 2));
        let dates: Vec<NaiveDate> = range.dates().collect();
        assert_eq!(dates.len(), 4);
        assert_eq!(range.len_days(), 4);
        assert!(range.contains(ymd(2025, 1, 1)));
        assert!(!range.contains(ymd(2025, 1, 3)));
    }

    #[test]
    fn test_week_rounding_helpers() {
        assert_eq!(sunday_on_or_before(ymd(2024, 3, 3)), ymd(2024, 3, 3));
        assert_eq!(sunday_on_or_before(ymd(2024, 3, 9)), ymd(2024, 3, 3));
        assert_eq!(saturday_on_or_after(ymd(2024, 3, 9)), ymd(2024, 3, 9));
        assert_eq!(saturday_on_or_after(ymd(2024, 3, 3)), ymd(2024, 3, 9));
    }
}
