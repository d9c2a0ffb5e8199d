//! Previous / next / today navigation over a visible period.
//!
//! Each function maps the current reference date to the next one; none of
//! them hold state.

use chrono::{Months, NaiveDate};
use spiff_core::util::date::{add_days, first_of_month};

use super::period::PeriodSpec;

/// Reference date one period before `current`.
#[must_use]
pub fn previous(current: NaiveDate, period: PeriodSpec) -> NaiveDate {
    match period {
        PeriodSpec::Month => {
            let first = first_of_month(current);
            first.checked_sub_months(Months::new(1)).unwrap_or(first)
        }
        PeriodSpec::Days(days) => add_days(current, -i64::from(days.get())),
    }
}

/// Reference date one period after `current`.
#[must_use]
pub fn next(current: NaiveDate, period: PeriodSpec) -> NaiveDate {
    match period {
        PeriodSpec::Month => {
            let first = first_of_month(current);
            first.checked_add_months(Months::new(1)).unwrap_or(first)
        }
        PeriodSpec::Days(days) => add_days(current, i64::from(days.get())),
    }
}

/// Reference date showing `now`; month views reset to the first of the month.
#[must_use]
pub fn today(period: PeriodSpec, now: NaiveDate) -> NaiveDate {
    match period {
        PeriodSpec::Month => first_of_month(now),
        PeriodSpec::Days(_) => now,
    }
}
