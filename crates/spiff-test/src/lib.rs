//! Spiff calendar - integration test support.
//!
//! Re-exports the workspace crates and provides shared fixtures for the
//! integration tests under `tests/`.

pub use {spiff_app, spiff_calendar, spiff_core};

use chrono::{NaiveDate, Weekday};
use spiff_calendar::recurrence::{RecurrenceRule, Until, WeekdaySet};

/// ## Summary
/// Builds a date from literal parts.
///
/// ## Panics
/// Panics if the parts do not form a valid date.
#[must_use]
#[expect(clippy::expect_used, reason = "test fixture with literal dates")]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Every day from `start` through `last`, inclusive.
pub fn each_day(start: NaiveDate, last: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= last)
}

/// Termination conditions used when enumerating rules.
#[must_use]
pub fn sample_untils() -> Vec<Until> {
    vec![
        Until::Forever,
        Until::Date(ymd(2025, 6, 30)),
        Until::Count(1),
        Until::Count(10),
    ]
}

/// ## Summary
/// A broad set of valid rules: every frequency, several intervals, weekday
/// sets, monthly selectors, and termination conditions.
#[must_use]
pub fn valid_rules() -> Vec<RecurrenceRule> {
    let weekday_sets = [
        WeekdaySet::single(Weekday::Sun),
        WeekdaySet::single(Weekday::Wed),
        [Weekday::Mon, Weekday::Fri].into_iter().collect(),
        WeekdaySet::ALL,
    ];
    let ordinals = [-4, -1, 0, 1, 2, 4];
    let days_of_month = [1, 15, 28, 31];

    let mut rules = vec![RecurrenceRule::one_time()];
    for interval in [1, 2, 3] {
        let mut bases = vec![
            RecurrenceRule::daily(interval),
            RecurrenceRule::annually(interval),
        ];
        bases.extend(
            weekday_sets
                .iter()
                .map(|set| RecurrenceRule::weekly(interval, *set)),
        );
        bases.extend(
            days_of_month
                .iter()
                .map(|day| RecurrenceRule::monthly_on_day(interval, *day)),
        );
        for weekday in [Weekday::Sun, Weekday::Tue, Weekday::Sat] {
            bases.extend(
                ordinals
                    .iter()
                    .map(|ordinal| RecurrenceRule::monthly_on_weekday(interval, weekday, *ordinal)),
            );
        }

        for base in bases {
            rules.extend(sample_untils().into_iter().map(|until| base.with_until(until)));
        }
    }
    rules
}
