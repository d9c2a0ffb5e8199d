use chrono::Weekday;
use spiff_calendar::recurrence::{RecurrenceRule, Until, WeekdaySet};
use spiff_test::ymd;

pub struct OccurrenceCase {
    pub name: &'static str,
    pub anchor: &'static str,
    pub rule: RecurrenceRule,
    pub start: &'static str,
    pub last: &'static str,
    pub expected: &'static [&'static str],
}

#[expect(clippy::too_many_lines)]
pub fn occurrence_cases() -> Vec<OccurrenceCase> {
    vec![
        OccurrenceCase {
            name: "one_time_in_range",
            anchor: "2024-03-10",
            rule: RecurrenceRule::one_time(),
            start: "2024-03-01",
            last: "2024-03-31",
            expected: &["2024-03-10"],
        },
        OccurrenceCase {
            name: "one_time_out_of_range",
            anchor: "2024-04-10",
            rule: RecurrenceRule::one_time(),
            start: "2024-03-01",
            last: "2024-03-31",
            expected: &[],
        },
        OccurrenceCase {
            name: "daily_count_over_leap_day",
            anchor: "2024-02-27",
            rule: RecurrenceRule::daily(1).with_until(Until::Count(4)),
            start: "2024-02-01",
            last: "2024-03-31",
            expected: &["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"],
        },
        OccurrenceCase {
            name: "daily_until_inclusive",
            anchor: "2024-03-01",
            rule: RecurrenceRule::daily(1).with_until(Until::Date(ymd(2024, 3, 3))),
            start: "2024-02-01",
            last: "2024-03-31",
            expected: &["2024-03-01", "2024-03-02", "2024-03-03"],
        },
        OccurrenceCase {
            name: "daily_range_before_anchor",
            anchor: "2024-06-01",
            rule: RecurrenceRule::daily(1),
            start: "2024-05-01",
            last: "2024-05-31",
            expected: &[],
        },
        OccurrenceCase {
            name: "daily_every_third_day_clipped",
            anchor: "2024-01-01",
            rule: RecurrenceRule::daily(3),
            start: "2024-01-05",
            last: "2024-01-14",
            expected: &["2024-01-07", "2024-01-10", "2024-01-13"],
        },
        OccurrenceCase {
            name: "weekly_biweekly_tue_thu",
            anchor: "2024-03-05",
            rule: RecurrenceRule::weekly(2, [Weekday::Tue, Weekday::Thu].into_iter().collect::<WeekdaySet>()),
            start: "2024-03-01",
            last: "2024-03-31",
            expected: &["2024-03-05", "2024-03-07", "2024-03-19", "2024-03-21"],
        },
        OccurrenceCase {
            name: "monthly_last_friday",
            anchor: "2024-01-26",
            rule: RecurrenceRule::monthly_on_weekday(1, Weekday::Fri, -1),
            start: "2024-01-01",
            last: "2024-04-30",
            expected: &["2024-01-26", "2024-02-23", "2024-03-29", "2024-04-26"],
        },
        OccurrenceCase {
            name: "monthly_second_tuesday",
            anchor: "2024-01-09",
            rule: RecurrenceRule::monthly_on_weekday(1, Weekday::Tue, 2),
            start: "2024-01-01",
            last: "2024-03-31",
            expected: &["2024-01-09", "2024-02-13", "2024-03-12"],
        },
        OccurrenceCase {
            name: "monthly_every_monday",
            anchor: "2024-04-01",
            rule: RecurrenceRule::monthly_on_weekday(1, Weekday::Mon, 0),
            start: "2024-04-01",
            last: "2024-04-30",
            expected: &["2024-04-01", "2024-04-08", "2024-04-15", "2024-04-22", "2024-04-29"],
        },
        OccurrenceCase {
            name: "monthly_day_31_skips_short_months",
            anchor: "2024-01-31",
            rule: RecurrenceRule::monthly_on_day(1, 31),
            start: "2024-01-01",
            last: "2024-05-31",
            expected: &["2024-01-31", "2024-03-31", "2024-05-31"],
        },
        OccurrenceCase {
            name: "annually_leap_day",
            anchor: "2024-02-29",
            rule: RecurrenceRule::annually(1),
            start: "2024-01-01",
            last: "2032-12-31",
            expected: &["2024-02-29", "2028-02-29", "2032-02-29"],
        },
    ]
}

/// ## Summary
/// Expands `case` and compares against its expected dates.
///
/// ## Panics
/// Panics if the expansion fails or the dates differ.
#[expect(clippy::expect_used, reason = "test helper")]
pub fn assert_case(case: &OccurrenceCase) {
    let parse = |text: &str| spiff_core::util::date::parse_date(text).expect("valid case date");
    let dates = case
        .rule
        .occurrences(parse(case.anchor), parse(case.start), parse(case.last))
        .expect("expansion succeeds");
    let actual: Vec<String> = dates.iter().map(ToString::to_string).collect();
    assert_eq!(actual, case.expected, "case {}", case.name);
}
