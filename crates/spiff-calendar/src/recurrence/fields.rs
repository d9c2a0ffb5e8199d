//! Flat, UI-neutral field set for a recurrence editor.
//!
//! ## Summary
//! A presentation layer binds its controls to [`RecurrenceFields`]. Every
//! section is always present, mirroring an editor where only the section of
//! the selected frequency is visible. [`RecurrenceRule::from_fields`] reads
//! the sections that matter for the selected frequency;
//! [`RecurrenceRule::to_fields`] rebuilds the field set from a stored rule
//! and the event's anchor date.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use spiff_core::util::date::days_in_month;

use super::rule::{Frequency, MonthlySelector, RecurrenceRule, Until};
use super::weekday::WeekdaySet;

/// Value of the monthly weekday selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyWeekday {
    /// "Day N of the month", using the day-of-month field.
    PlainDay,
    /// "The Nth <weekday> of the month", using the occurrence field.
    Weekday(Weekday),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UntilMode {
    Forever,
    UntilDate,
    UntilCount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyFields {
    pub weekdays: WeekdaySet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyFields {
    pub weekday: MonthlyWeekday,
    /// 1..=4 from the start of the month, -1..=-4 from its end.
    pub occurrence: i32,
    pub day_of_month: u32,
    /// Upper bound of the day-of-month input.
    pub day_of_month_max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UntilFields {
    pub mode: UntilMode,
    pub date: NaiveDate,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceFields {
    pub frequency: Frequency,
    /// Bounded by [`RecurrenceFields::INTERVAL_RANGE`].
    pub interval: u32,
    pub weekly: WeeklyFields,
    pub monthly: MonthlyFields,
    pub until: UntilFields,
}

impl RecurrenceFields {
    /// Values the interval control accepts.
    pub const INTERVAL_RANGE: std::ops::RangeInclusive<u32> = 1..=RecurrenceRule::MAX_INTERVAL;

    /// ## Summary
    /// Field values of a freshly opened editor for an event on `anchor`.
    #[must_use]
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            frequency: Frequency::OneTime,
            interval: 1,
            weekly: WeeklyFields {
                weekdays: WeekdaySet::single(anchor.weekday()),
            },
            monthly: MonthlyFields {
                weekday: MonthlyWeekday::PlainDay,
                occurrence: 1,
                day_of_month: anchor.day(),
                day_of_month_max: days_in_month(anchor),
            },
            until: UntilFields {
                mode: UntilMode::Forever,
                date: anchor,
                count: 1,
            },
        }
    }

    /// Termination condition selected by the until section.
    #[must_use]
    pub const fn until(&self) -> Until {
        match self.until.mode {
            UntilMode::Forever => Until::Forever,
            UntilMode::UntilDate => Until::Date(self.until.date),
            UntilMode::UntilCount => Until::Count(self.until.count),
        }
    }

    /// Selects the until section matching `until` and stores its value.
    pub fn set_until(&mut self, until: Until) {
        match until {
            Until::Forever => self.until.mode = UntilMode::Forever,
            Until::Date(date) => {
                self.until.mode = UntilMode::UntilDate;
                self.until.date = date;
            }
            Until::Count(count) => {
                self.until.mode = UntilMode::UntilCount;
                self.until.count = count;
            }
        }
    }
}

impl RecurrenceRule {
    /// ## Summary
    /// Builds a rule from editor fields.
    ///
    /// Only the sections relevant to the selected frequency are read. One-time
    /// rules drop every other field.
    #[must_use]
    pub fn from_fields(fields: &RecurrenceFields) -> Self {
        let base = match fields.frequency {
            Frequency::OneTime => return Self::one_time(),
            Frequency::Daily => Self::daily(fields.interval),
            Frequency::Weekly => Self::weekly(fields.interval, fields.weekly.weekdays),
            Frequency::Monthly => match fields.monthly.weekday {
                MonthlyWeekday::PlainDay => Self::monthly_on_day(
                    fields.interval,
                    i32::try_from(fields.monthly.day_of_month).unwrap_or(i32::MAX),
                ),
                MonthlyWeekday::Weekday(weekday) => {
                    Self::monthly_on_weekday(fields.interval, weekday, fields.monthly.occurrence)
                }
            },
            Frequency::Annually => Self::annually(fields.interval),
        };

        let rule = base.with_until(fields.until());
        tracing::trace!(?rule, "Built recurrence rule from fields");
        rule
    }

    /// ## Summary
    /// Rebuilds editor fields from a stored rule.
    ///
    /// `anchor` supplies defaults the rule leaves unset: the weekly weekday,
    /// the day-of-month and its maximum.
    #[must_use]
    pub fn to_fields(&self, anchor: NaiveDate) -> RecurrenceFields {
        let mut fields = RecurrenceFields::new(anchor);
        fields.frequency = self.frequency;

        if !self.frequency.repeats() {
            return fields;
        }

        fields.interval = self.interval;
        fields.set_until(self.until);

        match self.frequency {
            Frequency::Weekly => fields.weekly.weekdays = self.weekly_days(anchor),
            Frequency::Monthly => match self.monthly_selector(anchor) {
                Some(MonthlySelector::NthWeekday { weekday, ordinal }) => {
                    fields.monthly.weekday = MonthlyWeekday::Weekday(weekday);
                    fields.monthly.occurrence = if self.count.is_some() { ordinal } else { 1 };
                }
                Some(MonthlySelector::DayOfMonth(day)) => {
                    fields.monthly.day_of_month = day.min(fields.monthly.day_of_month_max);
                }
                None => {}
            },
            Frequency::OneTime | Frequency::Daily | Frequency::Annually => {}
        }

        fields
    }
}

impl From<&RecurrenceFields> for RecurrenceRule {
    fn from(fields: &RecurrenceFields) -> Self {
        Self::from_fields(fields)
    }
}
