//! Recurrence rule record: how a single event repeats.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use spiff_core::constants::FREQUENCY_LABELS;

use super::weekday::WeekdaySet;

/// Recurrence frequency class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    #[default]
    OneTime,
    Daily,
    Weekly,
    Monthly,
    Annually,
}

impl Frequency {
    /// All frequencies in editor order.
    pub const ALL: [Self; 5] = [
        Self::OneTime,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Annually,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::OneTime => 0,
            Self::Daily => 1,
            Self::Weekly => 2,
            Self::Monthly => 3,
            Self::Annually => 4,
        }
    }

    /// ## Summary
    /// Maps an editor selection index to a frequency.
    ///
    /// Unknown indexes select the one-time section.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        FREQUENCY_LABELS[self.index()]
    }

    /// Returns true for every frequency that actually repeats.
    #[must_use]
    pub const fn repeats(self) -> bool {
        !matches!(self, Self::OneTime)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Termination condition of a recurrence.
///
/// Exactly one mode is active at a time; assigning a new value replaces
/// whichever was set before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Until {
    #[default]
    Forever,
    /// Last date on which an occurrence may fall (inclusive).
    Date(NaiveDate),
    /// Total number of occurrences.
    Count(u32),
}

impl Until {
    #[must_use]
    pub const fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(date),
            _ => None,
        }
    }

    #[must_use]
    pub const fn count(self) -> Option<u32> {
        match self {
            Self::Count(count) => Some(count),
            _ => None,
        }
    }
}

/// Interpretation of a monthly rule's `target`/`count` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthlySelector {
    /// Same day-of-month every time.
    DayOfMonth(u32),
    /// The Nth (or Nth-from-last when negative) weekday of the month.
    /// An ordinal of 0 selects every such weekday.
    NthWeekday { weekday: Weekday, ordinal: i32 },
}

/// How a single event repeats, independent of any occurrence.
///
/// `target` and `count` are frequency dependent:
/// - weekly: `target` holds the selected weekdays, `count` is unused
/// - monthly: an empty `target` means "fixed day-of-month" and `count` holds
///   that day; otherwise `target` holds one weekday and `count` the ordinal
/// - annually: `target` is the empty set, `count` is unused
/// - daily and one-time: both unused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<WeekdaySet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(default)]
    pub until: Until,
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self::one_time()
    }
}

impl RecurrenceRule {
    /// Largest interval the expansion engine accepts.
    pub const MAX_INTERVAL: u32 = 65_535;

    /// ## Summary
    /// Rule an event editor starts from: one-time, interval 1, weekday target
    /// taken from the anchor date, no end.
    #[must_use]
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            target: Some(WeekdaySet::single(anchor.weekday())),
            ..Self::one_time()
        }
    }

    #[must_use]
    pub const fn one_time() -> Self {
        Self {
            frequency: Frequency::OneTime,
            interval: 1,
            target: None,
            count: None,
            until: Until::Forever,
        }
    }

    #[must_use]
    pub const fn daily(interval: u32) -> Self {
        Self {
            frequency: Frequency::Daily,
            interval,
            target: None,
            count: None,
            until: Until::Forever,
        }
    }

    #[must_use]
    pub const fn weekly(interval: u32, weekdays: WeekdaySet) -> Self {
        Self {
            frequency: Frequency::Weekly,
            interval,
            target: Some(weekdays),
            count: None,
            until: Until::Forever,
        }
    }

    #[must_use]
    pub const fn monthly_on_day(interval: u32, day_of_month: i32) -> Self {
        Self {
            frequency: Frequency::Monthly,
            interval,
            target: Some(WeekdaySet::EMPTY),
            count: Some(day_of_month),
            until: Until::Forever,
        }
    }

    #[must_use]
    pub const fn monthly_on_weekday(interval: u32, weekday: Weekday, ordinal: i32) -> Self {
        Self {
            frequency: Frequency::Monthly,
            interval,
            target: Some(WeekdaySet::single(weekday)),
            count: Some(ordinal),
            until: Until::Forever,
        }
    }

    #[must_use]
    pub const fn annually(interval: u32) -> Self {
        Self {
            frequency: Frequency::Annually,
            interval,
            target: Some(WeekdaySet::EMPTY),
            count: None,
            until: Until::Forever,
        }
    }

    #[must_use]
    pub const fn with_until(mut self, until: Until) -> Self {
        self.until = until;
        self
    }

    /// Replaces the termination condition, clearing the previous one.
    pub fn set_until(&mut self, until: Until) {
        tracing::trace!(?until, "Setting recurrence termination");
        self.until = until;
    }

    /// Weekday set of a weekly rule, defaulting to the anchor's weekday when unset.
    #[must_use]
    pub fn weekly_days(&self, anchor: NaiveDate) -> WeekdaySet {
        self.target
            .unwrap_or_else(|| WeekdaySet::single(anchor.weekday()))
    }

    /// ## Summary
    /// Resolves the monthly selector, falling back to the anchor's
    /// day-of-month when the rule carries none.
    ///
    /// Returns `None` for non-monthly rules.
    #[must_use]
    pub fn monthly_selector(&self, anchor: NaiveDate) -> Option<MonthlySelector> {
        if self.frequency != Frequency::Monthly {
            return None;
        }

        match self.target.and_then(WeekdaySet::first) {
            Some(weekday) => Some(MonthlySelector::NthWeekday {
                weekday,
                ordinal: self.count.unwrap_or(0),
            }),
            None => {
                let day = self
                    .count
                    .and_then(|count| u32::try_from(count).ok())
                    .filter(|day| *day >= 1)
                    .unwrap_or_else(|| anchor.day());
                Some(MonthlySelector::DayOfMonth(day))
            }
        }
    }
}
