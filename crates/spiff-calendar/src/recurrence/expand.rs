//! Occurrence expansion using the `rrule` crate.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use rrule::{RRuleSet, Tz};
use spiff_core::util::date::add_days;

use super::rule::{Frequency, MonthlySelector, RecurrenceRule, Until};
use super::weekday::rrule_code;
use crate::error::{CalendarError, CalendarResult};

/// Upper bound on occurrences produced for a single range.
const MAX_OCCURRENCES: u16 = u16::MAX;

fn midnight_utc(date: NaiveDate) -> chrono::DateTime<Tz> {
    date.and_time(NaiveTime::MIN).and_utc().with_timezone(&Tz::UTC)
}

impl RecurrenceRule {
    /// ## Summary
    /// Renders the rule as an RFC 5545 RRULE value for an event on `anchor`.
    ///
    /// Returns `None` for one-time rules.
    #[must_use]
    pub fn to_rrule_text(&self, anchor: NaiveDate) -> Option<String> {
        let freq = match self.frequency {
            Frequency::OneTime => return None,
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Annually => "YEARLY",
        };

        let mut text = format!("FREQ={freq};INTERVAL={}", self.interval);

        match self.frequency {
            Frequency::Weekly => {
                let days: Vec<&str> = self.weekly_days(anchor).iter().map(rrule_code).collect();
                text.push_str(&format!(";BYDAY={}", days.join(",")));
            }
            Frequency::Monthly => match self.monthly_selector(anchor) {
                Some(MonthlySelector::DayOfMonth(day)) => {
                    text.push_str(&format!(";BYMONTHDAY={day}"));
                }
                Some(MonthlySelector::NthWeekday { weekday, ordinal: 0 }) => {
                    text.push_str(&format!(";BYDAY={}", rrule_code(weekday)));
                }
                Some(MonthlySelector::NthWeekday { weekday, ordinal }) => {
                    text.push_str(&format!(";BYDAY={ordinal}{}", rrule_code(weekday)));
                }
                None => {}
            },
            Frequency::OneTime | Frequency::Daily | Frequency::Annually => {}
        }

        match self.until {
            Until::Forever => {}
            Until::Date(date) => {
                text.push_str(&format!(";UNTIL={}T235959Z", date.format("%Y%m%d")));
            }
            Until::Count(count) => {
                text.push_str(&format!(";COUNT={count}"));
            }
        }

        Some(text)
    }

    /// ## Summary
    /// Lists the dates in `[start, last]` on which an event anchored at
    /// `anchor` occurs, in ascending order.
    ///
    /// The anchor starts the recurrence but is only an occurrence when the
    /// rule selects it: a weekly rule whose weekdays leave out the anchor's
    /// weekday begins on the first selected day after it.
    ///
    /// ## Errors
    /// Returns `CalendarError::InvalidRule` if the rule fails validation, or
    /// `CalendarError::Expansion` if the recurrence cannot be expanded.
    pub fn occurrences(
        &self,
        anchor: NaiveDate,
        start: NaiveDate,
        last: NaiveDate,
    ) -> CalendarResult<Vec<NaiveDate>> {
        let errors = self.validate();
        if !errors.is_empty() {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            return Err(CalendarError::InvalidRule(messages.join("; ")));
        }

        let in_range = |date: &NaiveDate| *date >= start && *date <= last;

        let Some(rrule_text) = self.to_rrule_text(anchor) else {
            return Ok(Some(anchor).filter(in_range).into_iter().collect());
        };

        if last < start || last < anchor {
            return Ok(Vec::new());
        }
        if self.until.date().is_some_and(|until| until < anchor) {
            return Ok(Vec::new());
        }

        let rrule_string = format!(
            "DTSTART:{}T000000Z\nRRULE:{rrule_text}",
            anchor.format("%Y%m%d")
        );
        tracing::trace!(rrule = %rrule_string, %start, %last, "Expanding recurrence");

        let rrule_set = rrule_string
            .parse::<RRuleSet>()
            .map_err(|err| CalendarError::Expansion(err.to_string()))?;

        let after = midnight_utc(start) - TimeDelta::seconds(1);
        let before = midnight_utc(add_days(last, 1));
        let result = rrule_set.after(after).before(before).all(MAX_OCCURRENCES);

        if result.limited {
            tracing::warn!(
                rrule = %rrule_text,
                limit = MAX_OCCURRENCES,
                "Occurrence expansion hit its limit"
            );
        }

        let mut dates: Vec<NaiveDate> = result
            .dates
            .iter()
            .map(chrono::DateTime::date_naive)
            .filter(in_range)
            .collect();
        dates.dedup();

        tracing::debug!(count = dates.len(), "Expanded recurrence occurrences");
        Ok(dates)
    }
}
