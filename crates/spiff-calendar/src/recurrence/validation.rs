//! ## Summary
//! Validation of recurrence rules before an edit is saved.
//!
//! Failures are returned as data. Each error carries a tag naming the editor
//! field (or field group) at fault so the caller can highlight it.

use std::fmt;

use serde::Serialize;

use super::rule::{Frequency, RecurrenceRule, Until};
use super::weekday::WeekdaySet;

/// Editor field or field group a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTag {
    Interval,
    Weekdays,
    MonthlyWeekday,
    Occurrence,
    DayOfMonth,
    UntilCount,
}

impl FieldTag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interval => "interval",
            Self::Weekdays => "weekdays",
            Self::MonthlyWeekday => "monthly_weekday",
            Self::Occurrence => "occurrence",
            Self::DayOfMonth => "day_of_month",
            Self::UntilCount => "until_count",
        }
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: FieldTag,
    pub message: &'static str,
}

impl ValidationError {
    const fn new(field: FieldTag, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordinals accepted for "Nth weekday of the month"; 0 means every occurrence.
const OCCURRENCE_RANGE: std::ops::RangeInclusive<i32> = -4..=4;
const DAY_OF_MONTH_RANGE: std::ops::RangeInclusive<i32> = 1..=31;

/// ## Summary
/// Checks a rule and returns every problem found, or an empty list.
///
/// One-time rules are always valid; their other fields are ignored.
#[must_use]
pub fn validate(rule: &RecurrenceRule) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !rule.frequency.repeats() {
        return errors;
    }

    if rule.interval == 0 {
        errors.push(ValidationError::new(
            FieldTag::Interval,
            "The interval must be at least 1.",
        ));
    }
    if rule.interval > RecurrenceRule::MAX_INTERVAL {
        errors.push(ValidationError::new(
            FieldTag::Interval,
            "The interval must be at most 65535.",
        ));
    }

    match rule.frequency {
        Frequency::Weekly => {
            if rule.target.is_none_or(WeekdaySet::is_empty) {
                errors.push(ValidationError::new(
                    FieldTag::Weekdays,
                    "A weekday must be selected.",
                ));
            }
        }
        Frequency::Monthly => validate_monthly(rule, &mut errors),
        Frequency::OneTime | Frequency::Daily | Frequency::Annually => {}
    }

    if rule.until == Until::Count(0) {
        errors.push(ValidationError::new(
            FieldTag::UntilCount,
            "The number of occurrences must be at least 1.",
        ));
    }

    if !errors.is_empty() {
        tracing::debug!(
            frequency = %rule.frequency,
            error_count = errors.len(),
            "Recurrence rule failed validation"
        );
    }

    errors
}

fn validate_monthly(rule: &RecurrenceRule, errors: &mut Vec<ValidationError>) {
    let target = rule.target.unwrap_or_default();

    if target.is_empty() {
        if rule.count.is_some_and(|day| !DAY_OF_MONTH_RANGE.contains(&day)) {
            errors.push(ValidationError::new(
                FieldTag::DayOfMonth,
                "The day of the month must be between 1 and 31.",
            ));
        }
        return;
    }

    if target.len() > 1 {
        errors.push(ValidationError::new(
            FieldTag::MonthlyWeekday,
            "Only one weekday may be selected.",
        ));
    }

    if !rule.count.is_some_and(|ordinal| OCCURRENCE_RANGE.contains(&ordinal)) {
        errors.push(ValidationError::new(
            FieldTag::Occurrence,
            "Select which occurrence of the weekday to use.",
        ));
    }
}

impl RecurrenceRule {
    /// See [`validate`].
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationError> {
        validate(self)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        validate(self).is_empty()
    }
}
