//! Label tables shared by the recurrence editor and the grid header.
//!
//! All tables are Sunday-first / January-first and indexed from zero.

/// Frequency labels, in `Frequency` declaration order.
pub const FREQUENCY_LABELS: [&str; 5] = ["One Time", "Daily", "Weekly", "Monthly", "Annually"];

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const WEEKDAY_SHORT: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Ordinal labels for the "Nth weekday of the month" selector.
///
/// Negative ordinals count from the end of the month.
pub const OCCURRENCE_LABELS: [(i32, &str); 8] = [
    (1, "first"),
    (2, "second"),
    (3, "third"),
    (4, "fourth"),
    (-1, "last"),
    (-2, "second to last"),
    (-3, "third to last"),
    (-4, "fourth to last"),
];

/// ## Summary
/// Returns the selector label for an occurrence ordinal, if it has one.
#[must_use]
pub fn occurrence_label(ordinal: i32) -> Option<&'static str> {
    OCCURRENCE_LABELS
        .iter()
        .find(|(value, _)| *value == ordinal)
        .map(|(_, label)| *label)
}
