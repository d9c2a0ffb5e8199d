//! Weekday bit-set used for weekly and monthly recurrence targets.
//!
//! ## Summary
//! Bit `i` is set when the weekday `i` days after Sunday is included:
//! Sunday is bit 0 (`1`), Monday bit 1 (`2`), through Saturday bit 6 (`64`).
//! This mapping is the only encoding read or written anywhere in the crate.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use spiff_core::constants::{WEEKDAY_NAMES, WEEKDAY_SHORT};
use spiff_core::error::CoreError;

/// Weekdays in grid column order.
pub const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Column of `weekday` in a Sunday-first week.
#[must_use]
pub const fn sunday_index(weekday: Weekday) -> usize {
    match weekday {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}

#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[sunday_index(weekday)]
}

#[must_use]
pub const fn weekday_short(weekday: Weekday) -> &'static str {
    WEEKDAY_SHORT[sunday_index(weekday)]
}

/// Two-letter BYDAY code (RFC 5545 §3.3.10).
#[must_use]
pub const fn rrule_code(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "SU",
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
    }
}

/// Fixed-width set of weekdays, serialized as its bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set; also the "fixed day" sentinel for monthly and annual rules.
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(0b111_1111);

    /// Returns the bit assigned to `weekday`.
    #[must_use]
    pub const fn bit(weekday: Weekday) -> u8 {
        1 << sunday_index(weekday)
    }

    /// Builds a set from a raw mask, rejecting bits above Saturday.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL.0 == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn single(weekday: Weekday) -> Self {
        Self(Self::bit(weekday))
    }

    #[must_use]
    pub const fn contains(self, weekday: Weekday) -> bool {
        self.0 & Self::bit(weekday) != 0
    }

    pub fn insert(&mut self, weekday: Weekday) {
        self.0 |= Self::bit(weekday);
    }

    pub fn remove(&mut self, weekday: Weekday) {
        self.0 &= !Self::bit(weekday);
    }

    /// Toggles a weekday, as a checkbox in the weekly editor does.
    pub fn toggle(&mut self, weekday: Weekday) {
        self.0 ^= Self::bit(weekday);
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns the weekday if exactly one is set.
    #[must_use]
    pub fn single_weekday(self) -> Option<Weekday> {
        if self.len() == 1 { self.first() } else { None }
    }

    /// Lowest weekday in Sunday-first order.
    #[must_use]
    pub fn first(self) -> Option<Weekday> {
        self.iter().next()
    }

    /// Iterates the members in Sunday-first order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        SUNDAY_FIRST
            .into_iter()
            .filter(move |weekday| self.contains(*weekday))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for weekday in iter {
            set.insert(weekday);
        }
        set
    }
}

impl TryFrom<u8> for WeekdaySet {
    type Error = CoreError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
            .ok_or_else(|| {
                CoreError::InvalidInput(format!("weekday mask {bits:#b} has bits above Saturday"))
            })
    }
}

impl From<WeekdaySet> for u8 {
    fn from(set: WeekdaySet) -> Self {
        set.0
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(weekday_short).collect();
        write!(f, "{}", names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sunday_is_bit_zero() {
        assert_eq!(WeekdaySet::bit(Weekday::Sun), 1);
        assert_eq!(WeekdaySet::bit(Weekday::Mon), 2);
        assert_eq!(WeekdaySet::bit(Weekday::Sat), 64);
    }

    #[test]
    fn test_insert_remove_toggle() {
        let mut set = WeekdaySet::EMPTY;
        set.insert(Weekday::Tue);
        set.insert(Weekday::Thu);
        assert_eq!(set.bits(), 0b001_0100);
        assert!(set.contains(Weekday::Tue));

        set.remove(Weekday::Tue);
        assert!(!set.contains(Weekday::Tue));

        set.toggle(Weekday::Thu);
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter_is_sunday_first() {
        let set: WeekdaySet = [Weekday::Sat, Weekday::Sun, Weekday::Wed].into_iter().collect();
        let order: Vec<Weekday> = set.iter().collect();
        assert_eq!(order, vec![Weekday::Sun, Weekday::Wed, Weekday::Sat]);
        assert_eq!(set.to_string(), "Su,We,Sa");
    }

    #[test]
    fn test_single_weekday() {
        assert_eq!(WeekdaySet::single(Weekday::Fri).single_weekday(), Some(Weekday::Fri));
        assert_eq!(WeekdaySet::ALL.single_weekday(), None);
        assert_eq!(WeekdaySet::EMPTY.single_weekday(), None);
    }

    #[test]
    fn test_from_bits_rejects_high_bit() {
        assert!(WeekdaySet::from_bits(0x80).is_none());
        assert_eq!(WeekdaySet::from_bits(0x7f), Some(WeekdaySet::ALL));
    }

    #[test]
    fn test_serde_as_mask() {
        let set = WeekdaySet::single(Weekday::Mon);
        assert_eq!(serde_json::to_string(&set).expect("serialize"), "2");

        let parsed: WeekdaySet = serde_json::from_str("5").expect("deserialize");
        assert!(parsed.contains(Weekday::Sun));
        assert!(parsed.contains(Weekday::Tue));

        assert!(serde_json::from_str::<WeekdaySet>("200").is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
        assert_eq!(weekday_short(Weekday::Sat), "Sa");
        assert_eq!(rrule_code(Weekday::Wed), "WE");
    }
}
