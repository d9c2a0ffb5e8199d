//! Recurrence rule model.
//!
//! ## Summary
//! The rule record, its validation, its mapping to and from editor fields,
//! and expansion into concrete occurrence dates.

pub mod expand;
pub mod fields;
pub mod rule;
pub mod validation;
pub mod weekday;

pub use fields::{
    MonthlyFields, MonthlyWeekday, RecurrenceFields, UntilFields, UntilMode, WeeklyFields,
};
pub use rule::{Frequency, MonthlySelector, RecurrenceRule, Until};
pub use validation::{FieldTag, ValidationError, validate};
pub use weekday::WeekdaySet;
