//! Visible-range math and week layout for a Sunday-first calendar grid.

pub mod layout;
pub mod navigation;
pub mod period;
pub mod view;

pub use layout::{GridCell, WeekRow, build_weeks, expand_to_week_boundaries};
pub use navigation::{next, previous, today};
pub use period::{PeriodSpec, VisibleRange, compute_visible_range};
pub use view::{CalendarGrid, CalendarView};
