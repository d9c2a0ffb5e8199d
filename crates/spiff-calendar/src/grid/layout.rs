//! Week rows of the calendar grid.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::period::{VisibleRange, saturday_on_or_after, sunday_on_or_before};

/// One day of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub date: NaiveDate,
    pub in_requested_range: bool,
    pub is_today: bool,
}

impl GridCell {
    /// Filler days complete a week row but lie outside the requested range.
    #[must_use]
    pub const fn is_filler(&self) -> bool {
        !self.in_requested_range
    }
}

/// Seven consecutive cells, Sunday through Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRow {
    pub cells: [GridCell; 7],
}

impl WeekRow {
    #[must_use]
    pub const fn first_date(&self) -> NaiveDate {
        self.cells[0].date
    }

    #[must_use]
    pub const fn last_date(&self) -> NaiveDate {
        self.cells[6].date
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridCell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a WeekRow {
    type Item = &'a GridCell;
    type IntoIter = std::slice::Iter<'a, GridCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// ## Summary
/// Widens `[start, last]` to whole weeks: back to Sunday, forward to Saturday.
///
/// The result always contains the input and spans a multiple of 7 days.
#[must_use]
pub fn expand_to_week_boundaries(start: NaiveDate, last: NaiveDate) -> VisibleRange {
    VisibleRange::new(sunday_on_or_before(start), saturday_on_or_after(last))
}

/// ## Summary
/// Lays out `grid` as week rows, walking from its start in 7-day strides.
///
/// Cells outside `requested` are filler. `is_today` compares calendar days only.
#[must_use]
pub fn build_weeks(grid: VisibleRange, requested: VisibleRange, today: NaiveDate) -> Vec<WeekRow> {
    let mut weeks = Vec::new();
    let mut week_start = grid.start;

    while week_start <= grid.last {
        let mut date = week_start;
        let cells = std::array::from_fn(|_| {
            let cell = GridCell {
                date,
                in_requested_range: requested.contains(date),
                is_today: date == today,
            };
            date = date.succ_opt().unwrap_or(date);
            cell
        });
        weeks.push(WeekRow { cells });

        match week_start.checked_add_days(Days::new(7)) {
            Some(next) => week_start = next,
            None => break,
        }
    }

    tracing::trace!(
        grid_start = %grid.start,
        grid_last = %grid.last,
        weeks = weeks.len(),
        "Built calendar weeks"
    );
    weeks
}
