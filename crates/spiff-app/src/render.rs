//! Plain-text rendering of a calendar grid for the terminal.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use spiff_calendar::grid::{CalendarGrid, GridCell};
use spiff_calendar::source::DayRecord;

const CELL_WIDTH: usize = 6;

/// ## Summary
/// Renders `grid` as a title line, a header row, and one line per week.
///
/// Each cell shows the day of month, `*` for today, parentheses for filler
/// days, and `+n` when `n` events fall on that day.
#[must_use]
pub fn render_grid(grid: &CalendarGrid, records: &[DayRecord]) -> String {
    let counts: HashMap<NaiveDate, usize> = records
        .iter()
        .map(|record| (record.date, record.events.len()))
        .collect();

    let mut lines = Vec::with_capacity(grid.weeks.len() + 2);
    lines.push(grid.title.clone());
    lines.push(
        CalendarGrid::header()
            .iter()
            .map(|name| format!("{name:<CELL_WIDTH$}"))
            .collect::<String>()
            .trim_end()
            .to_owned(),
    );

    for week in &grid.weeks {
        let line: String = week
            .iter()
            .map(|cell| {
                let text = cell_text(cell, counts.get(&cell.date).copied().unwrap_or(0));
                format!("{text:<CELL_WIDTH$}")
            })
            .collect();
        lines.push(line.trim_end().to_owned());
    }

    lines.join("\n")
}

fn cell_text(cell: &GridCell, events: usize) -> String {
    let day = cell.date.day();
    let mut text = if cell.is_filler() {
        format!("({day})")
    } else {
        day.to_string()
    };
    if cell.is_today {
        text.push('*');
    }
    if events > 0 {
        text.push_str(&format!("+{events}"));
    }
    text
}

/// Footnotes of the records that carry one, prefixed with their date.
#[must_use]
pub fn render_footnotes(records: &[DayRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| {
            record
                .footnote
                .as_ref()
                .map(|note| format!("{}: {note}", record.date))
        })
        .collect()
}
