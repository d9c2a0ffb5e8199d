//! Calendar view state for a host UI.
//!
//! ## Summary
//! Ties the pure grid functions together: the view remembers its period and
//! reference date, computes the grid on demand, navigates, and tags event
//! requests so a slow answer for an old range is never shown.

use chrono::NaiveDate;
use serde::Serialize;
use spiff_core::config::CalendarConfig;
use spiff_core::constants::WEEKDAY_SHORT;
use spiff_core::util::date::month_title;

use super::layout::{GridCell, WeekRow, build_weeks, expand_to_week_boundaries};
use super::navigation;
use super::period::{PeriodSpec, VisibleRange, compute_visible_range};
use crate::error::CalendarResult;
use crate::source::{DayRecord, EventSource, RangeRequest, RequestTracker};

/// One computed grid, owned by the caller for a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    /// Navbar title, e.g. "February 2024".
    pub title: String,
    /// Range the user asked to see.
    pub requested: VisibleRange,
    /// Requested range widened to whole weeks.
    pub grid: VisibleRange,
    pub weeks: Vec<WeekRow>,
}

impl CalendarGrid {
    /// Column headers, Sunday first.
    #[must_use]
    pub const fn header() -> [&'static str; 7] {
        WEEKDAY_SHORT
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.weeks.iter().flatten()
    }
}

#[derive(Debug, Clone)]
pub struct CalendarView {
    period: PeriodSpec,
    reference: NaiveDate,
    last: Option<NaiveDate>,
    requests: RequestTracker,
}

impl CalendarView {
    #[must_use]
    pub fn new(period: PeriodSpec, reference: NaiveDate) -> Self {
        Self {
            period,
            reference,
            last: None,
            requests: RequestTracker::new(),
        }
    }

    /// ## Summary
    /// Builds the initial view from settings; `today` is used when no start
    /// date is configured.
    ///
    /// ## Errors
    /// Returns an error if the configured period is invalid.
    pub fn from_config(config: &CalendarConfig, today: NaiveDate) -> CalendarResult<Self> {
        let period = PeriodSpec::from_config(config)?;
        let reference = config
            .start
            .unwrap_or_else(|| navigation::today(period, today));
        Ok(Self {
            last: config.last,
            ..Self::new(period, reference)
        })
    }

    /// Sets a caller-supplied last date; ignored if it precedes the start.
    #[must_use]
    pub fn with_last(mut self, last: NaiveDate) -> Self {
        self.last = Some(last);
        self
    }

    #[must_use]
    pub const fn period(&self) -> PeriodSpec {
        self.period
    }

    #[must_use]
    pub const fn reference(&self) -> NaiveDate {
        self.reference
    }

    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        compute_visible_range(self.period, self.reference, self.last)
    }

    /// Range covered by the grid cells, including filler days.
    #[must_use]
    pub fn grid_range(&self) -> VisibleRange {
        let requested = self.visible_range();
        expand_to_week_boundaries(requested.start, requested.last)
    }

    #[tracing::instrument(skip(self), fields(reference = %self.reference))]
    #[must_use]
    pub fn grid(&self, today: NaiveDate) -> CalendarGrid {
        let requested = self.visible_range();
        let grid = expand_to_week_boundaries(requested.start, requested.last);
        let weeks = build_weeks(grid, requested, today);

        tracing::debug!(
            start = %requested.start,
            last = %requested.last,
            weeks = weeks.len(),
            "Computed calendar grid"
        );

        CalendarGrid {
            title: month_title(requested.start),
            requested,
            grid,
            weeks,
        }
    }

    fn navigate(&mut self, reference: NaiveDate) {
        tracing::debug!(from = %self.reference, to = %reference, "Navigating calendar");
        self.reference = reference;
        self.last = None;
    }

    pub fn previous(&mut self) {
        self.navigate(navigation::previous(self.reference, self.period));
    }

    pub fn next(&mut self) {
        self.navigate(navigation::next(self.reference, self.period));
    }

    pub fn go_today(&mut self, today: NaiveDate) {
        self.navigate(navigation::today(self.period, today));
    }

    /// Issues an event request for the current grid range.
    pub fn request(&mut self) -> RangeRequest {
        let range = self.grid_range();
        self.requests.issue(range)
    }

    /// ## Summary
    /// Accepts the records answering `request`, or `None` if the view has
    /// moved on since it was issued.
    pub fn accept(&self, request: &RangeRequest, records: Vec<DayRecord>) -> Option<Vec<DayRecord>> {
        self.requests.accept(request, records)
    }

    /// ## Summary
    /// Requests and loads the events for the current grid from `source`.
    ///
    /// ## Errors
    /// Propagates errors from the event source.
    #[tracing::instrument(skip(self, source))]
    pub fn load<S: EventSource + ?Sized>(&mut self, source: &S) -> CalendarResult<Vec<DayRecord>> {
        let request = self.request();
        let records = source.load(&request)?;
        Ok(self.accept(&request, records).unwrap_or_default())
    }
}
