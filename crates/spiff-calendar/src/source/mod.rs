//! Boundary to whatever supplies events for a date range.
//!
//! ## Summary
//! The grid never fetches events itself. A host asks a [`CalendarView`] for a
//! [`RangeRequest`], hands it to an [`EventSource`], and passes the answer
//! back through the view so stale answers are dropped.
//!
//! [`CalendarView`]: crate::grid::CalendarView

pub mod request;

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CalendarResult;
use crate::recurrence::RecurrenceRule;

pub use request::{RangeRequest, RequestTracker};

/// A calendar event as stored by the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    /// Date of the first occurrence.
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceRule>,
    /// Opaque payload owned by the caller, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl Event {
    #[must_use]
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            date,
            recurrence: None,
            extra: None,
        }
    }

    #[must_use]
    pub fn with_recurrence(mut self, rule: RecurrenceRule) -> Self {
        self.recurrence = Some(rule);
        self
    }

    #[must_use]
    pub fn with_extra(mut self, extra: serde_json::Value) -> Self {
        self.extra = Some(extra);
        self
    }

    /// ## Summary
    /// Dates in `[start, last]` on which this event occurs.
    ///
    /// ## Errors
    /// Propagates recurrence validation and expansion errors.
    pub fn occurrences(
        &self,
        start: NaiveDate,
        last: NaiveDate,
    ) -> CalendarResult<Vec<NaiveDate>> {
        match &self.recurrence {
            Some(rule) => rule.occurrences(self.date, start, last),
            None => RecurrenceRule::one_time().occurrences(self.date, start, last),
        }
    }
}

/// Events of a single day, as returned by an event source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub events: Vec<Event>,
    pub footnote: Option<String>,
}

/// Supplies per-day records for the range of a request.
pub trait EventSource {
    /// ## Errors
    /// Returns an error if the events for the range cannot be produced.
    fn load(&self, request: &RangeRequest) -> CalendarResult<Vec<DayRecord>>;
}

impl<F> EventSource for F
where
    F: Fn(&RangeRequest) -> CalendarResult<Vec<DayRecord>>,
{
    fn load(&self, request: &RangeRequest) -> CalendarResult<Vec<DayRecord>> {
        self(request)
    }
}

pub type FootnoteRenderer = Box<dyn Fn(NaiveDate, &[Event]) -> Option<String> + Send + Sync>;

/// Event source over an in-memory list, expanding recurrences per request.
#[derive(Default)]
pub struct MemoryEventSource {
    events: Vec<Event>,
    footnote: Option<FootnoteRenderer>,
}

impl fmt::Debug for MemoryEventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryEventSource")
            .field("events", &self.events.len())
            .field("footnote", &self.footnote.is_some())
            .finish()
    }
}

impl MemoryEventSource {
    #[must_use]
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            footnote: None,
        }
    }

    /// ## Summary
    /// Loads events from a JSON array of event records.
    ///
    /// ## Errors
    /// Returns `CalendarError::Serialization` if the JSON is malformed.
    pub fn from_json(text: &str) -> CalendarResult<Self> {
        let events: Vec<Event> = serde_json::from_str(text)?;
        tracing::debug!(count = events.len(), "Loaded events from JSON");
        Ok(Self::new(events))
    }

    /// Sets the renderer for the footnote shown under each day.
    #[must_use]
    pub fn with_footnote<F>(mut self, renderer: F) -> Self
    where
        F: Fn(NaiveDate, &[Event]) -> Option<String> + Send + Sync + 'static,
    {
        self.footnote = Some(Box::new(renderer));
        self
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl EventSource for MemoryEventSource {
    fn load(&self, request: &RangeRequest) -> CalendarResult<Vec<DayRecord>> {
        let range = request.range;
        let mut days: BTreeMap<NaiveDate, Vec<Event>> =
            range.dates().map(|date| (date, Vec::new())).collect();

        for event in &self.events {
            let dates = match event.occurrences(range.start, range.last) {
                Ok(dates) => dates,
                Err(err) => {
                    tracing::warn!(
                        event_id = %event.id,
                        error = %err,
                        "Skipping event with unusable recurrence"
                    );
                    continue;
                }
            };
            for date in dates {
                if let Some(events) = days.get_mut(&date) {
                    events.push(event.clone());
                }
            }
        }

        Ok(days
            .into_iter()
            .map(|(date, events)| {
                let footnote = self
                    .footnote
                    .as_ref()
                    .and_then(|render| render(date, &events));
                DayRecord {
                    date,
                    events,
                    footnote,
                }
            })
            .collect())
    }
}
