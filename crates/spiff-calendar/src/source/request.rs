//! Tagging of event-source requests so slow responses cannot overwrite a
//! newer view.

use serde::Serialize;

use crate::grid::VisibleRange;

/// A request for the events of one grid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RangeRequest {
    pub generation: u64,
    pub range: VisibleRange,
}

/// Issues requests and decides which responses are still wanted.
///
/// Only the most recently issued request is current.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    issued: u64,
    latest: Option<RangeRequest>,
}

impl RequestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a request for `range`, superseding all earlier ones.
    pub fn issue(&mut self, range: VisibleRange) -> RangeRequest {
        self.issued += 1;
        let request = RangeRequest {
            generation: self.issued,
            range,
        };
        self.latest = Some(request);
        tracing::trace!(
            generation = request.generation,
            start = %range.start,
            last = %range.last,
            "Issued range request"
        );
        request
    }

    #[must_use]
    pub const fn latest(&self) -> Option<RangeRequest> {
        self.latest
    }

    #[must_use]
    pub fn is_current(&self, request: &RangeRequest) -> bool {
        self.latest.as_ref() == Some(request)
    }

    /// ## Summary
    /// Returns `response` if it answers the current request, otherwise drops it.
    pub fn accept<T>(&self, request: &RangeRequest, response: T) -> Option<T> {
        if self.is_current(request) {
            Some(response)
        } else {
            tracing::debug!(
                generation = request.generation,
                latest = self.latest.map(|latest| latest.generation),
                "Discarding stale event response"
            );
            None
        }
    }
}
