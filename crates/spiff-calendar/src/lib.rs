//! Pure calendar logic for the spiff calendar widget.
//!
//! Two leaf components live here: the recurrence rule model with its mapping
//! to and from editor fields, and the grid calculator that lays a visible
//! period out as Sunday-aligned weeks. The `source` module is the boundary to
//! whatever supplies events for a date range.

pub mod error;
pub mod grid;
pub mod recurrence;
pub mod source;
