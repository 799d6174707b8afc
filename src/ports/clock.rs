//! Clock port.
//!
//! Daily resets are keyed on the calendar date, so the current day is an
//! injected dependency rather than a wall-clock read. Tests drive
//! rollovers with a manual clock.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of "now" and "today" for the engine.
pub trait Clock: Send + Sync {
    /// Current calendar day in the engine's reference timezone.
    fn today(&self) -> NaiveDate;

    /// Current instant, UTC.
    fn now(&self) -> DateTime<Utc>;
}
