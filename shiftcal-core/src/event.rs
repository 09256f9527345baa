//! Calendar events produced from a shift plan.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One generated calendar entry. Built once by the translator, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub uid: String,
    /// Generation time (DTSTAMP)
    pub created_at: DateTime<Utc>,
    /// Normalized shift code this event was built from
    pub code: String,
    pub summary: String,
    pub description: String,
    pub start: EventTime,
    /// Exclusive end: the following date for all-day events
    pub end: EventTime,
}

impl CalendarEvent {
    pub fn is_all_day(&self) -> bool {
        matches!(self.start, EventTime::Date(_))
    }

    /// Calendar day of the plan this event belongs to.
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }
}

/// Start or end of an event. Timed values carry no timezone (floating local time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTime {
    Date(NaiveDate),
    DateTimeFloating(NaiveDateTime),
}

impl EventTime {
    pub fn date(&self) -> NaiveDate {
        match self {
            EventTime::Date(d) => *d,
            EventTime::DateTimeFloating(dt) => dt.date(),
        }
    }
}
