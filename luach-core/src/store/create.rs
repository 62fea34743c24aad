//! Adding events to a book.

use chrono::NaiveDate;
use tracing::info;

use super::{EventBook, new_event_id};
use crate::error::{LuachError, LuachResult};
use crate::event::{CalendarEvent, DayTime, EventKind};

/// Fields supplied when adding an event; the id is generated.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub kind: EventKind,
    pub day_time: DayTime,
    pub note: String,
}

impl Default for NewEvent {
    fn default() -> Self {
        NewEvent {
            kind: EventKind::Menstrual,
            day_time: DayTime::Day,
            note: String::new(),
        }
    }
}

impl EventBook {
    /// Adds an event on `date`.
    ///
    /// A date holds at most one event per (kind, day time) pair; a second
    /// one is rejected with [`LuachError::DuplicateEvent`].
    pub fn create(&mut self, date: NaiveDate, new: NewEvent) -> LuachResult<&CalendarEvent> {
        self.ensure_unique(date, new.kind, new.day_time, None)?;

        let event = CalendarEvent {
            id: new_event_id(),
            date,
            kind: new.kind,
            day_time: new.day_time,
            note: new.note,
        };
        info!(id = %event.id, %date, kind = %event.kind, "created event");

        let list = self.events.entry(date).or_default();
        list.push(event);
        list.last().ok_or_else(|| LuachError::EventNotFound(date.to_string()))
    }
}
