//! Editing events in place.

use chrono::NaiveDate;
use tracing::info;

use super::EventBook;
use crate::error::{LuachError, LuachResult};
use crate::event::{CalendarEvent, DayTime, EventKind};

/// Fields to change; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub date: Option<NaiveDate>,
    pub kind: Option<EventKind>,
    pub day_time: Option<DayTime>,
    pub note: Option<String>,
}

impl EventBook {
    /// Applies `changes` to the event with `id`, moving it when the date
    /// changes. The duplicate rule is checked at the destination.
    pub fn update(&mut self, id: &str, changes: EventUpdate) -> LuachResult<&CalendarEvent> {
        let (old_date, idx) = self
            .locate(id)
            .ok_or_else(|| LuachError::EventNotFound(id.to_string()))?;
        let current = self.events[&old_date][idx].clone();

        let date = changes.date.unwrap_or(old_date);
        let kind = changes.kind.unwrap_or(current.kind);
        let day_time = changes.day_time.unwrap_or(current.day_time);
        self.ensure_unique(date, kind, day_time, Some(id))?;

        let updated = CalendarEvent {
            id: current.id,
            date,
            kind,
            day_time,
            note: changes.note.unwrap_or(current.note),
        };

        if date == old_date {
            if let Some(slot) = self.events.get_mut(&old_date).and_then(|l| l.get_mut(idx)) {
                *slot = updated;
            }
        } else {
            self.remove_at(old_date, idx);
            self.events.entry(date).or_default().push(updated);
        }
        info!(id, %date, "updated event");

        self.get(id)
            .ok_or_else(|| LuachError::EventNotFound(id.to_string()))
    }
}
