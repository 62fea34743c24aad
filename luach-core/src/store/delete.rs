//! Removing events.

use chrono::NaiveDate;
use tracing::info;

use super::EventBook;
use crate::error::{LuachError, LuachResult};
use crate::event::CalendarEvent;

impl EventBook {
    /// Removes and returns the event with `id`. Dates left without events
    /// are dropped from the book.
    pub fn delete(&mut self, id: &str) -> LuachResult<CalendarEvent> {
        let (date, idx) = self
            .locate(id)
            .ok_or_else(|| LuachError::EventNotFound(id.to_string()))?;

        let removed = self
            .remove_at(date, idx)
            .ok_or_else(|| LuachError::EventNotFound(id.to_string()))?;
        info!(id, %date, "deleted event");
        Ok(removed)
    }

    pub(super) fn remove_at(&mut self, date: NaiveDate, idx: usize) -> Option<CalendarEvent> {
        let list = self.events.get_mut(&date)?;
        if idx >= list.len() {
            return None;
        }
        let removed = list.remove(idx);
        if list.is_empty() {
            self.events.remove(&date);
        }
        Some(removed)
    }
}
