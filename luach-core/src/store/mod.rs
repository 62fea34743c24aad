//! Caller-owned event storage.
//!
//! The book is a JSON object keyed by ISO date, each value a list of
//! `{id, type, dayTime, note}` records. Files written by older clients may
//! carry `null` ids; those events get fresh ids on load.

mod create;
mod delete;
mod update;

pub use create::NewEvent;
pub use update::EventUpdate;

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LuachError, LuachResult};
use crate::event::{CalendarEvent, DayTime, EventKind, EventsByDate};

/// On-disk shape of one event; the date is the enclosing key.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEvent {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "type")]
    kind: EventKind,
    #[serde(default = "default_day_time")]
    day_time: DayTime,
    #[serde(default)]
    note: String,
}

fn default_day_time() -> DayTime {
    DayTime::Day
}

pub(crate) fn new_event_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Events loaded from (and saved back to) one JSON file.
#[derive(Debug, Clone)]
pub struct EventBook {
    path: PathBuf,
    events: EventsByDate,
}

impl EventBook {
    /// An empty book that will be written to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EventBook {
            path: path.into(),
            events: EventsByDate::new(),
        }
    }

    /// Reads the book at `path`. A missing file is an empty book.
    pub fn load(path: impl Into<PathBuf>) -> LuachResult<Self> {
        let path = path.into();

        if !path.exists() {
            debug!(path = %path.display(), "no event file yet");
            return Ok(Self::new(path));
        }

        let content = std::fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::new(path));
        }

        let stored: BTreeMap<NaiveDate, Vec<StoredEvent>> = serde_json::from_str(&content)
            .map_err(|e| {
                LuachError::Serialization(format!("Could not read {}: {e}", path.display()))
            })?;

        let events: EventsByDate = stored
            .into_iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(date, list)| {
                let list = list
                    .into_iter()
                    .map(|stored| CalendarEvent {
                        id: stored.id.filter(|id| !id.is_empty()).unwrap_or_else(new_event_id),
                        date,
                        kind: stored.kind,
                        day_time: stored.day_time,
                        note: stored.note,
                    })
                    .collect();
                (date, list)
            })
            .collect();

        debug!(path = %path.display(), dates = events.len(), "loaded event book");

        Ok(EventBook { path, events })
    }

    /// Writes the book as pretty-printed UTF-8 JSON, creating parent
    /// directories as needed.
    pub fn save(&self) -> LuachResult<()> {
        let stored: BTreeMap<&NaiveDate, Vec<StoredEvent>> = self
            .events
            .iter()
            .map(|(date, list)| {
                let list = list
                    .iter()
                    .map(|event| StoredEvent {
                        id: Some(event.id.clone()),
                        kind: event.kind,
                        day_time: event.day_time,
                        note: event.note.clone(),
                    })
                    .collect();
                (date, list)
            })
            .collect();

        let content = serde_json::to_string_pretty(&stored)
            .map_err(|e| LuachError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;

        debug!(path = %self.path.display(), "saved event book");
        Ok(())
    }

    /// The date-keyed map handed to the grid builder.
    pub fn events(&self) -> &EventsByDate {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.values().flatten().find(|e| e.id == id)
    }

    /// Events in date order, optionally bounded (inclusive) on either side.
    pub fn in_range(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> impl Iterator<Item = &CalendarEvent> {
        self.events
            .iter()
            .filter(move |(date, _)| from.is_none_or(|f| **date >= f))
            .filter(move |(date, _)| to.is_none_or(|t| **date <= t))
            .flat_map(|(_, list)| list.iter())
    }

    /// All events of `kind`, in date order.
    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &CalendarEvent> {
        self.events.values().flatten().filter(move |e| e.kind == kind)
    }

    fn locate(&self, id: &str) -> Option<(NaiveDate, usize)> {
        self.events.iter().find_map(|(date, list)| {
            list.iter().position(|e| e.id == id).map(|idx| (*date, idx))
        })
    }

    /// Fails with `DuplicateEvent` when `date` already has an event with the
    /// same kind and day time (other than `except_id`).
    fn ensure_unique(
        &self,
        date: NaiveDate,
        kind: EventKind,
        day_time: DayTime,
        except_id: Option<&str>,
    ) -> LuachResult<()> {
        let clash = self.events.get(&date).is_some_and(|list| {
            list.iter().any(|e| {
                e.kind == kind && e.day_time == day_time && Some(e.id.as_str()) != except_id
            })
        });

        if clash {
            return Err(LuachError::DuplicateEvent {
                date,
                kind,
                day_time,
            });
        }
        Ok(())
    }
}
