//! Per-day event records.
//!
//! Events are owned by the caller (see [`crate::store::EventBook`]); the
//! grid builder only reads them through an [`EventsByDate`] map.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Events keyed by their calendar date. Keys serialize as `YYYY-MM-DD`.
pub type EventsByDate = BTreeMap<NaiveDate, Vec<CalendarEvent>>;

/// A single marker on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub day_time: DayTime,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Menstrual,
    Hefsek,
    Mikveh,
    #[serde(other)]
    Other,
}

/// Half of a halachic day. Night precedes day within the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayTime {
    Night,
    Day,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Menstrual => "menstrual",
            EventKind::Hefsek => "hefsek",
            EventKind::Mikveh => "mikveh",
            EventKind::Other => "other",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "menstrual" => Ok(EventKind::Menstrual),
            "hefsek" => Ok(EventKind::Hefsek),
            "mikveh" => Ok(EventKind::Mikveh),
            "other" => Ok(EventKind::Other),
            _ => Err(format!(
                "Unknown event type '{}'. Expected menstrual, hefsek, mikveh or other",
                s
            )),
        }
    }
}

impl DayTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayTime::Night => "night",
            DayTime::Day => "day",
        }
    }

    /// Hebrew label used in reports (`ליל` / `יום`).
    pub fn hebrew_label(&self) -> &'static str {
        match self {
            DayTime::Night => "ליל",
            DayTime::Day => "יום",
        }
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DayTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "1" => Ok(DayTime::Day),
            "night" | "0" => Ok(DayTime::Night),
            _ => Err(format!("Unknown time of day '{}'. Expected day or night", s)),
        }
    }
}
