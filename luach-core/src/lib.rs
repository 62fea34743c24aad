//! Core of the luach calendar.
//!
//! This crate holds everything that does not touch a terminal:
//! - `grid` lays a Gregorian month out as whole weeks with filler days
//! - `numeral` writes numbers in Hebrew letters
//! - `header` and `month_view` put the Gregorian and Hebrew titles on a month
//! - `hebrew` converts between the Gregorian and Hebrew calendars
//! - `store` keeps the event book, `onot` computes forbidden days from it

pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod header;
pub mod hebrew;
pub mod input;
pub mod month_view;
pub mod numeral;
pub mod onot;
pub mod store;

pub use calendar::{CalendarSystem, StandardCalendar, WeekStart};
pub use error::{LuachError, LuachResult};
pub use event::{CalendarEvent, DayTime, EventKind, EventsByDate};
pub use grid::{CalendarCell, CellKind, build_month_grid};
pub use header::hebrew_header;
pub use hebrew::{HebrewDate, HebrewMonth};
pub use numeral::{HebrewNumeral, to_hebrew_numeral};
