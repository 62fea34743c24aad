//! Calendar capability used by the grid builder and header formatter.
//!
//! Months are zero-based (`0` = January) throughout, and weekday indices
//! are relative to the configured [`WeekStart`] (`0` = first day of week).

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{LuachError, LuachResult};
use crate::hebrew::HebrewDate;

/// First day of the displayed week. Fixed by configuration so renders do
/// not depend on the host locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Sunday => f.write_str("sunday"),
            WeekStart::Monday => f.write_str("monday"),
        }
    }
}

/// Date facts the pure rendering functions depend on.
pub trait CalendarSystem {
    fn week_start(&self) -> WeekStart;

    /// Hebrew calendar date corresponding to a Gregorian date.
    fn hebrew_date(&self, date: NaiveDate) -> LuachResult<HebrewDate>;

    /// Weekday index of `date` within the configured week (0..=6).
    fn weekday_index(&self, date: NaiveDate) -> u32 {
        match self.week_start() {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }

    /// Weekday index of day 1 of `(year, month0)`.
    fn first_weekday(&self, year: i32, month0: u32) -> LuachResult<u32> {
        Ok(self.weekday_index(first_of_month(year, month0)?))
    }

    /// Length of the month, taken from its last valid day.
    fn days_in_month(&self, year: i32, month0: u32) -> LuachResult<u32> {
        first_of_month(year, month0)?;
        Ok((29..=31)
            .rev()
            .find(|&day| NaiveDate::from_ymd_opt(year, month0 + 1, day).is_some())
            .unwrap_or(28))
    }

    /// Weekday index of the last day of `(year, month0)`.
    fn last_weekday(&self, year: i32, month0: u32) -> LuachResult<u32> {
        let last = self.days_in_month(year, month0)?;
        Ok(self.weekday_index(gregorian_date(year, month0, last)?))
    }
}

/// chrono-backed Gregorian facts plus the arithmetic Hebrew calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCalendar {
    week_start: WeekStart,
}

impl StandardCalendar {
    pub fn new(week_start: WeekStart) -> Self {
        StandardCalendar { week_start }
    }
}

impl CalendarSystem for StandardCalendar {
    fn week_start(&self) -> WeekStart {
        self.week_start
    }

    fn hebrew_date(&self, date: NaiveDate) -> LuachResult<HebrewDate> {
        HebrewDate::from_gregorian(date)
    }
}

/// Month arithmetic with year roll-over: `(2024, 0) - 1` is `(2023, 11)`.
pub fn shift_month(year: i32, month0: u32, delta: i32) -> (i32, u32) {
    let total = i64::from(year) * 12 + i64::from(month0) + i64::from(delta);
    (total.div_euclid(12) as i32, total.rem_euclid(12) as u32)
}

pub(crate) fn check_month(month0: u32) -> LuachResult<()> {
    if month0 > 11 {
        return Err(LuachError::InvalidMonth { month: month0 });
    }
    Ok(())
}

pub(crate) fn first_of_month(year: i32, month0: u32) -> LuachResult<NaiveDate> {
    gregorian_date(year, month0, 1)
}

/// `(year, month0, day)` as a date; a year chrono cannot hold is unsupported.
pub(crate) fn gregorian_date(year: i32, month0: u32, day: u32) -> LuachResult<NaiveDate> {
    check_month(month0)?;
    NaiveDate::from_ymd_opt(year, month0 + 1, day).ok_or(LuachError::UnsupportedYear {
        year: i64::from(year),
    })
}
