//! Everything a renderer needs for one month: headers, weekday labels and
//! grid cells annotated with Hebrew day numerals.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::calendar::{CalendarSystem, WeekStart};
use crate::error::LuachResult;
use crate::event::EventsByDate;
use crate::grid::{CalendarCell, build_month_grid};
use crate::header::{gregorian_header, hebrew_header};
use crate::hebrew::weekday_name;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayView {
    #[serde(flatten)]
    pub cell: CalendarCell,
    /// Gematria of the Hebrew day, for current-month cells only.
    pub hebrew_day: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    pub year: i32,
    /// 1-based month, for display.
    pub month: u32,
    pub title: String,
    pub hebrew_title: String,
    pub weekdays: Vec<&'static str>,
    pub days: Vec<DayView>,
}

impl MonthView {
    pub fn build<C: CalendarSystem + ?Sized>(
        calendar: &C,
        year: i32,
        month0: u32,
        events: &EventsByDate,
        today: NaiveDate,
    ) -> LuachResult<Self> {
        let cells = build_month_grid(calendar, year, month0, events, today)?;

        let days = cells
            .into_iter()
            .map(|cell| {
                let hebrew_day = if cell.is_filler() {
                    None
                } else {
                    Some(calendar.hebrew_date(cell.date)?.day_numeral())
                };
                Ok(DayView { cell, hebrew_day })
            })
            .collect::<LuachResult<Vec<_>>>()?;

        Ok(MonthView {
            year,
            month: month0 + 1,
            title: gregorian_header(year, month0)?,
            hebrew_title: hebrew_header(calendar, year, month0)?,
            weekdays: weekday_labels(calendar.week_start()),
            days,
        })
    }

    /// Days grouped into rows of seven.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayView]> {
        self.days.chunks(7)
    }
}

/// Hebrew weekday names starting from `week_start`.
pub fn weekday_labels(week_start: WeekStart) -> Vec<&'static str> {
    let first = match week_start {
        WeekStart::Sunday => Weekday::Sun,
        WeekStart::Monday => Weekday::Mon,
    };
    std::iter::successors(Some(first), |d| Some(d.succ()))
        .take(7)
        .map(weekday_name)
        .collect()
}
