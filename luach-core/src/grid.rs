//! Month grid layout.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::calendar::{CalendarSystem, check_month, gregorian_date, shift_month};
use crate::error::LuachResult;
use crate::event::{CalendarEvent, DayTime, EventsByDate};

/// Number of columns in the grid.
pub const DAYS_IN_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    PreviousMonth,
    CurrentMonth,
    NextMonth,
}

/// One square of the month grid, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    #[serde(rename = "isoDate")]
    pub date: NaiveDate,
    pub day_number: u32,
    #[serde(rename = "cellKind")]
    pub kind: CellKind,
    pub is_today: bool,
    /// Markers for this day, night events first. Filler cells have none.
    pub events: Vec<CalendarEvent>,
}

impl CalendarCell {
    /// `YYYY-MM-DD` of the cell's own date (filler cells resolve to the
    /// adjacent month).
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_filler(&self) -> bool {
        self.kind != CellKind::CurrentMonth
    }

    pub fn night_events(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter().filter(|e| e.day_time == DayTime::Night)
    }

    pub fn day_events(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter().filter(|e| e.day_time == DayTime::Day)
    }

    fn filler(date: NaiveDate, day_number: u32, kind: CellKind) -> Self {
        CalendarCell {
            date,
            day_number,
            kind,
            is_today: false,
            events: Vec::new(),
        }
    }
}

/// Lays out `(year, month0)` as complete weeks.
///
/// Leading cells count back from the last day of the previous month,
/// trailing cells count up from 1 of the next month, and only
/// current-month cells carry `is_today` and event markers.
///
/// # Errors
///
/// `InvalidMonth` when `month0 > 11`, `UnsupportedYear` when the calendar
/// cannot represent the month or one of its neighbours.
pub fn build_month_grid<C: CalendarSystem + ?Sized>(
    calendar: &C,
    year: i32,
    month0: u32,
    events: &EventsByDate,
    today: NaiveDate,
) -> LuachResult<Vec<CalendarCell>> {
    check_month(month0)?;

    let first_weekday = calendar.first_weekday(year, month0)?;
    let days_in_month = calendar.days_in_month(year, month0)?;
    let trailing = 6 - calendar.last_weekday(year, month0)?;

    let (prev_year, prev_month0) = shift_month(year, month0, -1);
    let (next_year, next_month0) = shift_month(year, month0, 1);

    let mut cells =
        Vec::with_capacity((first_weekday + days_in_month + trailing) as usize);

    if first_weekday > 0 {
        let days_in_prev = calendar.days_in_month(prev_year, prev_month0)?;
        for day in (days_in_prev - first_weekday + 1)..=days_in_prev {
            let date = gregorian_date(prev_year, prev_month0, day)?;
            cells.push(CalendarCell::filler(date, day, CellKind::PreviousMonth));
        }
    }

    for day in 1..=days_in_month {
        let date = gregorian_date(year, month0, day)?;
        let mut markers = events.get(&date).cloned().unwrap_or_default();
        markers.sort_by_key(|e| e.day_time);

        cells.push(CalendarCell {
            date,
            day_number: day,
            kind: CellKind::CurrentMonth,
            is_today: date == today,
            events: markers,
        });
    }

    for day in 1..=trailing {
        let date = gregorian_date(next_year, next_month0, day)?;
        cells.push(CalendarCell::filler(date, day, CellKind::NextMonth));
    }

    debug!(
        year,
        month = month0 + 1,
        leading = first_weekday,
        trailing,
        cells = cells.len(),
        "built month grid"
    );

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{StandardCalendar, WeekStart};
    use crate::error::LuachError;
    use crate::event::EventKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: &str, on: NaiveDate, day_time: DayTime) -> CalendarEvent {
        CalendarEvent {
            id: id.into(),
            date: on,
            kind: EventKind::Menstrual,
            day_time,
            note: String::new(),
        }
    }

    #[test]
    fn october_2026_sunday_start() {
        let cal = StandardCalendar::new(WeekStart::Sunday);
        let cells = build_month_grid(&cal, 2026, 9, &EventsByDate::new(), date(2026, 10, 16)).unwrap();

        assert_eq!(cells.len(), 35);
        let leading: Vec<u32> = cells
            .iter()
            .take_while(|c| c.kind == CellKind::PreviousMonth)
            .map(|c| c.day_number)
            .collect();
        assert_eq!(leading, vec![27, 28, 29, 30]);
        assert_eq!(cells[0].iso_date(), "2026-09-27");
        assert_eq!(cells[34].date, date(2026, 10, 31));
        assert!(cells.iter().all(|c| c.kind != CellKind::NextMonth));
    }

    #[test]
    fn october_2026_monday_start() {
        let cal = StandardCalendar::new(WeekStart::Monday);
        let cells = build_month_grid(&cal, 2026, 9, &EventsByDate::new(), date(2026, 10, 16)).unwrap();

        assert_eq!(cells.len(), 35);
        assert_eq!(cells[0].date, date(2026, 9, 28));
        let last = cells.last().unwrap();
        assert_eq!(last.kind, CellKind::NextMonth);
        assert_eq!(last.iso_date(), "2026-11-01");
        assert_eq!(last.day_number, 1);
    }

    #[test]
    fn february_starting_on_sunday_needs_no_filler() {
        let cal = StandardCalendar::new(WeekStart::Sunday);
        let cells = build_month_grid(&cal, 2026, 1, &EventsByDate::new(), date(2026, 10, 16)).unwrap();
        assert_eq!(cells.len(), 28);
        assert!(cells.iter().all(|c| !c.is_filler()));
    }

    #[test]
    fn january_fillers_come_from_previous_december() {
        let cal = StandardCalendar::new(WeekStart::Sunday);
        // 2025-01-01 is a Wednesday.
        let cells = build_month_grid(&cal, 2025, 0, &EventsByDate::new(), date(2026, 10, 16)).unwrap();
        assert_eq!(cells[0].iso_date(), "2024-12-29");
        assert_eq!(cells[2].iso_date(), "2024-12-31");
        assert_eq!(cells[3].iso_date(), "2025-01-01");
    }

    #[test]
    fn december_fillers_come_from_next_january() {
        let cal = StandardCalendar::new(WeekStart::Sunday);
        // 2025-12-31 is a Wednesday, so Thu..Sat of January follow.
        let cells = build_month_grid(&cal, 2025, 11, &EventsByDate::new(), date(2026, 10, 16)).unwrap();
        let trailing: Vec<String> = cells
            .iter()
            .filter(|c| c.kind == CellKind::NextMonth)
            .map(|c| c.iso_date())
            .collect();
        assert_eq!(trailing, vec!["2026-01-01", "2026-01-02", "2026-01-03"]);
    }

    #[test]
    fn today_is_marked_once() {
        let cal = StandardCalendar::default();
        let cells = build_month_grid(&cal, 2026, 9, &EventsByDate::new(), date(2026, 10, 16)).unwrap();
        let today: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].day_number, 16);
    }

    #[test]
    fn today_outside_month_marks_nothing() {
        let cal = StandardCalendar::default();
        // 2026-09-30 shows as a leading filler of October.
        let cells = build_month_grid(&cal, 2026, 9, &EventsByDate::new(), date(2026, 9, 30)).unwrap();
        assert!(cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn events_attach_to_current_month_cells_night_first() {
        let cal = StandardCalendar::default();
        let mut events = EventsByDate::new();
        events.insert(
            date(2026, 10, 5),
            vec![
                event("d", date(2026, 10, 5), DayTime::Day),
                event("n", date(2026, 10, 5), DayTime::Night),
            ],
        );
        // Visible as a leading filler, but fillers carry no markers.
        events.insert(date(2026, 9, 30), vec![event("x", date(2026, 9, 30), DayTime::Day)]);

        let cells = build_month_grid(&cal, 2026, 9, &events, date(2026, 10, 16)).unwrap();
        let fifth = cells.iter().find(|c| c.date == date(2026, 10, 5)).unwrap();
        let ids: Vec<&str> = fifth.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["n", "d"]);
        assert_eq!(fifth.night_events().count(), 1);
        assert_eq!(fifth.day_events().count(), 1);

        let filler = cells.iter().find(|c| c.date == date(2026, 9, 30)).unwrap();
        assert!(filler.events.is_empty());
    }

    #[test]
    fn invalid_month_fails() {
        let cal = StandardCalendar::default();
        assert!(matches!(
            build_month_grid(&cal, 2026, 12, &EventsByDate::new(), date(2026, 10, 16)),
            Err(LuachError::InvalidMonth { month: 12 })
        ));
    }

    #[test]
    fn unsupported_year_fails() {
        let cal = StandardCalendar::default();
        assert!(matches!(
            build_month_grid(&cal, 300_000, 0, &EventsByDate::new(), date(2026, 10, 16)),
            Err(LuachError::UnsupportedYear { .. })
        ));
    }

    #[test]
    fn negative_years_are_supported() {
        let cal = StandardCalendar::default();
        let cells = build_month_grid(&cal, -44, 2, &EventsByDate::new(), date(2026, 10, 16)).unwrap();
        assert_eq!(cells.len() % DAYS_IN_WEEK, 0);
    }

    #[test]
    fn cell_json_uses_iso_date_and_kind_names() {
        let cal = StandardCalendar::default();
        let cells = build_month_grid(&cal, 2026, 9, &EventsByDate::new(), date(2026, 10, 16)).unwrap();
        let json = serde_json::to_value(&cells[0]).unwrap();
        assert_eq!(json["isoDate"], "2026-09-27");
        assert_eq!(json["cellKind"], "previousMonth");
        assert_eq!(json["dayNumber"], 27);
        assert_eq!(json["isToday"], false);
    }
}
