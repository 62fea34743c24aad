//! Forbidden-day (onot) calculation.
//!
//! Each recorded sighting yields the days on which the next one is
//! expected: the fixed onot (30th day, same Hebrew date next month, 31st
//! day), the sighting's own interval, earlier intervals that were never
//! uprooted, and the neighbouring-onah stringencies of Or Zarua and
//! Karti Upleiti.

mod intervals;
mod report;

pub use intervals::{cycle_intervals, unbroken_intervals};
pub use report::format_report;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LuachResult;
use crate::event::{CalendarEvent, DayTime};
use crate::hebrew::HebrewDate;

/// A recorded sighting: the Hebrew date and the onah it fell in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sighting {
    pub date: HebrewDate,
    pub onah: DayTime,
}

impl Sighting {
    pub fn new(date: HebrewDate, onah: DayTime) -> Self {
        Sighting { date, onah }
    }

    pub fn from_event(event: &CalendarEvent) -> LuachResult<Self> {
        Ok(Sighting {
            date: HebrewDate::from_gregorian(event.date)?,
            onah: event.day_time,
        })
    }
}

/// Events as sightings, in chronological order. Callers pick the events,
/// usually `EventBook::of_kind(EventKind::Menstrual)`.
pub fn sightings_from_events<'a>(
    events: impl IntoIterator<Item = &'a CalendarEvent>,
) -> LuachResult<Vec<Sighting>> {
    let mut sightings = events
        .into_iter()
        .map(Sighting::from_event)
        .collect::<LuachResult<Vec<_>>>()?;
    sightings.sort();
    Ok(sightings)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Restriction {
    OrZarua,
    OnahBeinonit30,
    KartiUpleiti,
    VesetHachodesh,
    OnahBeinonit31,
    /// The sighting's own interval.
    Haflaga(u32),
    /// An earlier interval not exceeded by any later one.
    UnbrokenHaflaga(u32),
}

impl Restriction {
    pub fn name(&self) -> String {
        match self {
            Restriction::OrZarua => "אור זרוע".to_string(),
            Restriction::OnahBeinonit30 => "עונה בינונית 30".to_string(),
            Restriction::KartiUpleiti => "כרתי ופלתי".to_string(),
            Restriction::VesetHachodesh => "וסת החודש".to_string(),
            Restriction::OnahBeinonit31 => "עונה בינונית 31".to_string(),
            Restriction::Haflaga(_) => "הפלגה".to_string(),
            Restriction::UnbrokenHaflaga(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForbiddenDay {
    pub restriction: Restriction,
    pub date: HebrewDate,
    pub onah: DayTime,
}

/// Which families of onot to compute. Read from the `[onot]` config table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnotOptions {
    pub include_or_zarua: bool,
    pub include_kartyupleity: bool,
    /// 30th day, Veset Hachodesh and 31st day.
    pub include_standard_cycles: bool,
    pub include_personal_intervals: bool,
    pub include_unbroken_patterns: bool,
}

impl Default for OnotOptions {
    fn default() -> Self {
        OnotOptions {
            include_or_zarua: true,
            include_kartyupleity: true,
            include_standard_cycles: true,
            include_personal_intervals: true,
            include_unbroken_patterns: true,
        }
    }
}

/// Results for one sighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SightingReport {
    pub sighting: Sighting,
    /// Interval from the previous sighting; `None` for the first.
    pub interval: Option<u32>,
    pub forbidden: Vec<ForbiddenDay>,
    pub unbroken: Vec<ForbiddenDay>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnotReport {
    pub intervals: Vec<u32>,
    pub sightings: Vec<SightingReport>,
}

/// Forbidden days of a single sighting.
///
/// `interval` is the sighting's own interval, `previous` every interval
/// known up to it (oldest first). Unbroken intervals are only considered
/// once at least two are known.
pub fn forbidden_days(
    sighting: &Sighting,
    interval: Option<u32>,
    previous: &[u32],
    options: &OnotOptions,
) -> LuachResult<SightingReport> {
    let date = sighting.date;
    let onah = sighting.onah;
    let day_30 = date.add_days(29)?;

    let at = |restriction, date, onah| ForbiddenDay {
        restriction,
        date,
        onah,
    };

    let mut forbidden = Vec::new();

    if options.include_or_zarua {
        match onah {
            DayTime::Night => forbidden.push(at(Restriction::OrZarua, date.add_days(28)?, DayTime::Day)),
            DayTime::Day => forbidden.push(at(Restriction::OrZarua, day_30, DayTime::Night)),
        }
    }
    if options.include_standard_cycles {
        forbidden.push(at(Restriction::OnahBeinonit30, day_30, onah));
    }
    if options.include_kartyupleity && onah == DayTime::Night {
        forbidden.push(at(Restriction::KartiUpleiti, day_30, DayTime::Day));
    }
    if options.include_standard_cycles {
        let month_later = date.add_days(i64::from(date.month_length()))?;
        forbidden.push(at(Restriction::VesetHachodesh, month_later, onah));
        forbidden.push(at(Restriction::OnahBeinonit31, date.add_days(30)?, onah));
    }
    if let Some(n) = interval.filter(|_| options.include_personal_intervals) {
        forbidden.push(at(Restriction::Haflaga(n), date.add_days(i64::from(n) - 1)?, onah));
    }

    let mut unbroken = Vec::new();
    if options.include_unbroken_patterns && previous.len() >= 2 {
        for n in unbroken_intervals(previous) {
            unbroken.push(at(
                Restriction::UnbrokenHaflaga(n),
                date.add_days(i64::from(n) - 1)?,
                onah,
            ));
        }
    }

    Ok(SightingReport {
        sighting: *sighting,
        interval,
        forbidden,
        unbroken,
    })
}

/// Runs the calculation over a whole history. Sightings are sorted
/// chronologically first, night before day on the same date.
pub fn compute_onot(sightings: &[Sighting], options: &OnotOptions) -> LuachResult<OnotReport> {
    let mut ordered = sightings.to_vec();
    ordered.sort();

    let intervals = cycle_intervals(&ordered);

    let reports = ordered
        .iter()
        .enumerate()
        .map(|(i, sighting)| {
            let interval = i.checked_sub(1).and_then(|prev| intervals.get(prev).copied());
            forbidden_days(sighting, interval, &intervals[..i.min(intervals.len())], options)
        })
        .collect::<LuachResult<Vec<_>>>()?;

    debug!(
        sightings = reports.len(),
        intervals = intervals.len(),
        "computed onot"
    );

    Ok(OnotReport {
        intervals,
        sightings: reports,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use chrono::NaiveDate;

    fn heb(year: i32, month: u8, day: u8) -> HebrewDate {
        HebrewDate::new(year, month, day).unwrap()
    }

    fn history() -> Vec<Sighting> {
        vec![
            Sighting::new(heb(5785, 8, 1), DayTime::Night),
            Sighting::new(heb(5785, 8, 29), DayTime::Day),
            Sighting::new(heb(5785, 9, 28), DayTime::Night),
            Sighting::new(heb(5785, 10, 27), DayTime::Day),
        ]
    }

    fn summary(days: &[ForbiddenDay]) -> Vec<(Restriction, u8, u8, DayTime)> {
        days.iter()
            .map(|f| (f.restriction, f.date.month().number(), f.date.day(), f.onah))
            .collect()
    }

    #[test]
    fn night_sighting_without_history() {
        let sighting = Sighting::new(heb(5785, 8, 1), DayTime::Night);
        let report = forbidden_days(&sighting, None, &[], &OnotOptions::default()).unwrap();

        // Cheshvan 5785 has 30 days.
        assert_eq!(
            summary(&report.forbidden),
            vec![
                (Restriction::OrZarua, 8, 29, DayTime::Day),
                (Restriction::OnahBeinonit30, 8, 30, DayTime::Night),
                (Restriction::KartiUpleiti, 8, 30, DayTime::Day),
                (Restriction::VesetHachodesh, 9, 1, DayTime::Night),
                (Restriction::OnahBeinonit31, 9, 1, DayTime::Night),
            ]
        );
        assert!(report.unbroken.is_empty());
    }

    #[test]
    fn day_sighting_has_or_zarua_on_preceding_night() {
        let sighting = Sighting::new(heb(5785, 8, 29), DayTime::Day);
        let report = forbidden_days(&sighting, Some(29), &[29], &OnotOptions::default()).unwrap();

        assert_eq!(
            summary(&report.forbidden),
            vec![
                (Restriction::OrZarua, 9, 28, DayTime::Night),
                (Restriction::OnahBeinonit30, 9, 28, DayTime::Day),
                (Restriction::VesetHachodesh, 9, 29, DayTime::Day),
                (Restriction::OnahBeinonit31, 9, 29, DayTime::Day),
                (Restriction::Haflaga(29), 9, 27, DayTime::Day),
            ]
        );
        // A single earlier interval is not enough for unbroken patterns.
        assert!(report.unbroken.is_empty());
    }

    #[test]
    fn compute_history() {
        let report = compute_onot(&history(), &OnotOptions::default()).unwrap();

        assert_eq!(report.intervals, vec![29, 30, 30]);
        assert_eq!(report.sightings[0].interval, None);
        assert_eq!(report.sightings[2].interval, Some(30));

        // 29 is uprooted by the later 30.
        assert_eq!(
            summary(&report.sightings[2].unbroken),
            vec![(Restriction::UnbrokenHaflaga(30), 10, 27, DayTime::Night)]
        );
        assert_eq!(report.sightings[3].unbroken.len(), 2);
    }

    #[test]
    fn unordered_input_is_sorted() {
        let mut shuffled = history();
        shuffled.reverse();
        let report = compute_onot(&shuffled, &OnotOptions::default()).unwrap();
        assert_eq!(report.intervals, vec![29, 30, 30]);
        assert_eq!(report.sightings[0].sighting, history()[0]);
    }

    #[test]
    fn options_switch_families_off() {
        let options = OnotOptions {
            include_or_zarua: false,
            include_kartyupleity: false,
            include_unbroken_patterns: false,
            ..OnotOptions::default()
        };
        let report = compute_onot(&history(), &options).unwrap();

        for sighting in &report.sightings {
            assert!(sighting.unbroken.is_empty());
            assert!(sighting.forbidden.iter().all(|f| !matches!(
                f.restriction,
                Restriction::OrZarua | Restriction::KartiUpleiti
            )));
        }
        assert_eq!(report.sightings[1].forbidden.len(), 4);
    }

    #[test]
    fn empty_history() {
        let report = compute_onot(&[], &OnotOptions::default()).unwrap();
        assert!(report.intervals.is_empty());
        assert!(report.sightings.is_empty());
    }

    #[test]
    fn sightings_are_sorted_chronologically() {
        let event = |id: &str, day: u32, kind, day_time| CalendarEvent {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(2024, 11, day).unwrap(),
            kind,
            day_time,
            note: String::new(),
        };
        let events = vec![
            event("a", 30, EventKind::Menstrual, DayTime::Day),
            event("b", 2, EventKind::Menstrual, DayTime::Day),
            event("c", 2, EventKind::Menstrual, DayTime::Night),
        ];

        let sightings = sightings_from_events(&events).unwrap();
        assert_eq!(sightings.len(), 3);
        // 2024-11-02 is 1 Cheshvan 5785.
        assert_eq!(sightings[0], Sighting::new(heb(5785, 8, 1), DayTime::Night));
        assert_eq!(sightings[1], Sighting::new(heb(5785, 8, 1), DayTime::Day));
        assert_eq!(sightings[2].date, heb(5785, 8, 29));
    }

    #[test]
    fn restriction_names() {
        assert_eq!(Restriction::OnahBeinonit30.name(), "עונה בינונית 30");
        assert_eq!(Restriction::Haflaga(29).name(), "הפלגה");
        assert_eq!(Restriction::UnbrokenHaflaga(31).to_string(), "31");
    }

    #[test]
    fn options_read_partial_tables() {
        let options: OnotOptions =
            serde_json::from_str(r#"{"include_or_zarua": false}"#).unwrap();
        assert!(!options.include_or_zarua);
        assert!(options.include_kartyupleity);
    }
}
