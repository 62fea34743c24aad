//! Hebrew calendar dates.
//!
//! A deterministic replacement for locale-driven calendar conversion: every
//! conversion goes through fixed day numbers computed in [`arithmetic`].

mod arithmetic;

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::{LuachError, LuachResult};
use crate::numeral::to_hebrew_numeral;

pub use arithmetic::{days_in_month, days_in_year, is_leap_year, months_in_year};

/// Hebrew months, numbered from Nisan. In a leap year month 12 is Adar I.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum HebrewMonth {
    Nisan = 1,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
    Tishrei,
    Cheshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    AdarII,
}

impl HebrewMonth {
    const ALL: [HebrewMonth; 13] = [
        HebrewMonth::Nisan,
        HebrewMonth::Iyar,
        HebrewMonth::Sivan,
        HebrewMonth::Tammuz,
        HebrewMonth::Av,
        HebrewMonth::Elul,
        HebrewMonth::Tishrei,
        HebrewMonth::Cheshvan,
        HebrewMonth::Kislev,
        HebrewMonth::Tevet,
        HebrewMonth::Shevat,
        HebrewMonth::Adar,
        HebrewMonth::AdarII,
    ];

    pub fn from_number(number: u8) -> Option<HebrewMonth> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Hebrew name. `leap_year` selects `אדר א׳` for Adar.
    pub fn name(self, leap_year: bool) -> &'static str {
        match self {
            HebrewMonth::Nisan => "ניסן",
            HebrewMonth::Iyar => "אייר",
            HebrewMonth::Sivan => "סיוון",
            HebrewMonth::Tammuz => "תמוז",
            HebrewMonth::Av => "אב",
            HebrewMonth::Elul => "אלול",
            HebrewMonth::Tishrei => "תשרי",
            HebrewMonth::Cheshvan => "חשוון",
            HebrewMonth::Kislev => "כסלו",
            HebrewMonth::Tevet => "טבת",
            HebrewMonth::Shevat => "שבט",
            HebrewMonth::Adar if leap_year => "אדר א׳",
            HebrewMonth::Adar => "אדר",
            HebrewMonth::AdarII => "אדר ב׳",
        }
    }
}

/// A validated date in the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: u8,
}

impl HebrewDate {
    /// Creates a date from year, month number (Nisan = 1) and day.
    ///
    /// # Errors
    ///
    /// [`LuachError::UnsupportedYear`] for years before AM 1 or whose
    /// 1 Tishrei has no Gregorian date, and
    /// [`LuachError::InvalidHebrewDate`] when the month does not exist in
    /// that year or the day exceeds the month's length.
    pub fn new(year: i32, month: u8, day: u8) -> LuachResult<Self> {
        let new_year = i32::try_from(arithmetic::new_year(i64::from(year)))
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt);
        if year < 1 || new_year.is_none() {
            return Err(LuachError::UnsupportedYear {
                year: i64::from(year),
            });
        }

        let invalid = || LuachError::InvalidHebrewDate { year, month, day };

        let hebrew_month = HebrewMonth::from_number(month).ok_or_else(invalid)?;
        if month > months_in_year(year) {
            return Err(invalid());
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(invalid());
        }

        Ok(Self {
            year,
            month: hebrew_month,
            day,
        })
    }

    /// Converts a Gregorian date.
    ///
    /// # Errors
    ///
    /// [`LuachError::UnsupportedYear`] for dates before 1 Tishrei AM 1.
    pub fn from_gregorian(date: NaiveDate) -> LuachResult<Self> {
        Self::from_fixed(i64::from(date.num_days_from_ce()))
            .ok_or(LuachError::UnsupportedYear {
                year: i64::from(date.year()),
            })
    }

    fn from_fixed(fixed: i64) -> Option<Self> {
        if fixed < arithmetic::EPOCH {
            return None;
        }
        let (year, month, day) = arithmetic::hebrew_from_fixed(fixed)?;
        Some(Self {
            year,
            month: HebrewMonth::from_number(month)?,
            day,
        })
    }

    fn fixed(&self) -> i64 {
        arithmetic::fixed_from_hebrew(self.year, self.month.number(), self.day)
    }

    pub fn to_gregorian(&self) -> LuachResult<NaiveDate> {
        i32::try_from(self.fixed())
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(LuachError::UnsupportedYear {
                year: i64::from(self.year),
            })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> HebrewMonth {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub fn month_name(&self) -> &'static str {
        self.month.name(self.is_leap_year())
    }

    /// Number of days in this date's month.
    pub fn month_length(&self) -> u8 {
        days_in_month(self.year, self.month.number())
    }

    /// The date `days` days later (or earlier, when negative).
    pub fn add_days(&self, days: i64) -> LuachResult<Self> {
        self.fixed()
            .checked_add(days)
            .and_then(Self::from_fixed)
            .ok_or(LuachError::UnsupportedYear {
            year: i64::from(self.year),
        })
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(&self, earlier: &HebrewDate) -> i64 {
        self.fixed() - earlier.fixed()
    }

    pub fn weekday(&self) -> Weekday {
        // Fixed day 1 (0001-01-01) was a Monday.
        match self.fixed().rem_euclid(7) {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Gematria for the day of the month.
    pub fn day_numeral(&self) -> String {
        // Days are always within 1..=30.
        to_hebrew_numeral(i64::from(self.day)).unwrap_or_else(|_| self.day.to_string())
    }

    /// Gematria for the year without thousands (5784 -> `תשפ"ד`).
    ///
    /// Years divisible by 1000 have no such numeral and fail.
    pub fn year_numeral(&self) -> LuachResult<String> {
        to_hebrew_numeral(i64::from(self.year % 1000))
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fixed().cmp(&other.fixed())
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self
            .year_numeral()
            .unwrap_or_else(|_| self.year.to_string());
        write!(f, "{} {} {}", self.day_numeral(), self.month_name(), year)
    }
}

/// Hebrew weekday name (`ראשון` .. `שבת`).
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "ראשון",
        Weekday::Mon => "שני",
        Weekday::Tue => "שלישי",
        Weekday::Wed => "רביעי",
        Weekday::Thu => "חמישי",
        Weekday::Fri => "שישי",
        Weekday::Sat => "שבת",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn converts_gregorian_dates() {
        let date = HebrewDate::from_gregorian(greg(2024, 3, 15)).unwrap();
        assert_eq!(date.year(), 5784);
        assert_eq!(date.month(), HebrewMonth::AdarII);
        assert_eq!(date.day(), 5);
        assert_eq!(date.month_name(), "אדר ב׳");
    }

    #[test]
    fn converts_back_to_gregorian() {
        let pesach = HebrewDate::new(5784, 1, 15).unwrap();
        assert_eq!(pesach.to_gregorian().unwrap(), greg(2024, 4, 23));
    }

    #[test]
    fn adar_name_depends_on_leap_year() {
        assert_eq!(HebrewDate::new(5784, 12, 1).unwrap().month_name(), "אדר א׳");
        assert_eq!(HebrewDate::new(5785, 12, 1).unwrap().month_name(), "אדר");
    }

    #[test]
    fn rejects_adar_ii_in_common_year() {
        assert!(matches!(
            HebrewDate::new(5785, 13, 1),
            Err(LuachError::InvalidHebrewDate { .. })
        ));
    }

    #[test]
    fn rejects_day_past_month_end() {
        assert!(HebrewDate::new(5784, 2, 30).is_err());
        assert!(HebrewDate::new(5784, 1, 0).is_err());
    }

    #[test]
    fn rejects_years_before_creation() {
        assert!(matches!(
            HebrewDate::new(0, 7, 1),
            Err(LuachError::UnsupportedYear { year: 0 })
        ));
        assert!(matches!(
            HebrewDate::from_gregorian(greg(-3761, 1, 1)),
            Err(LuachError::UnsupportedYear { .. })
        ));
    }

    #[test]
    fn rejects_years_past_the_gregorian_range() {
        assert!(matches!(
            HebrewDate::new(i32::MAX, 8, 1),
            Err(LuachError::UnsupportedYear { year }) if year == i64::from(i32::MAX)
        ));
        assert!(HebrewDate::new(300_000, 7, 1).is_err());
        assert!(HebrewDate::new(6000, 7, 1).is_ok());
    }

    #[test]
    fn add_days_crosses_years() {
        let elul_29 = HebrewDate::new(5784, 6, 29).unwrap();
        let next = elul_29.add_days(1).unwrap();
        assert_eq!((next.year(), next.month(), next.day()), (5785, HebrewMonth::Tishrei, 1));
        assert_eq!(next.days_since(&elul_29), 1);
    }

    #[test]
    fn weekday_matches_gregorian() {
        let date = HebrewDate::from_gregorian(greg(2026, 10, 16)).unwrap();
        assert_eq!(date.weekday(), Weekday::Fri);
    }

    #[test]
    fn ordering_follows_time_not_month_number() {
        let tishrei = HebrewDate::new(5785, 7, 1).unwrap();
        let nisan = HebrewDate::new(5785, 1, 1).unwrap();
        assert!(tishrei < nisan);
    }

    #[test]
    fn display_uses_gematria() {
        let date = HebrewDate::from_gregorian(greg(2024, 3, 15)).unwrap();
        assert_eq!(date.to_string(), "ה אדר ב׳ תשפ\"ד");
    }

    #[test]
    fn weekday_names() {
        assert_eq!(weekday_name(Weekday::Sat), "שבת");
        assert_eq!(weekday_name(Weekday::Sun), "ראשון");
    }
}
