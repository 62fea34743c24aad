//! Date text as typed by users or stored in legacy sighting lists.
//!
//! Accepted date forms:
//!
//! - `today`
//! - Hebrew `D/M/YYYY` when the year is above 5000 (`8/12/5785`)
//! - Gregorian `YYYY-MM-DD`, `DD/MM/YYYY` or `DD-MM-YYYY`

use chrono::NaiveDate;

use crate::error::{LuachError, LuachResult};
use crate::event::DayTime;
use crate::hebrew::HebrewDate;
use crate::onot::Sighting;

/// Years above this are read as Hebrew years.
const HEBREW_YEAR_THRESHOLD: i64 = 5000;

enum ParsedDate {
    Gregorian(NaiveDate),
    Hebrew(HebrewDate),
}

fn invalid(text: &str) -> LuachError {
    LuachError::InvalidDateInput(text.to_string())
}

fn split_numbers(text: &str) -> Option<(Vec<&str>, Vec<i64>)> {
    let sep = if text.contains('/') { '/' } else { '-' };
    let parts: Vec<&str> = text.split(sep).collect();
    if parts.len() != 3 {
        return None;
    }
    let numbers = parts
        .iter()
        .map(|p| p.trim().parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()?;
    Some((parts, numbers))
}

fn parse_any(text: &str, today: NaiveDate) -> LuachResult<ParsedDate> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("today") {
        return Ok(ParsedDate::Gregorian(today));
    }

    let (parts, numbers) = split_numbers(trimmed).ok_or_else(|| invalid(text))?;
    let to_u32 = |n: i64| u32::try_from(n).map_err(|_| invalid(text));

    if parts[0].trim().len() == 4 {
        let year = i32::try_from(numbers[0]).map_err(|_| invalid(text))?;
        return NaiveDate::from_ymd_opt(year, to_u32(numbers[1])?, to_u32(numbers[2])?)
            .map(ParsedDate::Gregorian)
            .ok_or_else(|| invalid(text));
    }

    let (day, month, year) = (numbers[0], numbers[1], numbers[2]);
    if year > HEBREW_YEAR_THRESHOLD {
        let year = i32::try_from(year).map_err(|_| invalid(text))?;
        let month = u8::try_from(month).map_err(|_| invalid(text))?;
        let day = u8::try_from(day).map_err(|_| invalid(text))?;
        return HebrewDate::new(year, month, day).map(ParsedDate::Hebrew);
    }

    let year = i32::try_from(year).map_err(|_| invalid(text))?;
    NaiveDate::from_ymd_opt(year, to_u32(month)?, to_u32(day)?)
        .map(ParsedDate::Gregorian)
        .ok_or_else(|| invalid(text))
}

/// Parses `text` to a Gregorian date. Hebrew input is converted.
///
/// # Errors
///
/// `InvalidDateInput` for text in none of the accepted forms or naming a
/// day that does not exist, `InvalidHebrewDate` for an impossible Hebrew
/// day.
pub fn parse_date_input(text: &str, today: NaiveDate) -> LuachResult<NaiveDate> {
    match parse_any(text, today)? {
        ParsedDate::Gregorian(date) => Ok(date),
        ParsedDate::Hebrew(date) => date.to_gregorian(),
    }
}

/// Parses `text` to a Hebrew date. Gregorian input is converted.
pub fn parse_hebrew_date_input(text: &str, today: NaiveDate) -> LuachResult<HebrewDate> {
    match parse_any(text, today)? {
        ParsedDate::Gregorian(date) => HebrewDate::from_gregorian(date),
        ParsedDate::Hebrew(date) => Ok(date),
    }
}

/// Parses a `<date> <0|1>` sighting line, `0` being night and `1` day.
pub fn parse_sighting_line(line: &str, today: NaiveDate) -> LuachResult<Sighting> {
    let mut fields = line.split_whitespace();
    let (Some(date), Some(onah)) = (fields.next(), fields.next()) else {
        return Err(invalid(line));
    };

    let onah: DayTime = onah.parse().map_err(|_| invalid(line))?;
    Ok(Sighting::new(parse_hebrew_date_input(date, today)?, onah))
}

/// Parses a sighting list, one line per sighting. Blank lines and lines
/// starting with `#` are skipped.
///
/// # Errors
///
/// The first malformed line fails the whole list, reported with its
/// 1-based line number.
pub fn parse_sighting_list(text: &str, today: NaiveDate) -> LuachResult<Vec<Sighting>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| {
            parse_sighting_line(line, today).map_err(|e| {
                LuachError::InvalidDateInput(format!("line {}: {} ({e})", idx + 1, line.trim()))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn today_keyword() {
        assert_eq!(parse_date_input("today", today()).unwrap(), today());
        assert_eq!(parse_date_input(" TODAY ", today()).unwrap(), today());
    }

    #[test]
    fn gregorian_forms() {
        assert_eq!(parse_date_input("2024-03-15", today()).unwrap(), greg(2024, 3, 15));
        assert_eq!(parse_date_input("15/03/2024", today()).unwrap(), greg(2024, 3, 15));
        assert_eq!(parse_date_input("15-03-2024", today()).unwrap(), greg(2024, 3, 15));
    }

    #[test]
    fn hebrew_form_is_converted() {
        // 15 Nisan 5784
        assert_eq!(parse_date_input("15/1/5784", today()).unwrap(), greg(2024, 4, 23));
        let heb = parse_hebrew_date_input("5/13/5784", today()).unwrap();
        assert_eq!(heb.to_gregorian().unwrap(), greg(2024, 3, 15));
    }

    #[test]
    fn rejects_garbage() {
        for text in ["", "tomorrow", "2024-13-01", "31/02/2024", "1/2", "a/b/c"] {
            assert!(
                matches!(parse_date_input(text, today()), Err(LuachError::InvalidDateInput(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn impossible_hebrew_day() {
        assert!(matches!(
            parse_date_input("1/13/5785", today()),
            Err(LuachError::InvalidHebrewDate { .. })
        ));
    }

    #[test]
    fn hebrew_year_beyond_gregorian_range_is_unsupported() {
        assert!(matches!(
            parse_date_input("1/8/2147483647", today()),
            Err(LuachError::UnsupportedYear { .. })
        ));
        assert!(parse_hebrew_date_input("1/7/300000", today()).is_err());

        let err = parse_sighting_list("1/7/2147483647 0\n", today()).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn sighting_lines() {
        let sighting = parse_sighting_line("8/12/5785 0", today()).unwrap();
        assert_eq!(sighting.onah, DayTime::Night);
        assert_eq!(sighting.date, HebrewDate::new(5785, 12, 8).unwrap());

        let sighting = parse_sighting_line("2024-03-15 1", today()).unwrap();
        assert_eq!(sighting.onah, DayTime::Day);
        assert_eq!(sighting.date.day(), 5);

        assert!(parse_sighting_line("8/12/5785", today()).is_err());
        assert!(parse_sighting_line("8/12/5785 2", today()).is_err());
    }

    #[test]
    fn sighting_list_skips_comments_and_reports_line() {
        let list = "# history\n1/8/5785 0\n\n29/8/5785 1\n";
        assert_eq!(parse_sighting_list(list, today()).unwrap().len(), 2);

        let err = parse_sighting_list("1/8/5785 0\nbad 1\n", today()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
