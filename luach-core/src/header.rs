//! Month headers.

use crate::calendar::{CalendarSystem, check_month, first_of_month, gregorian_date};
use crate::error::LuachResult;

/// Gregorian month names as shown in the header.
const GREGORIAN_MONTHS: [&str; 12] = [
    "ינואר", "פברואר", "מרץ", "אפריל", "מאי", "יוני", "יולי", "אוגוסט", "ספטמבר", "אוקטובר",
    "נובמבר", "דצמבר",
];

/// `"<month name> <year>"`, e.g. `אוקטובר 2026`.
pub fn gregorian_header(year: i32, month0: u32) -> LuachResult<String> {
    check_month(month0)?;
    Ok(format!("{} {}", GREGORIAN_MONTHS[month0 as usize], year))
}

/// Hebrew month(s) spanned by a Gregorian month, with the Hebrew year of
/// its first day: `שבט תשפ"ה` or `תשרי-חשוון תשפ"ז`.
///
/// # Errors
///
/// Fails when the calendar cannot convert the month's first or last day,
/// or when the Hebrew year is a multiple of 1000 (no numeral exists).
pub fn hebrew_header<C: CalendarSystem + ?Sized>(
    calendar: &C,
    year: i32,
    month0: u32,
) -> LuachResult<String> {
    let first = calendar.hebrew_date(first_of_month(year, month0)?)?;
    let last_day = calendar.days_in_month(year, month0)?;
    let last = calendar.hebrew_date(gregorian_date(year, month0, last_day)?)?;

    let year_numeral = first.year_numeral()?;

    if first.month_name() == last.month_name() {
        Ok(format!("{} {}", first.month_name(), year_numeral))
    } else {
        Ok(format!(
            "{}-{} {}",
            first.month_name(),
            last.month_name(),
            year_numeral
        ))
    }
}
