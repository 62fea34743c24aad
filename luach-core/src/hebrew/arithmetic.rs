//! Arithmetic Hebrew calendar on fixed day numbers.
//!
//! Fixed day 1 is 0001-01-01 in the proleptic Gregorian calendar, which is
//! what `chrono::NaiveDate::num_days_from_ce` returns. Months are numbered
//! from Nisan (1) to Adar (12) and Adar II (13); the year begins on
//! 1 Tishrei (month 7).

/// Fixed day of 1 Tishrei AM 1.
pub(crate) const EPOCH: i64 = -1_373_427;

/// Parts (1/1080 hour) in a day.
const DAY_PARTS: i64 = 25_920;

/// Leap years are years 3, 6, 8, 11, 14, 17 and 19 of the 19-year cycle.
pub fn is_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Days from the epoch to the molad of Tishrei of `year`, after the
/// "lo ADU" postponement.
fn elapsed_days(year: i64) -> i64 {
    let months_elapsed = (235 * year - 234).div_euclid(19);
    let parts_elapsed = 12_084 + 13_753 * months_elapsed;
    let day = 29 * months_elapsed + parts_elapsed.div_euclid(DAY_PARTS);

    if (3 * (day + 1)).rem_euclid(7) < 3 {
        day + 1
    } else {
        day
    }
}

/// Extra delay keeping year lengths within 353..=355 or 383..=385.
fn new_year_delay(year: i64) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);

    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// Fixed day of 1 Tishrei of `year`.
pub(crate) fn new_year(year: i64) -> i64 {
    EPOCH + elapsed_days(year) + new_year_delay(year)
}

pub fn days_in_year(year: i32) -> u16 {
    let year = i64::from(year);
    (new_year(year + 1) - new_year(year)) as u16
}

fn long_cheshvan(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

fn short_kislev(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

/// Length of `month` in `year`. Callers validate the month number.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 | 4 | 6 | 10 | 13 => 29,
        12 if !is_leap_year(year) => 29,
        8 if !long_cheshvan(year) => 29,
        9 if short_kislev(year) => 29,
        _ => 30,
    }
}

pub(crate) fn fixed_from_hebrew(year: i32, month: u8, day: u8) -> i64 {
    let month_days = |range: std::ops::Range<u8>| -> i64 {
        range.map(|m| i64::from(days_in_month(year, m))).sum()
    };

    let before_month = if month < 7 {
        month_days(7..months_in_year(year) + 1) + month_days(1..month)
    } else {
        month_days(7..month)
    };

    new_year(i64::from(year)) + before_month + i64::from(day) - 1
}

/// Inverse of [`fixed_from_hebrew`]. `fixed` must not precede [`EPOCH`].
/// `None` when the Hebrew year does not fit an `i32`.
pub(crate) fn hebrew_from_fixed(fixed: i64) -> Option<(i32, u8, u8)> {
    // Mean year length is 35975351/98496 days.
    let approx = ((fixed - EPOCH) * 98_496).div_euclid(35_975_351) + 1;

    let mut year = approx - 1;
    while new_year(year + 1) <= fixed {
        year += 1;
    }
    let year = i32::try_from(year).ok()?;

    let mut month = if fixed < fixed_from_hebrew(year, 1, 1) { 7 } else { 1 };
    while fixed > fixed_from_hebrew(year, month, days_in_month(year, month)) {
        month += 1;
    }

    let day = (fixed - fixed_from_hebrew(year, month, 1) + 1) as u8;
    Some((year, month, day))
}
