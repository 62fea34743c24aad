//! Gematria numerals for Hebrew day and year numbers.
//!
//! Values are decomposed into a run of `ת` (one per 400), a hundreds letter
//! (`ק`, `ר`, `ש`), a tens letter and a ones letter. The residues 15 and 16
//! are written `טו` and `טז` instead of the regular tens+ones pair. When a
//! hundreds letter is present a `"` is inserted before the final letter.

use std::fmt;

use serde::Serialize;

use crate::error::{LuachError, LuachResult};

const THOUSAND: char = 'ת';
const HUNDREDS: [char; 3] = ['ק', 'ר', 'ש'];
const TENS: [char; 9] = ['י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
const ONES: [char; 9] = ['א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];
const FIFTEEN: &str = "טו";
const SIXTEEN: &str = "טז";
const QUOTE: char = '"';

/// Smallest value the encoder accepts.
pub const MIN_NUMERAL: i64 = 1;
/// Largest value the encoder accepts.
pub const MAX_NUMERAL: i64 = 999;

/// A Hebrew-letter numeral. Only constructible from an in-range integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HebrewNumeral(String);

impl HebrewNumeral {
    pub fn new(n: i64) -> LuachResult<Self> {
        to_hebrew_numeral(n).map(HebrewNumeral)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<i64> for HebrewNumeral {
    type Error = LuachError;

    fn try_from(n: i64) -> LuachResult<Self> {
        Self::new(n)
    }
}

impl TryFrom<f64> for HebrewNumeral {
    type Error = LuachError;

    /// Fractional, infinite and NaN values are rejected rather than truncated.
    fn try_from(n: f64) -> LuachResult<Self> {
        if !n.is_finite() || n.fract() != 0.0 {
            return Err(LuachError::InvalidNumeral(n.to_string()));
        }
        if n < MIN_NUMERAL as f64 || n > MAX_NUMERAL as f64 {
            return Err(LuachError::InvalidNumeral(n.to_string()));
        }
        Self::new(n as i64)
    }
}

impl fmt::Display for HebrewNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HebrewNumeral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Encode `n` (1..=999) as a gematria numeral.
///
/// ```
/// use luach_core::numeral::to_hebrew_numeral;
///
/// assert_eq!(to_hebrew_numeral(15).unwrap(), "טו");
/// assert_eq!(to_hebrew_numeral(127).unwrap(), "קכ\"ז");
/// ```
pub fn to_hebrew_numeral(n: i64) -> LuachResult<String> {
    if !(MIN_NUMERAL..=MAX_NUMERAL).contains(&n) {
        return Err(LuachError::InvalidNumeral(n.to_string()));
    }

    let mut letters: Vec<char> = Vec::with_capacity(6);

    letters.extend(std::iter::repeat_n(THOUSAND, (n / 400) as usize));

    let hundreds = (n % 400 / 100) as usize;
    if hundreds > 0 {
        letters.push(HUNDREDS[hundreds - 1]);
    }

    match n % 100 {
        15 => letters.extend(FIFTEEN.chars()),
        16 => letters.extend(SIXTEEN.chars()),
        rest => {
            let tens = (rest / 10) as usize;
            let ones = (rest % 10) as usize;
            if tens > 0 {
                letters.push(TENS[tens - 1]);
            }
            if ones > 0 {
                letters.push(ONES[ones - 1]);
            }
        }
    }

    if hundreds > 0 {
        let last = letters.len() - 1;
        letters.insert(last, QUOTE);
    }

    Ok(letters.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters() {
        assert_eq!(to_hebrew_numeral(1).unwrap(), "א");
        assert_eq!(to_hebrew_numeral(5).unwrap(), "ה");
        assert_eq!(to_hebrew_numeral(10).unwrap(), "י");
        assert_eq!(to_hebrew_numeral(30).unwrap(), "ל");
    }

    #[test]
    fn tens_and_ones() {
        assert_eq!(to_hebrew_numeral(11).unwrap(), "יא");
        assert_eq!(to_hebrew_numeral(29).unwrap(), "כט");
        assert_eq!(to_hebrew_numeral(99).unwrap(), "צט");
    }

    #[test]
    fn fifteen_and_sixteen_are_irregular() {
        assert_eq!(to_hebrew_numeral(15).unwrap(), "טו");
        assert_eq!(to_hebrew_numeral(16).unwrap(), "טז");
    }

    #[test]
    fn hundreds_get_quote_before_last_letter() {
        assert_eq!(to_hebrew_numeral(127).unwrap(), "קכ\"ז");
        assert_eq!(to_hebrew_numeral(345).unwrap(), "שמ\"ה");
    }

    #[test]
    fn irregular_residue_keeps_hundreds() {
        assert_eq!(to_hebrew_numeral(115).unwrap(), "קט\"ו");
        assert_eq!(to_hebrew_numeral(216).unwrap(), "רט\"ז");
    }

    #[test]
    fn bare_hundred_is_quoted_before_its_only_letter() {
        assert_eq!(to_hebrew_numeral(100).unwrap(), "\"ק");
    }

    #[test]
    fn year_remainders() {
        assert_eq!(to_hebrew_numeral(784).unwrap(), "תשפ\"ד");
        assert_eq!(to_hebrew_numeral(787).unwrap(), "תשפ\"ז");
        assert_eq!(to_hebrew_numeral(999).unwrap(), "תתקצ\"ט");
    }

    #[test]
    fn four_hundreds_without_hundreds_letter_are_not_quoted() {
        assert_eq!(to_hebrew_numeral(400).unwrap(), "ת");
        assert_eq!(to_hebrew_numeral(410).unwrap(), "תי");
        assert_eq!(to_hebrew_numeral(800).unwrap(), "תת");
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(matches!(to_hebrew_numeral(0), Err(LuachError::InvalidNumeral(_))));
        assert!(matches!(to_hebrew_numeral(1000), Err(LuachError::InvalidNumeral(_))));
        assert!(matches!(to_hebrew_numeral(-3), Err(LuachError::InvalidNumeral(_))));
    }

    #[test]
    fn fractional_input_is_rejected() {
        assert!(matches!(
            HebrewNumeral::try_from(3.5),
            Err(LuachError::InvalidNumeral(_))
        ));
        assert!(HebrewNumeral::try_from(f64::NAN).is_err());
        assert_eq!(HebrewNumeral::try_from(16.0).unwrap().as_str(), "טז");
    }

    #[test]
    fn numeral_displays_its_letters() {
        let numeral = HebrewNumeral::new(11).unwrap();
        assert_eq!(numeral.to_string(), "יא");
    }
}
