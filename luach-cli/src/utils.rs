use anyhow::Result;
use chrono::NaiveDate;
use luach_core::LuachError;
use luach_core::input::parse_date_input;

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    const ABBREVS: [(&str, &str); 22] = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            ABBREVS
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| full.to_string())
                .unwrap_or_else(|| word.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a date argument: the fixed forms first (ISO, `DD/MM/YYYY`,
/// Hebrew `D/M/YYYY`, `today`), then natural language like "yesterday"
/// or "last friday".
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    match parse_date_input(input, today) {
        Ok(date) => Ok(date),
        Err(
            err @ (LuachError::InvalidHebrewDate { .. } | LuachError::UnsupportedYear { .. }),
        ) => Err(err.into()),
        Err(_) => {
            let expanded = expand_abbreviations(input);
            let dt = fuzzydate::parse(&expanded)
                .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;
            Ok(dt.date())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn expand_day_and_month_abbreviations() {
        assert_eq!(expand_abbreviations("last fri"), "last friday");
        assert_eq!(expand_abbreviations("Sept 5"), "september 5");
        assert_eq!(expand_abbreviations("yesterday"), "yesterday");
    }

    #[test]
    fn fixed_forms_do_not_need_fuzzy_parsing() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_date("2024-03-15", today()).unwrap(), expected);
        assert_eq!(parse_date("15/03/2024", today()).unwrap(), expected);
        assert_eq!(parse_date("5/13/5784", today()).unwrap(), expected);
    }

    #[test]
    fn impossible_hebrew_date_is_reported_as_such() {
        let err = parse_date("1/13/5785", today()).unwrap_err();
        assert!(err.to_string().contains("Invalid Hebrew date"));
    }

    #[test]
    fn hebrew_year_past_gregorian_range_is_unsupported() {
        let err = parse_date("1/8/2147483647", today()).unwrap_err();
        assert!(err.to_string().contains("Unsupported year"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_date("not a date at all xyz", today()).is_err());
    }
}
