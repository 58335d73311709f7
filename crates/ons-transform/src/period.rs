//! Parsing of agency period labels.
//!
//! Monthly observations are labelled `YYYY MON`, for example `2010 JAN`.
//! Annual (`2010`) and quarterly (`2010 Q1`) labels never parse.

use chrono::NaiveDate;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Parses a `YYYY MON` label into the first day of that month.
///
/// The label must be exactly four ASCII digits, one space and a three-letter
/// English month abbreviation (any case). Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ons_transform::parse_period;
///
/// assert_eq!(parse_period("2010 JAN"), NaiveDate::from_ymd_opt(2010, 1, 1));
/// assert_eq!(parse_period("2010 feb"), NaiveDate::from_ymd_opt(2010, 2, 1));
/// assert_eq!(parse_period("2010 Q1"), None);
/// ```
pub fn parse_period(label: &str) -> Option<NaiveDate> {
    let trimmed = label.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() != 8 || bytes[4] != b' ' {
        return None;
    }
    if !bytes[..4].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let year: i32 = trimmed[..4].parse().ok()?;
    let month = month_number(&trimmed[5..])?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn month_number(abbreviation: &str) -> Option<u32> {
    let position = MONTH_ABBREVIATIONS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(abbreviation))?;
    u32::try_from(position + 1).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, 1)
    }

    #[test]
    fn test_every_month_parses() {
        for (idx, name) in MONTH_ABBREVIATIONS.iter().enumerate() {
            let label = format!("1999 {name}");
            assert_eq!(parse_period(&label), ymd(1999, idx as u32 + 1), "{label}");
        }
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(parse_period(" 2024 Dec "), ymd(2024, 12));
        assert_eq!(parse_period("2024 dec"), ymd(2024, 12));
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert_eq!(parse_period("2010"), None);
        assert_eq!(parse_period("2010 Q1"), None);
        assert_eq!(parse_period("2010  JAN"), None);
        assert_eq!(parse_period("2010 JANUARY"), None);
        assert_eq!(parse_period("2010-JAN"), None);
        assert_eq!(parse_period("+201 JAN"), None);
        assert_eq!(parse_period("2010 XYZ"), None);
        assert_eq!(parse_period(""), None);
        // Non-ASCII text of the right byte length must not panic on slicing.
        assert_eq!(parse_period("2010 Jé"), None);
    }
}
