//! Property tests for period parsing and derived columns.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use ons_transform::{ROLLING_WINDOW, parse_period, rolling_means, yoy_changes};

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

proptest! {
    #[test]
    fn period_parses_to_first_of_month(year in 1000i32..=9999, month in 1u32..=12, lower in any::<bool>()) {
        let name = MONTHS[(month - 1) as usize];
        let name = if lower { name.to_ascii_lowercase() } else { name.to_string() };
        let date = parse_period(&format!("{year} {name}"));
        prop_assert_eq!(date, NaiveDate::from_ymd_opt(year, month, 1));
        if let Some(date) = date {
            prop_assert_eq!(date.day(), 1);
        }
    }

    #[test]
    fn period_never_panics(text in "\\PC{0,12}") {
        let _ = parse_period(&text);
    }

    #[test]
    fn rolling_matches_window_mean(values in prop::collection::vec(-1.0e6f64..1.0e6, 0..40)) {
        let means = rolling_means(&values, ROLLING_WINDOW);
        prop_assert_eq!(means.len(), values.len());
        for (idx, mean) in means.iter().enumerate() {
            if idx < 2 {
                prop_assert!(mean.is_none());
            } else {
                let expected = (values[idx - 2] + values[idx - 1] + values[idx]) / 3.0;
                let actual = mean.unwrap();
                prop_assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1.0));
            }
        }
    }

    #[test]
    fn yoy_absent_for_first_year(values in prop::collection::vec(0.5f64..100.0, 0..40)) {
        let changes = yoy_changes(&values);
        prop_assert_eq!(changes.len(), values.len());
        for (idx, change) in changes.iter().enumerate() {
            if idx < 12 {
                prop_assert!(change.is_none());
            } else {
                let expected = (values[idx] - values[idx - 12]) / values[idx - 12] * 100.0;
                prop_assert_eq!(*change, Some(expected));
            }
        }
    }
}
