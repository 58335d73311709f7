//! Month gap detection for sorted series.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Missing months between two consecutive observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGap {
    pub after: NaiveDate,
    pub before: NaiveDate,
    pub missing_months: u32,
}

impl fmt::Display for MonthGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} missing month(s) between {} and {}",
            self.missing_months,
            self.after.format("%Y-%m"),
            self.before.format("%Y-%m")
        )
    }
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Returns every gap between consecutive dates of an ascending sequence.
pub fn find_month_gaps(dates: &[NaiveDate]) -> Vec<MonthGap> {
    dates
        .windows(2)
        .filter_map(|pair| {
            let step = month_index(pair[1]) - month_index(pair[0]);
            if step <= 1 {
                return None;
            }
            Some(MonthGap {
                after: pair[0],
                before: pair[1],
                missing_months: u32::try_from(step - 1).unwrap_or(u32::MAX),
            })
        })
        .collect()
}
