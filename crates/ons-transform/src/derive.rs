//! Position-based derived columns.
//!
//! Both computations assume the input is one series sorted by date with one
//! value per month. They look back by row position, not by calendar month.

/// Rows between a value and its year-earlier counterpart.
pub const YOY_LAG: usize = 12;

/// Width of the trailing mean window.
pub const ROLLING_WINDOW: usize = 3;

/// Percentage change against the value `YOY_LAG` rows earlier.
///
/// Absent for the first `YOY_LAG` rows and wherever the result is not finite
/// (a zero base value).
///
/// # Examples
///
/// ```
/// use ons_transform::yoy_changes;
///
/// let mut values = vec![2.0; 12];
/// values.push(3.0);
/// let changes = yoy_changes(&values);
/// assert_eq!(changes[11], None);
/// assert_eq!(changes[12], Some(50.0));
/// ```
pub fn yoy_changes(values: &[f64]) -> Vec<Option<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(idx, &current)| {
            let base = values[idx.checked_sub(YOY_LAG)?];
            let change = (current - base) / base * 100.0;
            change.is_finite().then_some(change)
        })
        .collect()
}

/// Trailing arithmetic mean over `window` rows.
///
/// Absent until a full window is available.
pub fn rolling_means(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|idx| {
            let start = (idx + 1).checked_sub(window)?;
            let sum: f64 = values[start..=idx].iter().sum();
            Some(sum / window as f64)
        })
        .collect()
}
