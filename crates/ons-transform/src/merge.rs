//! Multi-series concatenation.

use polars::prelude::{DataFrame, SortMultipleOptions};
use tracing::debug;

use ons_model::{COL_DATE, COL_SERIES_KEY};

use crate::error::Result;
use crate::frame::{SeriesFrame, observations_frame};

/// Concatenates standardized series into one long-format table.
///
/// The result is sorted by `(series_key, date)`. Rows from different series
/// are never deduplicated against each other. No input yields an empty table
/// with the canonical schema.
pub fn merge_series(frames: Vec<SeriesFrame>) -> Result<DataFrame> {
    let mut frames = frames.into_iter();
    let Some(first) = frames.next() else {
        return Ok(observations_frame(&[])?);
    };

    let mut merged = first.data;
    let mut series_count = 1usize;
    for frame in frames {
        merged.vstack_mut(&frame.data)?;
        series_count += 1;
    }

    let sorted = merged.sort(
        [COL_SERIES_KEY, COL_DATE],
        SortMultipleOptions::default().with_maintain_order(true),
    )?;
    debug!(series_count, rows = sorted.height(), "merged series frames");
    Ok(sorted)
}
