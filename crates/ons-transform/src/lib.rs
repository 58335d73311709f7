//! Series transformation for the ONS pipeline.
//!
//! - **period**: `YYYY MON` label parsing
//! - **derive**: year-over-year and rolling-mean columns
//! - **contiguity**: month gap detection
//! - **standardize**: raw table to long-format rows for one series
//! - **merge**: concatenation of standardized series

pub mod contiguity;
pub mod derive;
pub mod error;
pub mod frame;
pub mod merge;
pub mod period;
pub mod standardize;

pub use contiguity::{MonthGap, find_month_gaps};
pub use derive::{ROLLING_WINDOW, YOY_LAG, rolling_means, yoy_changes};
pub use error::{Result, TransformError};
pub use frame::{SeriesFrame, StandardizeStats, observations_frame};
pub use merge::merge_series;
pub use period::parse_period;
pub use standardize::{standardize_rows, standardize_series};
