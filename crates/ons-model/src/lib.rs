pub mod error;
pub mod observation;
pub mod options;
pub mod series;

pub use error::{ModelError, Result};
pub use observation::{
    COL_DATE, COL_ROLLING_3M, COL_SERIES_ID, COL_SERIES_KEY, COL_SERIES_NAME, COL_SOURCE,
    COL_UNIT, COL_VALUE, COL_YOY_CHANGE, OUTPUT_COLUMNS, PERIOD_COLUMN, RawPeriodValue,
    StandardizedObservation, VALUE_COLUMN,
};
pub use options::{ContiguityMode, DEFAULT_TIMEOUT_SECS, PipelineConfig, StandardizeOptions};
pub use series::{SeriesDescriptor, SeriesKey, resolve_selection};
