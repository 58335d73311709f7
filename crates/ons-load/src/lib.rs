//! Load stage of the ONS pipeline.
//!
//! Derives `dim_series`, `dim_date` and `fact_series_values` from the
//! processed dataset and replaces their contents in an SQLite warehouse.

use std::path::Path;

use tracing::info_span;

pub mod dataset;
pub mod error;
pub mod tables;
pub mod warehouse;

pub use dataset::{DatasetRow, read_dataset};
pub use error::{LoadError, Result};
pub use tables::{DimDate, DimSeries, FactRow, WarehouseTables, build_tables};
pub use warehouse::{LoadSummary, Warehouse};

/// Loads the processed dataset at `dataset` into the warehouse at `warehouse`.
pub fn load_dataset(dataset: &Path, warehouse: &Path) -> Result<LoadSummary> {
    let span = info_span!("load", warehouse = %warehouse.display());
    let _guard = span.enter();

    let rows = read_dataset(dataset)?;
    let tables = build_tables(&rows);
    let mut db = Warehouse::open(warehouse)?;
    db.ensure_schema()?;
    db.replace_tables(&tables)
}
