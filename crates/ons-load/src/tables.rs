//! Dimension and fact table derivation.

use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, NaiveDate};

use crate::dataset::DatasetRow;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DimSeries {
    pub series_key: String,
    pub series_id: String,
    pub series_name: String,
    pub unit: String,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimDate {
    pub date_id: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_month_start: bool,
}

impl DimDate {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date_id: date,
            year: date.year(),
            month: date.month(),
            day: date.day(),
            is_month_start: date.day() == 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactRow {
    pub series_key: String,
    pub date_id: NaiveDate,
    pub value: Option<f64>,
    pub yoy_change: Option<f64>,
    pub rolling_3m: Option<f64>,
}

/// Rows for the three warehouse tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarehouseTables {
    pub dim_series: Vec<DimSeries>,
    pub dim_date: Vec<DimDate>,
    pub facts: Vec<FactRow>,
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Derives dimension and fact rows from the processed dataset.
///
/// `dim_series` holds distinct metadata tuples ordered by key and `dim_date`
/// the sorted distinct dates. Facts keep the first row per
/// `(series_key, date)` with non-finite numbers cleared.
pub fn build_tables(rows: &[DatasetRow]) -> WarehouseTables {
    let dim_series: BTreeSet<DimSeries> = rows
        .iter()
        .map(|row| DimSeries {
            series_key: row.series_key.clone(),
            series_id: row.series_id.clone(),
            series_name: row.series_name.clone(),
            unit: row.unit.clone(),
            source: row.source.clone(),
        })
        .collect();

    let dates: BTreeSet<NaiveDate> = rows.iter().map(|row| row.date).collect();

    let mut seen: HashSet<(&str, NaiveDate)> = HashSet::new();
    let facts = rows
        .iter()
        .filter(|row| seen.insert((row.series_key.as_str(), row.date)))
        .map(|row| FactRow {
            series_key: row.series_key.clone(),
            date_id: row.date,
            value: finite(row.value),
            yoy_change: finite(row.yoy_change),
            rolling_3m: finite(row.rolling_3m),
        })
        .collect();

    WarehouseTables {
        dim_series: dim_series.into_iter().collect(),
        dim_date: dates.into_iter().map(DimDate::from_date).collect(),
        facts,
    }
}
