//! SQLite warehouse with full table-replace semantics.

use std::fs;
use std::path::Path;

use rusqlite::{Connection, params};
use tracing::info;

use crate::error::{LoadError, Result};
use crate::tables::WarehouseTables;

/// Table definitions. Every statement is idempotent.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS dim_series (
    series_key  TEXT PRIMARY KEY,
    series_id   TEXT NOT NULL,
    series_name TEXT NOT NULL,
    unit        TEXT NOT NULL,
    source      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS dim_date (
    date_id        TEXT PRIMARY KEY,
    year           INTEGER NOT NULL,
    month          INTEGER NOT NULL,
    day            INTEGER NOT NULL,
    is_month_start INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS fact_series_values (
    series_key TEXT NOT NULL REFERENCES dim_series (series_key),
    date_id    TEXT NOT NULL REFERENCES dim_date (date_id),
    value      REAL,
    yoy_change REAL,
    rolling_3m REAL,
    PRIMARY KEY (series_key, date_id)
);
"#;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Row counts written by one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub dim_series: usize,
    pub dim_date: usize,
    pub facts: usize,
}

/// Connection to the warehouse database.
pub struct Warehouse {
    conn: Connection,
}

impl Warehouse {
    /// Opens (or creates) the warehouse file, creating its parent directory.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| LoadError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Creates the dimension and fact tables when they are absent.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Replaces the contents of all three tables in one transaction.
    pub fn replace_tables(&mut self, tables: &WarehouseTables) -> Result<LoadSummary> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM fact_series_values", [])?;
        tx.execute("DELETE FROM dim_date", [])?;
        tx.execute("DELETE FROM dim_series", [])?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO dim_series (series_key, series_id, series_name, unit, source)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for series in &tables.dim_series {
                stmt.execute(params![
                    series.series_key,
                    series.series_id,
                    series.series_name,
                    series.unit,
                    series.source,
                ])?;
            }

            let mut stmt = tx.prepare(
                "INSERT INTO dim_date (date_id, year, month, day, is_month_start)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for date in &tables.dim_date {
                stmt.execute(params![
                    date.date_id.format(DATE_FORMAT).to_string(),
                    date.year,
                    date.month,
                    date.day,
                    date.is_month_start,
                ])?;
            }

            let mut stmt = tx.prepare(
                "INSERT INTO fact_series_values (series_key, date_id, value, yoy_change, rolling_3m)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for fact in &tables.facts {
                stmt.execute(params![
                    fact.series_key,
                    fact.date_id.format(DATE_FORMAT).to_string(),
                    fact.value,
                    fact.yoy_change,
                    fact.rolling_3m,
                ])?;
            }
        }
        tx.commit()?;

        let summary = LoadSummary {
            dim_series: tables.dim_series.len(),
            dim_date: tables.dim_date.len(),
            facts: tables.facts.len(),
        };
        info!(
            dim_series = summary.dim_series,
            dim_date = summary.dim_date,
            facts = summary.facts,
            "replaced warehouse tables"
        );
        Ok(summary)
    }

    /// Number of rows currently in `table`.
    pub fn row_count(&self, table: &str) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM \"{}\"", table.replace('"', "\"\""));
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
