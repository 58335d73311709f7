//! Shared utilities for the ONS pipeline crates.
//!
//! This crate provides common utilities used across the workspace,
//! including Polars DataFrame helpers.

pub mod polars;

pub use self::polars::{any_to_string, column_f64s, column_strings, format_numeric, parse_f64};
