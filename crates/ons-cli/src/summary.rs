use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ons_extract::ExtractReport;
use ons_model::SeriesKey;

use ons_cli::types::{LoadResult, RunResult, TransformResult};

pub fn print_series_catalog() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Series ID"),
        header_cell("Name"),
        header_cell("Unit"),
        header_cell("File prefix"),
    ]);
    apply_table_style(&mut table);
    for key in SeriesKey::ALL {
        let descriptor = key.descriptor();
        table.add_row(vec![
            key_cell(key),
            Cell::new(descriptor.series_id),
            Cell::new(descriptor.series_name),
            Cell::new(descriptor.unit),
            dim_cell(descriptor.file_prefix),
        ]);
    }
    println!("{table}");
}

pub fn print_extract_summary(report: &ExtractReport) {
    println!("Run timestamp: {}", report.timestamp);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Series"),
        header_cell("Status"),
        header_cell("Bytes"),
        header_cell("File / Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for series in &report.series {
        let row = match &series.outcome {
            Ok(file) => vec![
                key_cell(series.key),
                Cell::new("ok").fg(Color::Green).add_attribute(Attribute::Bold),
                Cell::new(file.bytes),
                Cell::new(file.path.display()),
            ],
            Err(error) => vec![
                key_cell(series.key),
                Cell::new("failed").fg(Color::Red).add_attribute(Attribute::Bold),
                dim_cell("-"),
                Cell::new(error).fg(Color::Red),
            ],
        };
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_transform_summary(result: &TransformResult) {
    println!("Output: {}", result.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Series"),
        header_cell("Raw file"),
        header_cell("Input rows"),
        header_cell("Records"),
        header_cell("Dropped"),
        header_cell("Gaps"),
    ]);
    apply_table_style(&mut table);
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for series in &result.series {
        table.add_row(vec![
            key_cell(series.key),
            Cell::new(file_name(&series.raw_file)),
            Cell::new(series.input_rows),
            Cell::new(series.records),
            count_cell(series.dropped, Color::Yellow),
            count_cell(series.month_gaps, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(result.records).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_load_summary(result: &LoadResult) {
    println!("Warehouse: {}", result.warehouse.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("dim_series"), Cell::new(result.summary.dim_series)]);
    table.add_row(vec![Cell::new("dim_date"), Cell::new(result.summary.dim_date)]);
    table.add_row(vec![
        Cell::new("fact_series_values"),
        Cell::new(result.summary.facts),
    ]);
    println!("{table}");
}

pub fn print_run_summary(result: &RunResult) {
    print_extract_summary(&result.extract);
    println!();
    print_transform_summary(&result.transform);
    println!();
    print_load_summary(&result.load);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn key_cell(key: SeriesKey) -> Cell {
    Cell::new(key.as_str())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
