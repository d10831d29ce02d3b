use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use scrub_model::{CellValue, Row, Table};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Classify a raw CSV cell.
///
/// Empty cells become `Missing` so they stay distinguishable from
/// present-but-empty strings; cells parsing as a number carry a numeric
/// value, matching the dtype the original spreadsheet source would have.
fn classify_cell(raw: &str) -> CellValue {
    let value = normalize_cell(raw);
    if value.is_empty() {
        return CellValue::Missing;
    }
    match value.parse::<f64>() {
        Ok(number) => CellValue::Number(number),
        Err(_) => CellValue::Text(value),
    }
}

/// Read a CSV file into a `Table`.
///
/// The first record is the header row. Short records are padded with
/// `Missing`; fully empty records are skipped.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record
            .with_context(|| format!("read header: {}", path.display()))?
            .iter()
            .map(normalize_header)
            .collect(),
        None => return Ok(Table::new(Vec::new())),
    };
    let mut table = Table::new(headers);
    for record in records {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut cells = BTreeMap::new();
        for (idx, header) in table.columns.iter().enumerate() {
            let raw = record.get(idx).unwrap_or("");
            cells.insert(header.clone(), classify_cell(raw));
        }
        table.push_row(Row::new(cells));
    }
    debug!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.rows.len(),
        "read csv table"
    );
    Ok(table)
}

fn render_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(value) => value.clone(),
        CellValue::Number(value) => format!("{value}"),
        CellValue::Missing => String::new(),
    }
}

/// Write a `Table` back to CSV, preserving column and row order.
///
/// Missing cells render as empty fields.
pub fn write_csv_table(table: &Table, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record(&table.columns)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| render_cell(row.cell(column)))
            .collect();
        writer
            .write_record(&record)
            .with_context(|| format!("write record: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}
