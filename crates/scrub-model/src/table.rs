#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::{Result, ScrubError};

/// A single cell of an ingested table.
///
/// Absent cells are an explicit `Missing` marker so they stay distinguishable
/// from present-but-empty strings after ingestion.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(cells: BTreeMap<String, CellValue>) -> Self {
        Self { cells }
    }

    /// Cell for a column; absent entries read as `Missing`.
    pub fn cell(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&CellValue::Missing)
    }

    pub fn set_cell(&mut self, column: &str, value: CellValue) {
        self.cells.insert(column.to_string(), value);
    }

    /// Number of missing cells across the whole row.
    pub fn missing_count(&self) -> usize {
        self.cells.values().filter(|cell| cell.is_missing()).count()
    }
}

/// An ordered sequence of rows sharing one column schema.
///
/// Rows are identified by position for the duration of a run only; position
/// is not a persisted identity.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Validate that every named column exists in the schema.
    ///
    /// Called before any row is processed; a missing column is fatal.
    pub fn require_columns(&self, names: &[&str]) -> Result<()> {
        for name in names {
            if !self.columns.iter().any(|column| column == name) {
                return Err(ScrubError::MissingColumn((*name).to_string()));
            }
        }
        Ok(())
    }

    /// Values of one column in row order.
    pub fn column_values(&self, column: &str) -> Vec<CellValue> {
        self.rows
            .iter()
            .map(|row| row.cell(column).clone())
            .collect()
    }
}
