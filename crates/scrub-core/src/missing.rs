//! Missing-value normalization for the target column.

use tracing::debug;

use scrub_model::{CellValue, Table};

use crate::distance::edit_distance;

/// The literal token survey takers use for "no value provided".
const MISSING_TOKEN: &str = "no";

/// Max distance from [`MISSING_TOKEN`] for a value to count as a missing
/// variant. Kept tight to avoid false positives on real short names.
const MISSING_TOKEN_DISTANCE: usize = 2;

/// True when a text value is a casing/typo variant of the "no" token.
pub fn is_missing_variant(value: &str) -> bool {
    edit_distance(&value.to_lowercase(), MISSING_TOKEN) <= MISSING_TOKEN_DISTANCE
}

/// Replace "no"-variant and non-text target cells with the missing marker.
///
/// Runs once before reference building, so the builder never sees these as
/// candidates. Non-text cells are treated as missing by policy, not as an
/// error. Returns the number of cells marked.
pub fn normalize_missing(table: &mut Table, target_column: &str) -> usize {
    let mut marked = 0usize;
    for row in &mut table.rows {
        let replace = match row.cell(target_column) {
            CellValue::Text(value) => is_missing_variant(value),
            CellValue::Number(_) => true,
            CellValue::Missing => false,
        };
        if replace {
            row.set_cell(target_column, CellValue::Missing);
            marked += 1;
        }
    }
    debug!(column = target_column, marked, "normalized missing values");
    marked
}

/// Fill residual missing target cells with the configured label.
///
/// Runs after autocorrection so only values with no recognized reference
/// remain. Returns the number of cells filled.
pub fn fill_missing_with_label(table: &mut Table, target_column: &str, label: &str) -> usize {
    let mut filled = 0usize;
    for row in &mut table.rows {
        if row.cell(target_column).is_missing() {
            row.set_cell(target_column, CellValue::Text(label.to_string()));
            filled += 1;
        }
    }
    filled
}
