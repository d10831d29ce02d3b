//! The cleaning pipeline with explicit stages.
//!
//! Stages run in order over an in-memory table:
//! 1. **Normalize**: replace "no"-variant and non-text target cells with the
//!    missing marker
//! 2. **References**: build the canonical reference set from the remaining
//!    target values
//! 3. **Autocorrect**: rewrite target values to their nearest reference,
//!    then fill residual missing cells with the configured label
//! 4. **Dedupe**: collapse rows sharing an identity key
//!
//! The whole computation is a single-threaded, deterministic batch
//! transform; schema validation happens before any row is touched and no
//! partial output is ever produced.

use std::collections::BTreeSet;

use tracing::{info, info_span};

use scrub_model::{CellValue, CleanOptions, Result, Table};

use crate::autocorrect::Autocorrector;
use crate::dedupe::dedupe_rows;
use crate::missing::{fill_missing_with_label, is_missing_variant, normalize_missing};
use crate::references::{ReferenceBuilder, occurrence_counts};

/// Stage counters for reporting.
#[derive(Debug, Clone)]
pub struct CleanSummary {
    pub rows_in: usize,
    pub rows_out: usize,
    /// The frozen reference set, in the order autocorrection scanned it.
    pub references: Vec<String>,
    /// Target cells replaced by the missing marker.
    pub cells_marked_missing: usize,
    /// Target cells rewritten to a reference spelling.
    pub cells_corrected: usize,
    /// Rows dropped as duplicates of a more complete row.
    pub duplicates_removed: usize,
}

/// The cleaned table plus its run summary.
#[derive(Debug)]
pub struct CleanOutcome {
    pub table: Table,
    pub summary: CleanSummary,
}

fn required_columns(options: &CleanOptions) -> [&str; 3] {
    [
        options.target_column.as_str(),
        options.identity_column_1.as_str(),
        options.identity_column_2.as_str(),
    ]
}

fn non_missing_target_values(table: &Table, target_column: &str) -> Vec<String> {
    table
        .column_values(target_column)
        .into_iter()
        .filter_map(|cell| cell.as_text().map(str::to_string))
        .collect()
}

/// Run the full cleaning pipeline.
pub fn clean_table(
    mut table: Table,
    options: &CleanOptions,
    stop_words: &BTreeSet<String>,
) -> Result<CleanOutcome> {
    table.require_columns(&required_columns(options))?;

    let span = info_span!("clean", target = %options.target_column);
    let _guard = span.enter();
    let rows_in = table.rows.len();

    let cells_marked_missing = normalize_missing(&mut table, &options.target_column);

    let values = non_missing_target_values(&table, &options.target_column);
    let references = ReferenceBuilder::new(options, stop_words).build(&values);
    info!(
        values = values.len(),
        references = references.len(),
        "built reference set"
    );

    let corrector = Autocorrector::new(&references, options, stop_words);
    let cells_corrected = corrector.correct_column(&mut table, &options.target_column);
    let filled = fill_missing_with_label(
        &mut table,
        &options.target_column,
        &options.missing_value_label,
    );
    info!(corrected = cells_corrected, filled, "autocorrected target column");

    let table = dedupe_rows(table, options);
    let rows_out = table.rows.len();
    info!(rows_in, rows_out, "deduplicated table");

    Ok(CleanOutcome {
        table,
        summary: CleanSummary {
            rows_in,
            rows_out,
            references,
            cells_marked_missing,
            cells_corrected,
            duplicates_removed: rows_in - rows_out,
        },
    })
}

/// Derive the reference set and occurrence counts without rewriting rows.
///
/// Applies the same missing-value classification as the full pipeline so the
/// builder never sees "no"-variants as candidates.
pub fn build_references(
    table: &Table,
    options: &CleanOptions,
    stop_words: &BTreeSet<String>,
) -> Result<Vec<(String, usize)>> {
    table.require_columns(&[options.target_column.as_str()])?;

    let values: Vec<String> = table
        .rows
        .iter()
        .filter_map(|row| match row.cell(&options.target_column) {
            CellValue::Text(value) if !is_missing_variant(value) => Some(value.clone()),
            _ => None,
        })
        .collect();
    let counts = occurrence_counts(&values);
    let references = ReferenceBuilder::new(options, stop_words).build(&values);
    Ok(references
        .into_iter()
        .map(|reference| {
            let count = counts.get(&reference).copied().unwrap_or(0);
            (reference, count)
        })
        .collect())
}
