//! Load / clean / write stages for the CLI.
//!
//! Validation failures (unreadable input, missing required columns) surface
//! before anything is written, so a failed run never leaves partial output.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use scrub_ingest::{load_stop_words, read_csv_table, write_csv_table};
use scrub_model::Table;

/// Loaded inputs for one run.
#[derive(Debug)]
pub struct LoadResult {
    pub table: Table,
    pub stop_words: BTreeSet<String>,
}

/// Read the input table and the optional stop-word list.
pub fn load(input: &Path, stop_words: Option<&Path>) -> Result<LoadResult> {
    let table = read_csv_table(input).context("load input table")?;
    let stop_words = match stop_words {
        Some(path) => load_stop_words(path).context("load stop words")?,
        None => BTreeSet::new(),
    };
    info!(
        rows = table.rows.len(),
        columns = table.columns.len(),
        stop_words = stop_words.len(),
        "loaded inputs"
    );
    Ok(LoadResult { table, stop_words })
}

/// Write the cleaned table.
pub fn write_output(table: &Table, path: &Path) -> Result<()> {
    write_csv_table(table, path).context("write output table")?;
    info!(path = %path.display(), rows = table.rows.len(), "wrote output");
    Ok(())
}

/// Default output path: `<stem>_unique.csv` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_unique.csv"))
}
