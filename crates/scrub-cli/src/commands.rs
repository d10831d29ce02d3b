use anyhow::{Context, Result};
use tracing::info_span;

use scrub_core::{build_references, clean_table};
use scrub_model::CleanOptions;

use crate::cli::{CleanArgs, ReferencesArgs};
use crate::pipeline::{default_output_path, load, write_output};
use crate::summary::print_references;
use crate::types::CleanResult;

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();

    let options = CleanOptions::new(
        &args.target_column,
        &args.identity_column_1,
        &args.identity_column_2,
    )
    .with_frequency_threshold(args.frequency_threshold)
    .with_reference_distance_threshold(args.reference_distance_threshold)
    .with_edit_distance_threshold(args.edit_distance_threshold)
    .with_missing_value_label(&args.missing_label);

    let loaded = load(&args.input, args.stop_words.as_deref())?;
    let outcome =
        clean_table(loaded.table, &options, &loaded.stop_words).context("clean table")?;

    let output = if args.dry_run {
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        write_output(&outcome.table, &path)?;
        Some(path)
    };

    Ok(CleanResult {
        input: args.input.clone(),
        output,
        summary: outcome.summary,
    })
}

pub fn run_references(args: &ReferencesArgs) -> Result<()> {
    // Identity columns are irrelevant here; only the target column is read.
    let options = CleanOptions::new(&args.target_column, "", "")
        .with_frequency_threshold(args.frequency_threshold)
        .with_reference_distance_threshold(args.reference_distance_threshold);

    let loaded = load(&args.input, args.stop_words.as_deref())?;
    let references = build_references(&loaded.table, &options, &loaded.stop_words)
        .context("build references")?;
    print_references(&references);
    Ok(())
}
