use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::types::CleanResult;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn count_cell(value: usize) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }

    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec!["Stage", "Count"]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Rows in"), count_cell(summary.rows_in)]);
    table.add_row(vec![
        Cell::new("Marked missing"),
        count_cell(summary.cells_marked_missing),
    ]);
    table.add_row(vec![
        Cell::new("References"),
        count_cell(summary.references.len()),
    ]);
    table.add_row(vec![
        Cell::new("Corrected"),
        count_cell(summary.cells_corrected),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(summary.duplicates_removed),
    ]);
    table.add_row(vec![Cell::new("Rows out"), count_cell(summary.rows_out)]);
    println!("{table}");
}

pub fn print_references(references: &[(String, usize)]) {
    let mut table = Table::new();
    table.set_header(vec!["Reference", "Count"]);
    apply_table_style(&mut table);
    for (reference, count) in references {
        table.add_row(vec![Cell::new(reference), count_cell(*count)]);
    }
    println!("{table}");
}
