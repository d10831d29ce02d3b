//! Identity-based row deduplication.

use tracing::debug;

use scrub_model::{CellValue, CleanOptions, Row, Table};

/// One component of an identity key.
///
/// Numbers are keyed by their canonical rendering so the component stays
/// `Eq` without comparing floats directly.
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyCell {
    Text(String),
    Number(String),
    Missing,
}

impl KeyCell {
    fn of(cell: &CellValue) -> Self {
        match cell {
            CellValue::Text(value) => KeyCell::Text(value.clone()),
            CellValue::Number(value) => KeyCell::Number(value.to_string()),
            CellValue::Missing => KeyCell::Missing,
        }
    }
}

/// Composite identity key for a row: the two identity columns plus the
/// normalized target column.
///
/// Components are compared structurally, so `Text("1")`, `Number(1.0)` and
/// `Missing` never collide (no value a cell can hold forges equality with
/// another row), and two missing markers compare equal. Keys only need to
/// be comparable within a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityKey([KeyCell; 3]);

impl IdentityKey {
    pub fn of(row: &Row, options: &CleanOptions) -> Self {
        Self([
            KeyCell::of(row.cell(&options.identity_column_1)),
            KeyCell::of(row.cell(&options.identity_column_2)),
            KeyCell::of(row.cell(&options.target_column)),
        ])
    }
}

/// Collapse rows sharing an identity key, keeping the most complete row.
///
/// Rows are scanned in original order. On a key collision the row with
/// fewer missing cells across the entire row wins; the replacement moves to
/// the end of the kept list, so output order guarantees only that each
/// surviving row has a unique key. Ties keep the earlier row.
pub fn dedupe_rows(table: Table, options: &CleanOptions) -> Table {
    let mut kept: Vec<(usize, IdentityKey)> = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        let key = IdentityKey::of(row, options);
        match kept.iter().position(|(_, existing)| *existing == key) {
            Some(position) => {
                let (existing_index, _) = kept[position];
                if table.rows[existing_index].missing_count() > row.missing_count() {
                    kept.remove(position);
                    kept.push((index, key));
                }
            }
            None => kept.push((index, key)),
        }
    }

    let removed = table.rows.len() - kept.len();
    debug!(rows = table.rows.len(), removed, "deduplicated rows");

    let mut output = Table::new(table.columns.clone());
    for (index, _) in kept {
        output.push_row(table.rows[index].clone());
    }
    output
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn options() -> CleanOptions {
        CleanOptions::new("voName", "nameKisan", "guardianName")
    }

    fn row(name: &str, guardian: &str, vo: CellValue, extra: CellValue) -> Row {
        let mut cells = BTreeMap::new();
        cells.insert("nameKisan".to_string(), CellValue::Text(name.to_string()));
        cells.insert(
            "guardianName".to_string(),
            CellValue::Text(guardian.to_string()),
        );
        cells.insert("voName".to_string(), vo);
        cells.insert("phone".to_string(), extra);
        Row::new(cells)
    }

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn keeps_the_more_complete_duplicate() {
        let mut table = Table::new(vec![
            "nameKisan".to_string(),
            "guardianName".to_string(),
            "voName".to_string(),
            "phone".to_string(),
        ]);
        table.push_row(row("A", "B", text("Jyoti SHG"), CellValue::Missing));
        table.push_row(row("A", "B", text("Jyoti SHG"), text("12345")));

        let output = dedupe_rows(table, &options());
        assert_eq!(output.rows.len(), 1);
        assert_eq!(output.rows[0].cell("phone"), &text("12345"));
    }

    #[test]
    fn tie_keeps_the_earlier_row() {
        let mut table = Table::new(vec![
            "nameKisan".to_string(),
            "guardianName".to_string(),
            "voName".to_string(),
            "phone".to_string(),
        ]);
        table.push_row(row("A", "B", text("Jyoti SHG"), text("first")));
        table.push_row(row("A", "B", text("Jyoti SHG"), text("second")));

        let output = dedupe_rows(table, &options());
        assert_eq!(output.rows.len(), 1);
        assert_eq!(output.rows[0].cell("phone"), &text("first"));
    }

    #[test]
    fn differing_target_values_are_distinct_keys() {
        let mut table = Table::new(vec![
            "nameKisan".to_string(),
            "guardianName".to_string(),
            "voName".to_string(),
            "phone".to_string(),
        ]);
        table.push_row(row("A", "B", text("Jyoti SHG"), text("1")));
        table.push_row(row("A", "B", text("Unity Group"), text("2")));

        let output = dedupe_rows(table, &options());
        assert_eq!(output.rows.len(), 2);
    }

    #[test]
    fn missing_markers_compare_equal_but_not_to_text() {
        let mut table = Table::new(vec![
            "nameKisan".to_string(),
            "guardianName".to_string(),
            "voName".to_string(),
            "phone".to_string(),
        ]);
        table.push_row(row("A", "B", CellValue::Missing, text("1")));
        table.push_row(row("A", "B", CellValue::Missing, text("2")));
        table.push_row(row("A", "B", text("m"), text("3")));

        let output = dedupe_rows(table, &options());
        // The two missing-target rows collapse; the literal "m" stays apart.
        assert_eq!(output.rows.len(), 2);
    }

    #[test]
    fn control_characters_in_values_do_not_forge_key_equality() {
        // A text value spanning what a flat string encoding would use as a
        // component boundary must not equal the same bytes split across
        // neighboring key columns.
        let mut table = Table::new(vec![
            "nameKisan".to_string(),
            "guardianName".to_string(),
            "voName".to_string(),
            "phone".to_string(),
        ]);
        table.push_row(row("x\u{1f}ty", "a", text("b"), text("1")));
        table.push_row(row("x", "y", text("a\u{1f}tb"), text("2")));

        let output = dedupe_rows(table, &options());
        assert_eq!(output.rows.len(), 2);
    }

    #[test]
    fn number_and_text_cells_never_collide() {
        let mut table = Table::new(vec![
            "nameKisan".to_string(),
            "guardianName".to_string(),
            "voName".to_string(),
            "phone".to_string(),
        ]);
        let mut first = row("A", "B", text("Jyoti SHG"), text("1"));
        first.set_cell("nameKisan", CellValue::Number(1.0));
        let mut second = row("A", "B", text("Jyoti SHG"), text("2"));
        second.set_cell("nameKisan", text("1"));
        table.push_row(first);
        table.push_row(second);

        let output = dedupe_rows(table, &options());
        assert_eq!(output.rows.len(), 2);
    }
}
