//! Integration tests for CSV table reading and writing.

use std::fs;

use scrub_model::CellValue;

use scrub_ingest::{read_csv_table, write_csv_table};

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn reads_headers_and_typed_cells() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(
        &dir,
        "input.csv",
        "nameKisan,guardianName,voName,age\nAsha,Ram,Jyoti SHG,34\nMina,,Unity Group,\n",
    );

    let table = read_csv_table(&path).expect("read table");
    assert_eq!(
        table.columns,
        vec!["nameKisan", "guardianName", "voName", "age"]
    );
    assert_eq!(table.rows.len(), 2);
    assert_eq!(
        table.rows[0].cell("voName"),
        &CellValue::Text("Jyoti SHG".to_string())
    );
    assert_eq!(table.rows[0].cell("age"), &CellValue::Number(34.0));
    assert!(table.rows[1].cell("guardianName").is_missing());
    assert!(table.rows[1].cell("age").is_missing());
}

#[test]
fn pads_short_records_and_skips_empty_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "ragged.csv", "a,b,c\n1,2\n,,\nx,y,z\n");

    let table = read_csv_table(&path).expect("read table");
    // The all-empty record is dropped, the short record is padded.
    assert_eq!(table.rows.len(), 2);
    assert!(table.rows[0].cell("c").is_missing());
    assert_eq!(table.rows[1].cell("c"), &CellValue::Text("z".to_string()));
}

#[test]
fn trims_bom_and_whitespace_from_headers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "bom.csv", "\u{feff} nameKisan , voName\nAsha,Jyoti SHG\n");

    let table = read_csv_table(&path).expect("read table");
    assert_eq!(table.columns, vec!["nameKisan", "voName"]);
}

#[test]
fn round_trips_through_write_and_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(
        &dir,
        "in.csv",
        "nameKisan,voName\nAsha,Jyoti SHG\nMina,\n",
    );
    let output = dir.path().join("out.csv");

    let table = read_csv_table(&input).expect("read table");
    write_csv_table(&table, &output).expect("write table");
    let round = read_csv_table(&output).expect("re-read table");

    assert_eq!(round.columns, table.columns);
    assert_eq!(round.rows.len(), table.rows.len());
    // Missing cells stay missing after a round trip.
    assert!(round.rows[1].cell("voName").is_missing());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.csv");
    assert!(read_csv_table(&path).is_err());
}
