//! Tests for the stop-word list loader.

use std::fs;

use scrub_ingest::load_stop_words;

#[test]
fn loads_lowercased_tokens_one_per_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("stop_words.txt");
    fs::write(&path, "VO\nshg\nGroup\n\nsamity\n").expect("write fixture");

    let words = load_stop_words(&path).expect("load stop words");
    assert_eq!(words.len(), 4);
    assert!(words.contains("vo"));
    assert!(words.contains("shg"));
    assert!(words.contains("group"));
    assert!(words.contains("samity"));
}

#[test]
fn strips_carriage_returns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("stop_words.txt");
    fs::write(&path, "vo\r\nshg\r\n").expect("write fixture");

    let words = load_stop_words(&path).expect("load stop words");
    assert!(words.contains("vo"));
    assert!(words.contains("shg"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(load_stop_words(&dir.path().join("absent.txt")).is_err());
}
