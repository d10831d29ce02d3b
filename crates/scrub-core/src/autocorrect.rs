//! Autocorrection of target values against the frozen reference set.

use std::collections::BTreeSet;

use tracing::debug;

use scrub_model::{CellValue, CleanOptions, Table};

use crate::distance::edit_distance;
use crate::text::strip_trailing_stop_word;

/// Maps noisy values onto the nearest reference within tolerance.
///
/// Scans references in set order and takes the first match rather than the
/// globally closest one; set order therefore decides between references at
/// equal distance.
#[derive(Debug)]
pub struct Autocorrector<'a> {
    references: &'a [String],
    distance_threshold: usize,
    stop_words: &'a BTreeSet<String>,
}

impl<'a> Autocorrector<'a> {
    pub fn new(
        references: &'a [String],
        options: &CleanOptions,
        stop_words: &'a BTreeSet<String>,
    ) -> Self {
        Self {
            references,
            distance_threshold: options.edit_distance_threshold,
            stop_words,
        }
    }

    /// The reference spelling for `value`, if any is within tolerance.
    ///
    /// Tries the raw value first, then a stop-word-trimmed variant.
    /// Comparison is case-insensitive on both sides.
    pub fn correct(&self, value: &str) -> Option<&'a str> {
        if let Some(reference) = self.first_match(value) {
            return Some(reference);
        }
        let stripped = strip_trailing_stop_word(value, self.stop_words)?;
        self.first_match(&stripped)
    }

    fn first_match(&self, value: &str) -> Option<&'a str> {
        let lowered = value.to_lowercase();
        self.references
            .iter()
            .find(|reference| {
                edit_distance(&lowered, &reference.to_lowercase()) <= self.distance_threshold
            })
            .map(String::as_str)
    }

    /// Rewrite the target column in place.
    ///
    /// Missing cells are skipped; values with no matching reference are left
    /// unchanged. Returns the number of cells whose value actually changed.
    pub fn correct_column(&self, table: &mut Table, target_column: &str) -> usize {
        let mut corrected = 0usize;
        for row in &mut table.rows {
            let Some(value) = row.cell(target_column).as_text().map(str::to_string) else {
                continue;
            };
            if let Some(reference) = self.correct(&value) {
                if reference != value {
                    row.set_cell(target_column, CellValue::Text(reference.to_string()));
                    corrected += 1;
                }
            }
        }
        debug!(column = target_column, corrected, "autocorrected column");
        corrected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    fn options(threshold: usize) -> CleanOptions {
        CleanOptions::new("voName", "nameKisan", "guardianName")
            .with_edit_distance_threshold(threshold)
    }

    #[test]
    fn value_within_tolerance_takes_reference_spelling() {
        let references = strings(&["Jyoti SHG"]);
        let stop_words = BTreeSet::new();
        let options = options(2);
        let corrector = Autocorrector::new(&references, &options, &stop_words);
        assert_eq!(corrector.correct("Joyti SHG"), Some("Jyoti SHG"));
        assert_eq!(corrector.correct("jyoti shg"), Some("Jyoti SHG"));
    }

    #[test]
    fn value_beyond_tolerance_is_unmatched() {
        let references = strings(&["Jyoti SHG"]);
        let stop_words = BTreeSet::new();
        let options = options(2);
        let corrector = Autocorrector::new(&references, &options, &stop_words);
        assert_eq!(corrector.correct("Unity Group"), None);
    }

    #[test]
    fn first_match_wins_over_closer_later_reference() {
        // "Jyotii" is distance 1 from "Jyoti" but "Jyotx" already matches
        // at distance 2; set order decides.
        let references = strings(&["Jyotx", "Jyoti"]);
        let stop_words = BTreeSet::new();
        let options = options(2);
        let corrector = Autocorrector::new(&references, &options, &stop_words);
        assert_eq!(corrector.correct("Jyotii"), Some("Jyotx"));
    }

    #[test]
    fn stop_word_trimmed_variant_is_retried() {
        let references = strings(&["Jyoti"]);
        let stop_words: BTreeSet<String> = ["samity".to_string()].into_iter().collect();
        let options = options(1);
        let corrector = Autocorrector::new(&references, &options, &stop_words);
        // Raw value is too far; stripping the trailing stop word rescues it.
        assert_eq!(corrector.correct("Joyti samity"), Some("Jyoti"));
    }

    #[test]
    fn correcting_a_reference_is_idempotent() {
        let references = strings(&["Jyoti SHG", "Unity Group"]);
        let stop_words = BTreeSet::new();
        let options = options(4);
        let corrector = Autocorrector::new(&references, &options, &stop_words);
        for reference in &references {
            assert_eq!(corrector.correct(reference), Some(reference.as_str()));
        }
    }
}
