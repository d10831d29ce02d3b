//! Canonical reference set construction.
//!
//! From the noisy, frequency-weighted list of target-column values this
//! derives a small set of reference spellings, one per real-world entity.
//! Reduction is a single order-dependent pass biased toward keeping the
//! most frequent spelling of each near-duplicate cluster; it is a cheap
//! heuristic, not full clustering, and relies on the frequency and distance
//! thresholds being tuned to the data's typo rate.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use scrub_model::CleanOptions;

use crate::distance::edit_distance;
use crate::text::strip_trailing_stop_word;

/// Occurrence count per distinct value over the full (duplicate-retaining)
/// value sequence.
pub fn occurrence_counts(values: &[String]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value.clone()).or_insert(0usize) += 1;
    }
    counts
}

/// Builds the canonical reference set for one run.
///
/// The set is built once from the full candidate list, reduced in a single
/// pass, and frozen before autocorrection begins.
#[derive(Debug)]
pub struct ReferenceBuilder<'a> {
    frequency_threshold: usize,
    distance_threshold: usize,
    stop_words: &'a BTreeSet<String>,
}

impl<'a> ReferenceBuilder<'a> {
    pub fn new(options: &CleanOptions, stop_words: &'a BTreeSet<String>) -> Self {
        Self {
            frequency_threshold: options.frequency_threshold,
            distance_threshold: options.reference_distance_threshold,
            stop_words,
        }
    }

    /// Derive the reference set from the non-missing target values.
    ///
    /// Every surviving reference occurred strictly more often than the
    /// frequency threshold, and no two survivors are within the reference
    /// distance threshold of each other. Survivors keep first-seen order.
    /// An empty result is a valid outcome, not an error.
    pub fn build(&self, values: &[String]) -> Vec<String> {
        let counts = occurrence_counts(values);

        let mut candidates: Vec<String> = Vec::new();
        for value in values {
            if counts[value] > self.frequency_threshold && !candidates.contains(value) {
                candidates.push(value.clone());
            }
        }
        let n = candidates.len();

        // Full symmetric pairwise distance matrix; self-distance 0.
        let mut matrix = vec![vec![0usize; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let distance = edit_distance(&candidates[i], &candidates[j]);
                matrix[i][j] = distance;
                matrix[j][i] = distance;
            }
        }

        // Single reduction pass. Iteration order (ascending j, then ascending
        // i < j) is load-bearing: it fixes which spelling survives a tie.
        let mut removed = vec![false; n];
        for j in 1..n {
            for i in 0..j {
                if removed[i] || removed[j] {
                    continue;
                }
                let a = &candidates[i];
                let b = &candidates[j];
                if matrix[i][j] <= self.distance_threshold {
                    self.remove_lower_count(
                        &mut removed,
                        i,
                        j,
                        count_of(&counts, a),
                        count_of(&counts, b),
                    );
                } else if let Some(stripped) = strip_trailing_stop_word(a, self.stop_words) {
                    if edit_distance(&stripped, b) <= self.distance_threshold {
                        // The stripped side is compared by the stripped
                        // form's count. Asymmetric with the other side, but
                        // kept for parity with established outputs.
                        self.remove_lower_count(
                            &mut removed,
                            i,
                            j,
                            count_of(&counts, &stripped),
                            count_of(&counts, b),
                        );
                    }
                } else if let Some(stripped) = strip_trailing_stop_word(b, self.stop_words) {
                    if edit_distance(a, &stripped) <= self.distance_threshold {
                        self.remove_lower_count(
                            &mut removed,
                            i,
                            j,
                            count_of(&counts, a),
                            count_of(&counts, &stripped),
                        );
                    }
                }
            }
        }

        let references: Vec<String> = candidates
            .into_iter()
            .zip(&removed)
            .filter(|(_, removed)| !**removed)
            .map(|(candidate, _)| candidate)
            .collect();
        debug!(
            candidates = n,
            references = references.len(),
            "reduced reference set"
        );
        references
    }

    /// Remove the lower-count side of a near-duplicate pair; ties remove the
    /// later candidate `j`.
    fn remove_lower_count(
        &self,
        removed: &mut [bool],
        i: usize,
        j: usize,
        count_i: usize,
        count_j: usize,
    ) {
        if count_i < count_j {
            removed[i] = true;
        } else {
            removed[j] = true;
        }
    }
}

fn count_of(counts: &BTreeMap<String, usize>, value: &str) -> usize {
    counts.get(value).copied().unwrap_or(0)
}
