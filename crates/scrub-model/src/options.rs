//! Configuration options for the cleaning pipeline.

use serde::{Deserialize, Serialize};

/// Minimum occurrence count for a value to qualify as a reference candidate.
pub const DEFAULT_FREQUENCY_THRESHOLD: usize = 2;

/// Maximum edit distance at which two candidates merge during reduction.
pub const DEFAULT_REFERENCE_DISTANCE_THRESHOLD: usize = 3;

/// Maximum edit distance at which an autocorrection match is accepted.
pub const DEFAULT_EDIT_DISTANCE_THRESHOLD: usize = 4;

/// Label filled into target cells that remain missing after autocorrection.
pub const DEFAULT_MISSING_VALUE_LABEL: &str = "no";

/// Options controlling the cleaning pipeline.
///
/// Thresholds are explicit configuration passed into each component at
/// construction, never ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanOptions {
    /// The free-text column to normalize and autocorrect.
    pub target_column: String,

    /// First identity column used for duplicate detection.
    pub identity_column_1: String,

    /// Second identity column used for duplicate detection.
    pub identity_column_2: String,

    /// Occurrence count a value must exceed to become a reference candidate.
    pub frequency_threshold: usize,

    /// Max distance to merge two candidates during reference reduction.
    pub reference_distance_threshold: usize,

    /// Max distance to accept an autocorrection match. Typically at least the
    /// reference distance threshold, since correction tolerance may be looser
    /// than reduction tolerance.
    pub edit_distance_threshold: usize,

    /// Label used to fill remaining missing target values.
    pub missing_value_label: String,
}

impl CleanOptions {
    pub fn new(
        target_column: impl Into<String>,
        identity_column_1: impl Into<String>,
        identity_column_2: impl Into<String>,
    ) -> Self {
        Self {
            target_column: target_column.into(),
            identity_column_1: identity_column_1.into(),
            identity_column_2: identity_column_2.into(),
            frequency_threshold: DEFAULT_FREQUENCY_THRESHOLD,
            reference_distance_threshold: DEFAULT_REFERENCE_DISTANCE_THRESHOLD,
            edit_distance_threshold: DEFAULT_EDIT_DISTANCE_THRESHOLD,
            missing_value_label: DEFAULT_MISSING_VALUE_LABEL.to_string(),
        }
    }

    #[must_use]
    pub fn with_frequency_threshold(mut self, threshold: usize) -> Self {
        self.frequency_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_reference_distance_threshold(mut self, threshold: usize) -> Self {
        self.reference_distance_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_edit_distance_threshold(mut self, threshold: usize) -> Self {
        self.edit_distance_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_missing_value_label(mut self, label: impl Into<String>) -> Self {
        self.missing_value_label = label.into();
        self
    }
}
