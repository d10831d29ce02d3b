//! Fuzzy-matching core for registry scrubbing.

pub mod autocorrect;
pub mod dedupe;
pub mod distance;
pub mod missing;
pub mod pipeline;
pub mod references;
pub mod text;

pub use autocorrect::Autocorrector;
pub use dedupe::{IdentityKey, dedupe_rows};
pub use distance::edit_distance;
pub use missing::{fill_missing_with_label, is_missing_variant, normalize_missing};
pub use pipeline::{CleanOutcome, CleanSummary, build_references, clean_table};
pub use references::{ReferenceBuilder, occurrence_counts};
pub use text::strip_trailing_stop_word;
