use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Load a stop-word list: one token per line, lowercased, blank lines
/// skipped. Trailing line terminators are stripped.
pub fn load_stop_words(path: &Path) -> Result<BTreeSet<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read stop words: {}", path.display()))?;
    let words: BTreeSet<String> = contents
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect();
    debug!(path = %path.display(), count = words.len(), "loaded stop words");
    Ok(words)
}
