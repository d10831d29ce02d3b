use std::path::PathBuf;

use scrub_core::CleanSummary;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    /// Written output path; `None` under --dry-run.
    pub output: Option<PathBuf>,
    pub summary: CleanSummary,
}
