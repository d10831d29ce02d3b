//! CLI library components for Registry Scrub.

pub mod logging;
pub mod pipeline;
