use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrubError {
    #[error("required column not found: {0}")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, ScrubError>;
