//! Error handling for the job matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    /// Embedding vectors from different embedding spaces. Never reconciled
    /// by padding or truncation; the caller must fix its vectors.
    #[error("embedding dimensions don't match: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("pattern error: {0}")]
    Pattern(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MatcherError>;
