//! Error types for docqa-core

use thiserror::Error;

/// Result type alias for docqa-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent operations
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// Model or tokenizer could not be resolved or loaded during
    /// agent construction
    #[error("Model load failed: {0}")]
    ModelLoadFailed(String),

    /// The question-answering call against the loaded model failed
    #[error("Query failed: {0}")]
    QueryFailed(String),
}
