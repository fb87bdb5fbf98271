//! Error types for PDF extraction

use thiserror::Error;

/// Errors that can occur during PDF text extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file does not exist at the given path
    #[error("PDF file not found: {0}")]
    FileNotFound(String),

    /// The file could not be parsed as a PDF
    #[error("Failed to extract text from '{path}': {message}")]
    Extraction {
        /// Path of the offending file
        path: String,
        /// Message from the underlying extractor
        message: String,
    },
}
