//! Error types for dispatching

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole dispatch run
///
/// Everything else - model load failures, extraction failures, unmatched
/// filenames - is isolated per document and reported as an outcome, never
/// as an error from `Dispatcher::run`.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The configured data directory does not exist
    #[error("Data directory '{}' not found", .0.display())]
    DataDirMissing(PathBuf),

    /// The data directory exists but could not be read
    #[error("Failed to read data directory '{}': {source}", .path.display())]
    ReadDir {
        /// The directory that failed to enumerate
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
