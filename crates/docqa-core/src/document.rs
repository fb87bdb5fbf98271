//! Document and query result value types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A document known to the dispatcher
///
/// The path is known at dispatch time; the text is populated by the
/// selected agent's `load_document` and discarded once the query for this
/// document completes. Text is never cached across documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Path to the source file
    pub path: PathBuf,

    /// Extracted text content; empty when extraction has not run or failed
    pub text: String,
}

impl Document {
    /// Create a document with a known path and no extracted text yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            text: String::new(),
        }
    }

    /// The file name component of the path, if any
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// Borrow the path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The outcome of a single answered query
///
/// Ephemeral - produced for reporting and dropped with the run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The answer text returned by the model
    pub answer: String,

    /// Wall-clock time the query took
    pub elapsed: Duration,
}
