//! PDF text extraction using the pdf-extract crate

use crate::ExtractError;
use std::path::Path;
use tracing::{debug, warn};

/// Extract the full text of a PDF file
///
/// Pages are walked in document order and their text concatenated. There is
/// no contract on layout or formatting fidelity - this is plain text for
/// question answering, not a rendering.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::FileNotFound(path.display().to_string()));
    }

    pdf_extract::extract_text(path).map_err(|e| ExtractError::Extraction {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Soft-failure document loader
///
/// Wraps [`extract_text`] with the loading contract agents rely on: any
/// failure is logged and converted to an empty string. Callers treat the
/// empty string as the single failure signal and do not distinguish causes.
#[derive(Debug, Clone, Default)]
pub struct DocumentLoader;

impl DocumentLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self
    }

    /// Load the text of the document at `path`, or an empty string on failure
    pub fn load(&self, path: &Path) -> String {
        debug!("Loading document: {}", path.display());

        match extract_text(path) {
            Ok(text) => {
                debug!(
                    "Document loaded: {} ({} chars)",
                    path.display(),
                    text.len()
                );
                text
            }
            Err(e) => {
                warn!("Error reading PDF {}: {}", path.display(), e);
                String::new()
            }
        }
    }
}
