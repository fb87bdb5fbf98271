//! PDF text extraction for docqa-rs
//!
//! This crate wraps the `pdf-extract` crate behind two surfaces:
//!
//! - [`extract_text`] - fallible extraction returning a typed error
//! - [`DocumentLoader`] - the soft-failure loader agents embed: any
//!   extraction failure is logged and converted to an empty string

pub mod error;
pub mod extractor;

pub use error::ExtractError;
pub use extractor::{DocumentLoader, extract_text};
