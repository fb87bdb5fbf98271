//! Question-answering inference abstraction for docqa-rs
//!
//! This crate defines the invocation contract against an external
//! extractive question-answering engine. It includes:
//!
//! - Opaque handles for a loaded model and its tokenizer
//! - The answer type returned by extractive QA (span text plus score)
//! - The `QaProvider` trait implemented by inference backends
//! - A concrete Hugging Face Inference API provider (behind the `hf` feature)
//!
//! The inference algorithm itself is out of scope - this crate only defines
//! how a model is resolved and how a (context, question) pair is answered.

pub mod error;
pub mod model;
pub mod provider;

// Re-export main types
pub use error::{QaError, Result};
pub use model::{ModelHandle, QaAnswer, TokenizerHandle};
pub use provider::QaProvider;

// Provider implementations (feature-gated)
#[cfg(feature = "hf")]
pub mod providers;
