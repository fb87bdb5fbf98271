//! Opaque model/tokenizer handles and the extractive answer type

use serde::{Deserialize, Serialize};

/// Opaque handle to a loaded question-answering model
///
/// Constructed by a [`crate::QaProvider`] during `load_model` and owned by
/// the agent for its whole lifetime. A handle that exists refers to a model
/// the provider successfully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelHandle {
    model_id: String,
    revision: String,
}

impl ModelHandle {
    /// Create a handle for a resolved model
    ///
    /// Providers call this once resolution has succeeded; handles are not
    /// meant to be built from unverified identifiers.
    pub fn new(model_id: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            revision: revision.into(),
        }
    }

    /// The model identifier this handle refers to
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// The resolved revision of the model
    pub fn revision(&self) -> &str {
        &self.revision
    }
}

/// Opaque handle to the tokenizer paired with a loaded model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerHandle {
    model_id: String,
    tokenizer_class: String,
}

impl TokenizerHandle {
    /// Create a handle for a resolved tokenizer
    pub fn new(model_id: impl Into<String>, tokenizer_class: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            tokenizer_class: tokenizer_class.into(),
        }
    }

    /// The model identifier this tokenizer belongs to
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// The tokenizer implementation class reported by the backend
    pub fn tokenizer_class(&self) -> &str {
        &self.tokenizer_class
    }
}

/// Answer returned by an extractive question-answering call
///
/// The answer is the most likely text span selected from the context;
/// `start`/`end` are character offsets of that span within the context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaAnswer {
    /// The selected answer span text
    pub answer: String,

    /// Model confidence for the span, in `[0, 1]`
    pub score: f32,

    /// Start offset of the span in the context
    pub start: usize,

    /// End offset of the span in the context
    pub end: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_expose_their_identifiers() {
        let model = ModelHandle::new("deepset/deberta-v3-large-squad2", "main");
        assert_eq!(model.model_id(), "deepset/deberta-v3-large-squad2");
        assert_eq!(model.revision(), "main");

        let tokenizer = TokenizerHandle::new("deepset/deberta-v3-large-squad2", "DebertaV2Tokenizer");
        assert_eq!(tokenizer.model_id(), model.model_id());
    }
}
