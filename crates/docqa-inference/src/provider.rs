//! QA provider trait definition

use crate::{ModelHandle, QaAnswer, Result, TokenizerHandle};
use async_trait::async_trait;

/// Trait for question-answering inference backends
///
/// Implementations of this trait provide access to an external extractive
/// QA engine (e.g. the Hugging Face Inference API, a local inference
/// server). Agents hold the handles returned by `load_model` and pass them
/// back for every `answer` call.
#[async_trait]
pub trait QaProvider: Send + Sync {
    /// Resolve and load a model and its tokenizer by identifier
    ///
    /// # Arguments
    ///
    /// * `model_id` - The backend-specific model identifier
    ///
    /// # Returns
    ///
    /// The bound model and tokenizer handles. Both are valid for the
    /// provider's lifetime; failure here means the model cannot be used.
    async fn load_model(&self, model_id: &str) -> Result<(ModelHandle, TokenizerHandle)>;

    /// Answer a question against a context using a loaded model
    ///
    /// # Arguments
    ///
    /// * `model` - Handle returned by `load_model`
    /// * `tokenizer` - Handle returned by `load_model`
    /// * `context` - The full document text to answer from
    /// * `question` - The question to answer
    async fn answer(
        &self,
        model: &ModelHandle,
        tokenizer: &TokenizerHandle,
        context: &str,
        question: &str,
    ) -> Result<QaAnswer>;

    /// Get the provider name (e.g., "hf-inference")
    fn name(&self) -> &str;
}
