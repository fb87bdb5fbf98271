//! Shared implementation behind the specialized agents
//!
//! Every variant binds the same way - resolve model and tokenizer through
//! the provider at construction, hold the handles for the agent's lifetime -
//! and answers the same way. Variants differ only in which model identifier
//! they bind and in the questions routed to them.

use docqa_core::{Error, Result};
use docqa_extract::DocumentLoader;
use docqa_inference::{ModelHandle, QaProvider, TokenizerHandle};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Model binding plus document loading shared by all agent variants
pub(crate) struct QaAgentBase {
    provider: Arc<dyn QaProvider>,
    model: ModelHandle,
    tokenizer: TokenizerHandle,
    model_name: String,
    loader: DocumentLoader,
}

impl QaAgentBase {
    /// Bind a model through the provider
    ///
    /// Load failure propagates - there is no agent without bound handles.
    pub(crate) async fn bind(provider: Arc<dyn QaProvider>, model_id: &str) -> Result<Self> {
        info!("Initializing agent with base model: {model_id}");

        let (model, tokenizer) = provider
            .load_model(model_id)
            .await
            .map_err(|e| Error::ModelLoadFailed(e.to_string()))?;

        Ok(Self {
            provider,
            model,
            tokenizer,
            model_name: model_id.to_string(),
            loader: DocumentLoader::new(),
        })
    }

    pub(crate) fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Soft-failure document load: empty string on any extraction error
    pub(crate) fn load_document(&self, path: &Path) -> String {
        self.loader.load(path)
    }

    /// Answer a question against the loaded model, returning the span text
    pub(crate) async fn answer(&self, context: &str, question: &str) -> Result<String> {
        let answer = self
            .provider
            .answer(&self.model, &self.tokenizer, context, question)
            .await
            .map_err(|e| Error::QueryFailed(e.to_string()))?;

        debug!(score = answer.score, "Answer span selected");
        Ok(answer.answer)
    }

    /// Shared fine-tuning stub: notify and do nothing
    pub(crate) fn fine_tune_stub(&self, agent: &str, training_data: &Path) -> Result<()> {
        warn!(
            agent,
            data = %training_data.display(),
            "fine-tuning is not yet implemented; nothing was trained"
        );
        Ok(())
    }
}
