//! Core Agent trait definition

use crate::Result;
use async_trait::async_trait;
use std::path::Path;

/// Core trait that all document question-answering agents must implement
///
/// An agent is a bound pairing of one concrete question-answering model
/// (and its tokenizer) with the operations to load a document and answer a
/// question against its text. Construction of a concrete agent performs the
/// model load; an agent that exists is an agent whose model and tokenizer
/// handles are bound. There is no explicit teardown - resources are released
/// when the agent is dropped.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Get the agent's name (used in status reporting)
    fn name(&self) -> &str;

    /// Get the identifier of the model this agent is bound to
    fn model_name(&self) -> &str;

    /// Extract the full text of the document at `path`
    ///
    /// Pages are concatenated in document order. Any extraction failure
    /// (missing file, corrupt PDF, I/O error) is absorbed here and yields
    /// the empty string - callers must treat an empty result as the single
    /// failure signal and must not try to distinguish causes.
    fn load_document(&self, path: &Path) -> String;

    /// Answer `question` against the extracted document text in `context`
    ///
    /// No context-length limit is enforced at this layer; truncation or
    /// windowing, if any, belongs to the underlying model invocation.
    async fn query(&self, context: &str, question: &str) -> Result<String>;

    /// Fine-tune the underlying model on a dataset (stub)
    ///
    /// Today this is a documented placeholder across all agents: it logs
    /// that fine-tuning is not implemented and returns `Ok`. Concrete
    /// agents may override it with a real training pipeline later.
    async fn fine_tune(&mut self, training_data: &Path) -> Result<()> {
        tracing::warn!(
            agent = self.name(),
            data = %training_data.display(),
            "fine-tuning is not yet implemented; nothing was trained"
        );
        Ok(())
    }
}
