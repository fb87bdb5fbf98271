//! Cybersecurity agent implementation

use super::base::QaAgentBase;
use async_trait::async_trait;
use docqa_core::{Agent, Result};
use docqa_inference::QaProvider;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// An agent specialized in security reports and threat analyses
pub struct CybersecurityAgent {
    inner: QaAgentBase,
}

impl CybersecurityAgent {
    /// Construct the agent, loading its model and tokenizer
    pub async fn bind(provider: Arc<dyn QaProvider>, model_id: &str) -> Result<Self> {
        info!("Loading cybersecurity model and tokenizer...");
        let inner = QaAgentBase::bind(provider, model_id).await?;
        info!("Cybersecurity model loaded");
        Ok(Self { inner })
    }
}

#[async_trait]
impl Agent for CybersecurityAgent {
    fn name(&self) -> &str {
        "CybersecurityAgent"
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }

    fn load_document(&self, path: &Path) -> String {
        self.inner.load_document(path)
    }

    async fn query(&self, context: &str, question: &str) -> Result<String> {
        debug!("Querying the cybersecurity model");
        self.inner.answer(context, question).await
    }

    async fn fine_tune(&mut self, training_data: &Path) -> Result<()> {
        info!(
            "Initiating fine-tuning for CybersecurityAgent with data from: {}",
            training_data.display()
        );
        self.inner.fine_tune_stub(self.name(), training_data)
    }
}
