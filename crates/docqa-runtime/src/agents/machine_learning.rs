//! Machine learning agent implementation

use super::base::QaAgentBase;
use async_trait::async_trait;
use docqa_core::{Agent, Result};
use docqa_inference::QaProvider;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// An agent specialized in machine learning and deep learning documents
pub struct MachineLearningAgent {
    inner: QaAgentBase,
}

impl MachineLearningAgent {
    /// Construct the agent, loading its model and tokenizer
    pub async fn bind(provider: Arc<dyn QaProvider>, model_id: &str) -> Result<Self> {
        info!("Loading machine learning model and tokenizer...");
        let inner = QaAgentBase::bind(provider, model_id).await?;
        info!("Machine learning model loaded");
        Ok(Self { inner })
    }
}

#[async_trait]
impl Agent for MachineLearningAgent {
    fn name(&self) -> &str {
        "MachineLearningAgent"
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }

    fn load_document(&self, path: &Path) -> String {
        self.inner.load_document(path)
    }

    async fn query(&self, context: &str, question: &str) -> Result<String> {
        debug!("Querying the machine learning model");
        self.inner.answer(context, question).await
    }

    async fn fine_tune(&mut self, training_data: &Path) -> Result<()> {
        // A real pipeline here would load the dataset, preprocess it into
        // QA spans, run a trainer against the bound model, and save the
        // tuned weights. None of that exists yet.
        info!(
            "Initiating fine-tuning for MachineLearningAgent with data from: {}",
            training_data.display()
        );
        self.inner.fine_tune_stub(self.name(), training_data)
    }
}
