//! Data science agent implementation

use super::base::QaAgentBase;
use async_trait::async_trait;
use docqa_core::{Agent, Result};
use docqa_inference::QaProvider;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// An agent specialized in data science and data engineering documents
pub struct DataScienceAgent {
    inner: QaAgentBase,
}

impl DataScienceAgent {
    /// Construct the agent, loading its model and tokenizer
    pub async fn bind(provider: Arc<dyn QaProvider>, model_id: &str) -> Result<Self> {
        info!("Loading data science model and tokenizer...");
        let inner = QaAgentBase::bind(provider, model_id).await?;
        info!("Data science model loaded");
        Ok(Self { inner })
    }
}

#[async_trait]
impl Agent for DataScienceAgent {
    fn name(&self) -> &str {
        "DataScienceAgent"
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }

    fn load_document(&self, path: &Path) -> String {
        self.inner.load_document(path)
    }

    async fn query(&self, context: &str, question: &str) -> Result<String> {
        debug!("Querying the data science model");
        self.inner.answer(context, question).await
    }

    async fn fine_tune(&mut self, training_data: &Path) -> Result<()> {
        // Future: train on annotated analytics reports so answers prefer
        // methodology sections over abstracts.
        info!(
            "Initiating fine-tuning for DataScienceAgent with data from: {}",
            training_data.display()
        );
        self.inner.fine_tune_stub(self.name(), training_data)
    }
}
