//! Runtime for constructing agents with dependency injection
//!
//! The QaRuntime owns the shared inference provider and the run
//! configuration, and provides the factory that turns a routed
//! `AgentVariant` into a constructed (model-loaded) agent.

use crate::agents::{CybersecurityAgent, DataScienceAgent, MachineLearningAgent};
use crate::rules::{AgentVariant, KeywordRule, default_rules};
use docqa_core::{Agent, Error, Result};
use docqa_inference::QaProvider;
use std::path::PathBuf;
use std::sync::Arc;

/// Model identifier used when the configuration does not override it
pub const DEFAULT_MODEL: &str = "deepset/deberta-v3-large-squad2";

/// Generic fallback question
///
/// Present in the configuration by design, but never asked: a document
/// matching no keyword rule is skipped instead of being assigned a default
/// agent, so nothing ever picks this question up.
pub const DEFAULT_QUESTION: &str = "What is the overall purpose of this document?";

/// Configuration for a dispatch run
///
/// All of this was ambient state in earlier iterations; it is now explicit
/// and passed into the runtime at construction.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Directory scanned for PDF documents
    pub data_dir: PathBuf,

    /// Model identifier every variant binds
    pub default_model: String,

    /// Ordered keyword routing table; order is authoritative
    pub rules: Vec<KeywordRule>,

    /// Fallback question for unmatched documents (kept, never asked)
    pub default_question: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            default_model: DEFAULT_MODEL.to_string(),
            rules: default_rules(),
            default_question: DEFAULT_QUESTION.to_string(),
        }
    }
}

/// Runtime owning the shared provider and configuration
///
/// One runtime serves a whole dispatch run, but each document still gets a
/// freshly constructed agent (and therefore a fresh model load) - there is
/// deliberately no cross-document model caching here.
pub struct QaRuntime {
    provider: Arc<dyn QaProvider>,
    config: RuntimeConfig,
}

impl QaRuntime {
    /// Create a new runtime
    pub fn new(provider: Arc<dyn QaProvider>, config: RuntimeConfig) -> Self {
        Self { provider, config }
    }

    /// Create a new runtime builder
    pub fn builder() -> QaRuntimeBuilder {
        QaRuntimeBuilder::new()
    }

    /// Get a reference to the inference provider
    pub fn provider(&self) -> &Arc<dyn QaProvider> {
        &self.provider
    }

    /// Get a reference to the runtime configuration
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Construct the agent for a routed variant
    ///
    /// Construction loads the model and tokenizer; failure propagates to
    /// the caller, which decides the catch boundary (the dispatcher
    /// isolates it per document).
    pub async fn create_agent(&self, variant: AgentVariant) -> Result<Box<dyn Agent>> {
        let model_id = &self.config.default_model;

        Ok(match variant {
            AgentVariant::MachineLearning => {
                Box::new(MachineLearningAgent::bind(self.provider.clone(), model_id).await?)
            }
            AgentVariant::DataScience => {
                Box::new(DataScienceAgent::bind(self.provider.clone(), model_id).await?)
            }
            AgentVariant::Cybersecurity => {
                Box::new(CybersecurityAgent::bind(self.provider.clone(), model_id).await?)
            }
        })
    }
}

/// Builder for QaRuntime
pub struct QaRuntimeBuilder {
    provider: Option<Arc<dyn QaProvider>>,
    config: RuntimeConfig,
}

impl QaRuntimeBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            provider: None,
            config: RuntimeConfig::default(),
        }
    }

    /// Set the inference provider (required)
    pub fn provider(mut self, provider: Arc<dyn QaProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the scanned data directory
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = dir.into();
        self
    }

    /// Override the model every variant binds
    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.config.default_model = model.into();
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<QaRuntime> {
        let provider = self
            .provider
            .ok_or_else(|| Error::Generic("QaRuntime requires a provider".to_string()))?;

        Ok(QaRuntime::new(provider, self.config))
    }
}

impl Default for QaRuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_the_fixed_conventions() {
        let config = RuntimeConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.default_model, DEFAULT_MODEL);
        assert_eq!(config.default_question, DEFAULT_QUESTION);
        assert_eq!(config.rules.len(), 5);
    }

    #[test]
    fn builder_without_provider_fails() {
        let result = QaRuntime::builder().build();
        assert!(result.is_err());
    }
}
