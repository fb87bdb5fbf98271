//! Hugging Face Inference API provider implementation
//!
//! This module implements the QaProvider trait against the hosted
//! question-answering pipeline. Model resolution goes through the hub API;
//! answering goes through the inference endpoint.
//! See: https://huggingface.co/docs/api-inference

use crate::{ModelHandle, QaAnswer, QaError, QaProvider, Result, TokenizerHandle};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const HF_HUB_API_BASE: &str = "https://huggingface.co/api";
const HF_INFERENCE_API_BASE: &str = "https://api-inference.huggingface.co/models";

/// Tokenizer class assumed when the hub metadata does not report one
const DEFAULT_TOKENIZER_CLASS: &str = "PreTrainedTokenizerFast";

/// Hugging Face Inference API provider
///
/// Works with any hub model exposing the `question-answering` pipeline,
/// for example:
/// - deepset/deberta-v3-large-squad2
/// - deepset/roberta-base-squad2
/// - distilbert/distilbert-base-cased-distilled-squad
pub struct HfInferenceProvider {
    client: Client,
    api_token: Option<String>,
    hub_base: String,
    inference_base: String,
}

impl HfInferenceProvider {
    /// Create a new Hugging Face provider
    ///
    /// # Arguments
    ///
    /// * `api_token` - Optional API token; anonymous access works for
    ///   public models at a lower rate limit
    pub fn new(api_token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            api_token,
            hub_base: HF_HUB_API_BASE.to_string(),
            inference_base: HF_INFERENCE_API_BASE.to_string(),
        })
    }

    /// Create a provider from the environment
    ///
    /// Reads the token from the `HF_API_TOKEN` environment variable when
    /// set; otherwise the provider runs anonymously.
    pub fn from_env() -> Result<Self> {
        Self::new(std::env::var("HF_API_TOKEN").ok())
    }

    /// Override the API endpoints (used against local stand-ins in tests)
    pub fn with_endpoints(
        mut self,
        hub_base: impl Into<String>,
        inference_base: impl Into<String>,
    ) -> Self {
        self.hub_base = hub_base.into();
        self.inference_base = inference_base.into();
        self
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl QaProvider for HfInferenceProvider {
    #[instrument(skip(self))]
    async fn load_model(&self, model_id: &str) -> Result<(ModelHandle, TokenizerHandle)> {
        debug!("Resolving model on the hub");

        let response = self
            .authorize(self.client.get(format!("{}/models/{model_id}", self.hub_base)))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(match status.as_u16() {
                401 => QaError::AuthenticationFailed,
                404 => QaError::ModelNotFound(model_id.to_string()),
                429 => QaError::RateLimitExceeded(error_text),
                _ => QaError::RequestFailed(format!("HTTP {status}: {error_text}")),
            });
        }

        let info: HubModelInfo = response
            .json()
            .await
            .map_err(|e| QaError::UnexpectedResponse(format!("Failed to parse model info: {e}")))?;

        if let Some(tag) = &info.pipeline_tag {
            if tag != "question-answering" {
                debug!("Model pipeline tag is '{tag}', expected question-answering");
            }
        }

        let revision = info.sha.unwrap_or_else(|| "main".to_string());
        let tokenizer_class = info
            .config
            .and_then(|c| c.tokenizer_config)
            .and_then(|t| t.tokenizer_class)
            .unwrap_or_else(|| DEFAULT_TOKENIZER_CLASS.to_string());

        debug!("Model resolved at revision {revision}");

        Ok((
            ModelHandle::new(model_id, revision),
            TokenizerHandle::new(model_id, tokenizer_class),
        ))
    }

    #[instrument(skip(self, context, question), fields(model = %model.model_id()))]
    async fn answer(
        &self,
        model: &ModelHandle,
        tokenizer: &TokenizerHandle,
        context: &str,
        question: &str,
    ) -> Result<QaAnswer> {
        debug!("Sending question-answering request");

        let request = QaRequest {
            inputs: QaInputs { question, context },
        };

        let response = self
            .authorize(
                self.client
                    .post(format!("{}/{}", self.inference_base, model.model_id())),
            )
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(match status.as_u16() {
                401 => QaError::AuthenticationFailed,
                429 => QaError::RateLimitExceeded(error_text),
                400 => QaError::InvalidRequest(error_text),
                404 => QaError::ModelNotFound(model.model_id().to_string()),
                503 => QaError::ModelLoading(model.model_id().to_string()),
                _ => QaError::RequestFailed(format!("HTTP {status}: {error_text}")),
            });
        }

        let qa_response: QaResponse = response
            .json()
            .await
            .map_err(|e| QaError::UnexpectedResponse(format!("Failed to parse answer: {e}")))?;

        debug!(
            "Received answer span [{}, {}) with score {:.3} via {}",
            qa_response.start,
            qa_response.end,
            qa_response.score,
            tokenizer.tokenizer_class(),
        );

        Ok(QaAnswer {
            answer: qa_response.answer,
            score: qa_response.score,
            start: qa_response.start,
            end: qa_response.end,
        })
    }

    fn name(&self) -> &'static str {
        "hf-inference"
    }
}

// Hugging Face wire types
// These match the hub / inference API formats exactly

#[derive(Debug, Serialize)]
struct QaRequest<'a> {
    inputs: QaInputs<'a>,
}

#[derive(Debug, Serialize)]
struct QaInputs<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Debug, Deserialize)]
struct QaResponse {
    answer: String,
    score: f32,
    start: usize,
    end: usize,
}

#[derive(Debug, Deserialize)]
struct HubModelInfo {
    sha: Option<String>,
    pipeline_tag: Option<String>,
    config: Option<HubModelConfig>,
}

#[derive(Debug, Deserialize)]
struct HubModelConfig {
    tokenizer_config: Option<HubTokenizerConfig>,
}

#[derive(Debug, Deserialize)]
struct HubTokenizerConfig {
    tokenizer_class: Option<String>,
}
