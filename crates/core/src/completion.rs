//! Chat completion client.
//!
//! [`CompletionClient`] is the seam between the pipeline and the upstream model. The production
//! implementation, [`GroqClient`], posts an OpenAI-compatible chat completions request with a
//! fixed temperature and token budget and returns the first choice's text untouched.
//!
//! There is no retry, backoff or explicit timeout: a failed call is reported once and surfaced to
//! the caller as an upstream error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AssistantConfig;
use crate::constants::{COMPLETION_MAX_TOKENS, COMPLETION_TEMPERATURE};
use crate::models::CompletionMessage;
use crate::{AssistError, AssistResult};

/// A backend that turns a conversation into the model's raw reply text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `messages` to the model and return the text of the first completion.
    ///
    /// # Errors
    /// Returns an upstream error (see [`AssistError::is_upstream`]) on transport failure,
    /// non-success HTTP status, or a response without any completion.
    async fn complete(&self, messages: &[CompletionMessage]) -> AssistResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [CompletionMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Completion client for Groq's OpenAI-compatible chat completions endpoint.
#[derive(Clone, Debug)]
pub struct GroqClient {
    http: reqwest::Client,
    config: AssistantConfig,
}

impl GroqClient {
    /// Create a client for the endpoint, model and credential in `config`.
    ///
    /// # Errors
    /// Returns `AssistError::HttpClientBuild` if the TLS backend cannot be initialised.
    pub fn new(config: AssistantConfig) -> AssistResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(AssistError::HttpClientBuild)?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, messages: &[CompletionMessage]) -> AssistResult<String> {
        let body = ChatCompletionRequest {
            model: self.config.model(),
            messages,
            temperature: COMPLETION_TEMPERATURE,
            max_tokens: COMPLETION_MAX_TOKENS,
        };

        tracing::debug!(
            model = self.config.model(),
            messages = messages.len(),
            "sending completion request"
        );

        let response = self
            .http
            .post(self.config.completion_url())
            .bearer_auth(self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(AssistError::CompletionTransport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistError::CompletionStatus { status, body });
        }

        let envelope: ChatCompletionResponse = response
            .json()
            .await
            .map_err(AssistError::CompletionDecode)?;

        envelope
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(AssistError::EmptyCompletion)
    }
}
