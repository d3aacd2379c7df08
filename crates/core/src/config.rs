//! Assistant runtime configuration.
//!
//! This module defines configuration that is resolved once at process startup and then passed
//! into the completion client. Nothing here reads process-wide environment variables; the binary
//! reads them and hands the raw values to the `*_from_env_value(s)` helpers, which keeps request
//! handling and tests independent of ambient state.

use crate::constants::{DEFAULT_BIND_ADDR, DEFAULT_COMPLETION_URL, DEFAULT_MODEL};
use crate::{AssistError, AssistResult};
use std::fmt;
use std::net::SocketAddr;

/// Configuration for the upstream completion service, resolved at startup.
#[derive(Clone)]
pub struct AssistantConfig {
    api_key: String,
    completion_url: String,
    model: String,
}

impl AssistantConfig {
    /// Create a new `AssistantConfig`.
    ///
    /// # Errors
    /// Returns `AssistError::MissingApiKey` if `api_key` is blank, and
    /// `AssistError::InvalidConfig` if the URL or model is blank or the URL is not HTTP(S).
    pub fn new(api_key: String, completion_url: String, model: String) -> AssistResult<Self> {
        if api_key.trim().is_empty() {
            return Err(AssistError::MissingApiKey);
        }

        if !(completion_url.starts_with("https://") || completion_url.starts_with("http://")) {
            return Err(AssistError::InvalidConfig(format!(
                "completion URL must be http(s): {completion_url}"
            )));
        }

        if model.trim().is_empty() {
            return Err(AssistError::InvalidConfig("model cannot be empty".into()));
        }

        Ok(Self {
            api_key,
            completion_url,
            model,
        })
    }

    /// Build the configuration from raw environment values.
    ///
    /// `api_key` is required; `completion_url` and `model` fall back to the Groq defaults when
    /// absent or blank.
    pub fn from_env_values(
        api_key: Option<String>,
        completion_url: Option<String>,
        model: Option<String>,
    ) -> AssistResult<Self> {
        let api_key = non_blank(api_key).ok_or(AssistError::MissingApiKey)?;
        let completion_url =
            non_blank(completion_url).unwrap_or_else(|| DEFAULT_COMPLETION_URL.into());
        let model = non_blank(model).unwrap_or_else(|| DEFAULT_MODEL.into());

        Self::new(api_key, completion_url, model)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn completion_url(&self) -> &str {
        &self.completion_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("api_key", &"<redacted>")
            .field("completion_url", &self.completion_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Parse the HTTP bind address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default `0.0.0.0:8000`.
pub fn bind_addr_from_env_value(value: Option<String>) -> AssistResult<SocketAddr> {
    let raw = non_blank(value).unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
    raw.parse()
        .map_err(|_| AssistError::InvalidConfig(format!("invalid bind address: {raw}")))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
