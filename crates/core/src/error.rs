#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("GROQ_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(reqwest::Error),
    #[error("completion request failed: {0}")]
    CompletionTransport(reqwest::Error),
    #[error("completion service returned HTTP {status}: {body}")]
    CompletionStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to decode completion envelope: {0}")]
    CompletionDecode(reqwest::Error),
    #[error("completion response contained no choices")]
    EmptyCompletion,
}

impl AssistError {
    /// Returns true for failures caused by the upstream completion service.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AssistError::CompletionTransport(_)
                | AssistError::CompletionStatus { .. }
                | AssistError::CompletionDecode(_)
                | AssistError::EmptyCompletion
        )
    }
}

pub type AssistResult<T> = std::result::Result<T, AssistError>;
