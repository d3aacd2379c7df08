//! The assistant pipeline: check input, build prompt, complete, normalise.

use std::sync::Arc;

use crate::completion::CompletionClient;
use crate::models::{ChatRequest, ChatResult, DiagnosisRequest, DiagnosisResult};
use crate::normalizer::{normalize_chat, normalize_diagnosis, Normalized};
use crate::prompts::{chat_messages, diagnosis_messages};
use crate::validation::InputWarnings;
use crate::AssistResult;

/// Runs diagnosis and chat requests through the completion pipeline.
///
/// Holds no per-request state; cloning shares the underlying completion client.
#[derive(Clone)]
pub struct AssistantService {
    client: Arc<dyn CompletionClient>,
}

impl AssistantService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Produce a differential diagnosis for `req`.
    ///
    /// # Errors
    /// Returns an upstream error if the completion call fails. Unusable model output is never an
    /// error; it yields the fallback result.
    pub async fn diagnose(&self, req: &DiagnosisRequest) -> AssistResult<DiagnosisResult> {
        req.warn_suspect_input();

        let messages = diagnosis_messages(req);
        let raw = self.client.complete(&messages).await?;

        let normalized = normalize_diagnosis(&raw, req);
        log_outcome("diagnose", &normalized);
        Ok(normalized.into_inner())
    }

    /// Produce a chat reply for `req`.
    ///
    /// # Errors
    /// As for [`AssistantService::diagnose`].
    pub async fn chat(&self, req: &ChatRequest) -> AssistResult<ChatResult> {
        req.warn_suspect_input();

        let messages = chat_messages(req);
        let raw = self.client.complete(&messages).await?;

        let normalized = normalize_chat(&raw);
        log_outcome("chat", &normalized);
        Ok(normalized.into_inner())
    }
}

fn log_outcome<T>(operation: &'static str, normalized: &Normalized<T>) {
    if normalized.is_fallback() {
        tracing::info!(operation, outcome = "fallback", "completion normalised");
    } else {
        tracing::info!(operation, outcome = "parsed", "completion normalised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompletionMessage, RiskLevel, Role};
    use crate::AssistError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Completion client that replays a canned reply and records what it was sent.
    struct CannedClient {
        reply: Result<String, ()>,
        seen: Mutex<Vec<Vec<CompletionMessage>>>,
    }

    impl CannedClient {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: Err(()),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionClient for CannedClient {
        async fn complete(&self, messages: &[CompletionMessage]) -> AssistResult<String> {
            self.seen.lock().unwrap().push(messages.to_vec());
            self.reply.clone().map_err(|_| AssistError::EmptyCompletion)
        }
    }

    fn diagnosis_request() -> DiagnosisRequest {
        DiagnosisRequest {
            symptoms: vec!["chest pain".into(), "shortness of breath".into()],
            patient_age: Some(61),
            patient_gender: Some("male".into()),
            medical_history: None,
        }
    }

    #[tokio::test]
    async fn diagnose_sends_one_two_message_conversation() {
        let client = CannedClient::replying("nope");
        let service = AssistantService::new(client.clone());

        let result = service.diagnose(&diagnosis_request()).await.expect("diagnose");
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.confidence_score, 30.0);

        let seen = client.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].len(), 2);
        assert_eq!(seen[0][0].role, Role::System);
        assert_eq!(seen[0][1].role, Role::User);
        assert!(seen[0][1].content.contains("Symptoms: chest pain, shortness of breath"));
    }

    #[tokio::test]
    async fn diagnose_returns_parsed_result() {
        let client = CannedClient::replying(
            r#"{"diagnoses": [{"name": "Angina", "probability": 64, "symptoms": ["chest pain"], "differentials": ["MI"]}],
                "risk_level": "Critical", "recommendations": ["Call emergency services"], "confidence_score": 70}"#,
        );
        let service = AssistantService::new(client);

        let result = service.diagnose(&diagnosis_request()).await.expect("diagnose");
        assert_eq!(result.diagnoses[0].name, "Angina");
        assert_eq!(result.risk_level, RiskLevel::Critical);
        assert_eq!(result.confidence_score, 70.0);
    }

    #[tokio::test]
    async fn upstream_failure_propagates() {
        let service = AssistantService::new(CannedClient::failing());
        let err = service
            .diagnose(&diagnosis_request())
            .await
            .expect_err("should fail");
        assert!(err.is_upstream());

        let chat = ChatRequest {
            message: "hello".into(),
            context: None,
        };
        assert!(service.chat(&chat).await.is_err());
    }

    #[tokio::test]
    async fn chat_falls_back_on_non_json() {
        let service = AssistantService::new(CannedClient::replying("not json at all"));
        let chat = ChatRequest {
            message: "I feel dizzy".into(),
            context: None,
        };

        let result = service.chat(&chat).await.expect("chat");
        assert_eq!(result.suggestions.len(), 3);
        assert_eq!(result.confidence, 40.0);
    }
}
