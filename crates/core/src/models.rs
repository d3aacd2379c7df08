//! Wire and domain types for the assistant pipeline.
//!
//! Every type here is a per-request value: constructed when a request arrives and dropped once
//! the response is written. Request types are decoded from the inbound JSON body; result types
//! are decoded from model output by the normaliser and serialised back to the caller unchanged.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Symptoms and optional patient metadata submitted for differential diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosisRequest {
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub patient_age: Option<i64>,
    #[serde(default)]
    pub patient_gender: Option<String>,
    #[serde(default)]
    pub medical_history: Option<Vec<String>>,
}

/// A single candidate condition in a differential diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Diagnosis {
    pub name: String,
    /// Likelihood as a percentage. Model-supplied values are not range-checked, and integers
    /// stay integers on the way back out.
    #[schema(value_type = f64)]
    pub probability: serde_json::Number,
    pub symptoms: Vec<String>,
    pub differentials: Vec<String>,
}

/// Overall risk classification of a diagnosis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Structured differential diagnosis returned by `/api/diagnose`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosisResult {
    pub diagnoses: Vec<Diagnosis>,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub confidence_score: f64,
}

/// A free-text chat message with optional conversational context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: Option<String>,
}

/// Structured chat reply returned by `/api/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatResult {
    pub response: String,
    pub suggestions: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One message of the conversation sent to the completion service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: Role,
    pub content: String,
}

impl CompletionMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnosis_request_optional_fields_default_to_none() {
        let req: DiagnosisRequest =
            serde_json::from_str(r#"{"symptoms": ["fever"]}"#).expect("decode");
        assert_eq!(req.symptoms, vec!["fever".to_string()]);
        assert_eq!(req.patient_age, None);
        assert_eq!(req.patient_gender, None);
        assert_eq!(req.medical_history, None);
    }

    #[test]
    fn diagnosis_request_requires_symptoms() {
        let err = serde_json::from_str::<DiagnosisRequest>(r#"{"patient_age": 40}"#)
            .expect_err("should reject");
        assert!(err.to_string().contains("symptoms"));
    }

    #[test]
    fn diagnosis_request_rejects_wrong_types() {
        assert!(serde_json::from_str::<DiagnosisRequest>(r#"{"symptoms": "fever"}"#).is_err());
        assert!(serde_json::from_str::<DiagnosisRequest>(
            r#"{"symptoms": ["fever"], "patient_age": "forty"}"#
        )
        .is_err());
    }

    #[test]
    fn chat_request_requires_message() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"context": "follow-up"}"#).is_err());
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hi", "context": null}"#)
            .expect("decode");
        assert_eq!(req.context, None);
    }

    #[test]
    fn risk_level_accepts_only_known_levels() {
        let level: RiskLevel = serde_json::from_str(r#""Critical""#).expect("decode");
        assert_eq!(level, RiskLevel::Critical);
        assert_eq!(serde_json::to_string(&level).unwrap(), r#""Critical""#);
        assert!(serde_json::from_str::<RiskLevel>(r#""Moderate""#).is_err());
        assert!(serde_json::from_str::<RiskLevel>(r#""critical""#).is_err());
    }

    #[test]
    fn diagnosis_probability_keeps_integer_form() {
        let raw = r#"{"name": "Flu", "probability": 85, "symptoms": [], "differentials": []}"#;
        let diagnosis: Diagnosis = serde_json::from_str(raw).expect("decode");
        let wire = serde_json::to_value(&diagnosis).unwrap();
        assert_eq!(wire["probability"], serde_json::json!(85));
        assert!(!wire.to_string().contains("85.0"));

        let fractional: Diagnosis =
            serde_json::from_str(&raw.replace("85", "72.5")).expect("decode");
        assert_eq!(fractional.probability.as_f64(), Some(72.5));
    }

    #[test]
    fn completion_message_serialises_lowercase_role() {
        let msg = CompletionMessage::system("be terse");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({"role": "system", "content": "be terse"}));
    }
}
