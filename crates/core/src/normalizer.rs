//! Response normalisation.
//!
//! Model output is untrusted text. The normaliser decodes it strictly into the typed result for
//! the request and checks the one shape rule serde cannot express (a chat reply must offer at
//! least one suggestion). Anything that fails is
//! replaced by a fixed, low-confidence fallback, so callers always receive a fully-populated,
//! schema-valid result.
//!
//! Numeric fields (probabilities, confidence) are passed through as the model supplied them.

use serde::de::DeserializeOwned;
use serde_json::Number;

use crate::models::{ChatResult, Diagnosis, DiagnosisRequest, DiagnosisResult, RiskLevel};

pub const FALLBACK_DIAGNOSIS_NAME: &str = "Symptom Analysis Required";
pub const FALLBACK_DIAGNOSIS_PROBABILITY: u64 = 50;
pub const FALLBACK_DIFFERENTIAL: &str = "Further evaluation needed";
pub const FALLBACK_RECOMMENDATION: &str =
    "Please consult with a healthcare provider for proper evaluation";
pub const FALLBACK_DIAGNOSIS_CONFIDENCE: f64 = 30.0;

pub const FALLBACK_CHAT_RESPONSE: &str = "I understand your question. To provide better assistance, could you provide more details about your symptoms?";
pub const FALLBACK_CHAT_SUGGESTIONS: [&str; 3] = [
    "What symptoms are you experiencing?",
    "How long have you had these symptoms?",
    "Have you had similar symptoms before?",
];
pub const FALLBACK_CHAT_CONFIDENCE: f64 = 40.0;

/// Outcome of normalising a model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized<T> {
    /// The reply decoded into a valid result.
    Parsed(T),
    /// The reply was unusable and the fixed fallback was substituted.
    Fallback(T),
}

impl<T> Normalized<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Normalized::Fallback(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Normalized::Parsed(value) | Normalized::Fallback(value) => value,
        }
    }
}

/// Normalise a diagnosis reply. The fallback echoes the request's symptoms.
pub fn normalize_diagnosis(raw: &str, req: &DiagnosisRequest) -> Normalized<DiagnosisResult> {
    match decode::<DiagnosisResult>(raw) {
        Ok(result) => Normalized::Parsed(result),
        Err(reason) => {
            tracing::warn!(%reason, "diagnosis reply unusable, returning fallback");
            Normalized::Fallback(fallback_diagnosis(req))
        }
    }
}

/// Normalise a chat reply.
pub fn normalize_chat(raw: &str) -> Normalized<ChatResult> {
    match decode::<ChatResult>(raw).and_then(check_chat) {
        Ok(result) => Normalized::Parsed(result),
        Err(reason) => {
            tracing::warn!(%reason, "chat reply unusable, returning fallback");
            Normalized::Fallback(fallback_chat())
        }
    }
}

pub fn fallback_diagnosis(req: &DiagnosisRequest) -> DiagnosisResult {
    DiagnosisResult {
        diagnoses: vec![Diagnosis {
            name: FALLBACK_DIAGNOSIS_NAME.to_string(),
            probability: Number::from(FALLBACK_DIAGNOSIS_PROBABILITY),
            symptoms: req.symptoms.clone(),
            differentials: vec![FALLBACK_DIFFERENTIAL.to_string()],
        }],
        risk_level: RiskLevel::Medium,
        recommendations: vec![FALLBACK_RECOMMENDATION.to_string()],
        confidence_score: FALLBACK_DIAGNOSIS_CONFIDENCE,
    }
}

pub fn fallback_chat() -> ChatResult {
    ChatResult {
        response: FALLBACK_CHAT_RESPONSE.to_string(),
        suggestions: FALLBACK_CHAT_SUGGESTIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        confidence: FALLBACK_CHAT_CONFIDENCE,
    }
}

/// Decode `raw` as `T`, falling back to the JSON block embedded in surrounding prose or a
/// markdown code fence.
fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let direct = match serde_json::from_str::<T>(raw) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    match extract_json_block(raw) {
        Some(block) if block != raw.trim() => {
            serde_json::from_str::<T>(block).map_err(|e| e.to_string())
        }
        _ => Err(direct.to_string()),
    }
}

/// Locate a JSON object inside model output.
///
/// Prefers the body of a ```json (or bare ```) fence, then the span from the first `{` to the
/// last `}`.
pub fn extract_json_block(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_fence = &trimmed[start + "```json".len()..];
        if let Some(end) = after_fence.find("```") {
            return Some(after_fence[..end].trim());
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        if let Some(end) = after_fence.find("```") {
            let block = after_fence[..end].trim();
            if block.starts_with('{') {
                return Some(block);
            }
        }
    }

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => Some(&trimmed[start..=end]),
        _ => None,
    }
}

fn check_chat(result: ChatResult) -> Result<ChatResult, String> {
    if result.suggestions.is_empty() {
        return Err("suggestions list is empty".into());
    }
    Ok(result)
}
