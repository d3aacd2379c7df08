//! Prompt construction.
//!
//! Prompts are rendered by plain template substitution. Each user prompt embeds a literal
//! example of the JSON shape the normaliser expects, since prompt shape is the only lever the
//! pipeline has over the model's output format.

use crate::constants::{DEFAULT_CHAT_CONTEXT, NOT_SPECIFIED};
use crate::models::{ChatRequest, CompletionMessage, DiagnosisRequest};

pub const DIAGNOSIS_SYSTEM_PROMPT: &str = "You are a medical AI assistant specialized in differential diagnosis. Always respond with valid JSON.";

pub const CHAT_SYSTEM_PROMPT: &str =
    "You are a medical AI assistant. Always respond with valid JSON.";

/// Render the user prompt for a differential diagnosis request.
pub fn diagnosis_prompt(req: &DiagnosisRequest) -> String {
    let symptoms = req.symptoms.join(", ");
    let age = req
        .patient_age
        .map(|age| age.to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let gender = or_not_specified(req.patient_gender.as_deref());
    let history = match req.medical_history.as_deref() {
        Some(items) if !items.is_empty() => items.join(", "),
        _ => NOT_SPECIFIED.to_string(),
    };

    format!(
        "You are a medical AI assistant. Analyze the following symptoms and provide a differential diagnosis.

Symptoms: {symptoms}
Age: {age}
Gender: {gender}
Medical History: {history}

Please provide:
1. Top 3-5 most likely diagnoses with probability percentages
2. Risk level (Low/Medium/High/Critical)
3. Immediate recommendations
4. Confidence score (0-100)

Format your response as JSON with the following structure:
{{
    \"diagnoses\": [
        {{
            \"name\": \"Diagnosis name\",
            \"probability\": 85,
            \"symptoms\": [\"symptom1\", \"symptom2\"],
            \"differentials\": [\"diff1\", \"diff2\"]
        }}
    ],
    \"risk_level\": \"Medium\",
    \"recommendations\": [\"rec1\", \"rec2\"],
    \"confidence_score\": 78.5
}}
"
    )
}

/// Render the user prompt for a chat request.
pub fn chat_prompt(req: &ChatRequest) -> String {
    let message = &req.message;
    let context = match req.context.as_deref() {
        Some(ctx) if !ctx.is_empty() => ctx,
        _ => DEFAULT_CHAT_CONTEXT,
    };

    format!(
        "You are a medical AI assistant. A patient is asking: \"{message}\"

Context: {context}

Provide a helpful, professional response that:
1. Addresses their question appropriately
2. Suggests 2-3 follow-up questions to gather more information
3. Includes a confidence level (0-100) in your response

Format your response as JSON:
{{
    \"response\": \"Your detailed response here\",
    \"suggestions\": [\"suggestion1\", \"suggestion2\", \"suggestion3\"],
    \"confidence\": 85.5
}}
"
    )
}

/// The two-message conversation for a diagnosis request: system instruction, then user prompt.
pub fn diagnosis_messages(req: &DiagnosisRequest) -> [CompletionMessage; 2] {
    [
        CompletionMessage::system(DIAGNOSIS_SYSTEM_PROMPT),
        CompletionMessage::user(diagnosis_prompt(req)),
    ]
}

/// The two-message conversation for a chat request: system instruction, then user prompt.
pub fn chat_messages(req: &ChatRequest) -> [CompletionMessage; 2] {
    [
        CompletionMessage::system(CHAT_SYSTEM_PROMPT),
        CompletionMessage::user(chat_prompt(req)),
    ]
}

fn or_not_specified(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_SPECIFIED,
    }
}
