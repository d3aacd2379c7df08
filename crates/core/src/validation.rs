//! Input checks on decoded requests.
//!
//! Presence and type constraints are enforced when the request body is decoded into the typed
//! request structs, so anything that reaches the pipeline is processable. This module only
//! flags requests that are well-formed but unlikely to produce a useful answer.
//!
//! Empty symptom lists and blank chat messages are accepted and logged as warnings.

use crate::models::{ChatRequest, DiagnosisRequest};

/// Warnings raised for a decoded request before it enters the pipeline.
pub trait InputWarnings {
    /// Log a warning for each suspect input. Returns the number of warnings raised.
    fn warn_suspect_input(&self) -> usize;
}

impl InputWarnings for DiagnosisRequest {
    fn warn_suspect_input(&self) -> usize {
        if self.symptoms.is_empty() {
            tracing::warn!("diagnosis request has an empty symptom list");
            1
        } else if self.symptoms.iter().all(|s| s.trim().is_empty()) {
            tracing::warn!("diagnosis request symptoms are all blank");
            1
        } else {
            0
        }
    }
}

impl InputWarnings for ChatRequest {
    fn warn_suspect_input(&self) -> usize {
        if self.message.trim().is_empty() {
            tracing::warn!("chat request has a blank message");
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_symptom_list_is_flagged() {
        let req = DiagnosisRequest {
            symptoms: vec![],
            patient_age: None,
            patient_gender: None,
            medical_history: None,
        };
        assert_eq!(req.warn_suspect_input(), 1);
    }

    #[test]
    fn populated_requests_raise_no_warnings() {
        let req = DiagnosisRequest {
            symptoms: vec!["headache".into()],
            patient_age: Some(34),
            patient_gender: Some("female".into()),
            medical_history: Some(vec!["migraine".into()]),
        };
        assert_eq!(req.warn_suspect_input(), 0);

        let chat = ChatRequest {
            message: "Is this serious?".into(),
            context: None,
        };
        assert_eq!(chat.warn_suspect_input(), 0);
    }

    #[test]
    fn blank_chat_message_is_flagged() {
        let chat = ChatRequest {
            message: "   ".into(),
            context: Some("triage".into()),
        };
        assert_eq!(chat.warn_suspect_input(), 1);
    }
}
