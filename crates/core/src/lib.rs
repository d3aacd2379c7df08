//! # MedAssist Core
//!
//! Core pipeline for the MedAssist diagnosis and chat assistant.
//!
//! This crate turns structured clinical input into structured AI output:
//! - input warnings on decoded requests (`validation`)
//! - deterministic prompt rendering (`prompts`)
//! - the upstream chat completion client (`completion`)
//! - normalisation of untrusted model output into typed results (`normalizer`)
//! - the `AssistantService` tying them together (`service`)
//!
//! **No API concerns**: HTTP routing, CORS and error-to-status mapping belong in `api-rest`.

pub mod completion;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod service;
pub mod validation;

pub use completion::{CompletionClient, GroqClient};
pub use config::{bind_addr_from_env_value, AssistantConfig};
pub use error::{AssistError, AssistResult};
pub use models::{
    ChatRequest, ChatResult, CompletionMessage, Diagnosis, DiagnosisRequest, DiagnosisResult,
    RiskLevel, Role,
};
pub use normalizer::Normalized;
pub use service::AssistantService;
