use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health report for the API and its upstream configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub status: String,
    pub groq_api: String,
}

/// A single human-readable message, used by the liveness and preflight responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

impl MessageRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Simple health service shared by the API surfaces
///
/// The report is static: the process refuses to start without an upstream credential, so a
/// running instance is always configured.
pub struct HealthService;

impl HealthService {
    pub const LIVENESS_MESSAGE: &'static str = "Medical Diagnosis Assistant API is running";

    /// Static health report.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy and the upstream is configured.
    pub fn check_health() -> HealthRes {
        HealthRes {
            status: "healthy".into(),
            groq_api: "configured".into(),
        }
    }

    /// Liveness message for the API root.
    pub fn liveness() -> MessageRes {
        MessageRes::new(Self::LIVENESS_MESSAGE)
    }
}
