//! REST handlers.

use api_shared::{HealthRes, HealthService, MessageRes};
use axum::{extract::State, response::Json};
use medassist_core::{ChatRequest, ChatResult, DiagnosisRequest, DiagnosisResult};

use crate::error::{ApiError, ErrorBody};
use crate::extract::ValidatedJson;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Liveness message", body = MessageRes)
    )
)]
/// Liveness endpoint
#[axum::debug_handler(state = AppState)]
pub async fn root() -> Json<MessageRes> {
    Json(HealthService::liveness())
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns a static report; the process cannot start without an upstream credential.
#[axum::debug_handler(state = AppState)]
pub async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/api/diagnose",
    request_body = DiagnosisRequest,
    responses(
        (status = 200, description = "Differential diagnosis", body = DiagnosisResult),
        (status = 422, description = "Invalid request body", body = ErrorBody),
        (status = 500, description = "Completion service error", body = ErrorBody)
    )
)]
/// Analyse symptoms and return a differential diagnosis
///
/// The symptoms and patient details are rendered into a prompt and sent to the completion
/// service. If the model's reply cannot be decoded, a generic low-confidence result is returned
/// instead.
///
/// # Errors
/// Returns `422 Unprocessable Entity` if the body is missing `symptoms` or has wrong types, and
/// `500 Internal Server Error` if the completion service cannot be reached or rejects the call.
#[axum::debug_handler]
pub async fn diagnose(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<DiagnosisRequest>,
) -> Result<Json<DiagnosisResult>, ApiError> {
    let result = state.assistant.diagnose(&req).await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Chat reply", body = ChatResult),
        (status = 422, description = "Invalid request body", body = ErrorBody),
        (status = 500, description = "Completion service error", body = ErrorBody)
    )
)]
/// Answer a medical chat message with follow-up suggestions
///
/// # Errors
/// As for `diagnose`.
#[axum::debug_handler]
pub async fn chat(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResult>, ApiError> {
    let result = state.assistant.chat(&req).await?;
    Ok(Json(result))
}

/// Fallback for unregistered paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
