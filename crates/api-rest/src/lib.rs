//! # API REST
//!
//! REST API implementation for MedAssist.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON extraction, error bodies, CORS and OPTIONS handling)
//!
//! Uses `medassist-core` for the assistant pipeline and `api-shared` for common bodies.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod extract;
pub mod handlers;
pub mod preflight;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{HealthRes, MessageRes};
use medassist_core::{
    AssistantService, ChatRequest, ChatResult, Diagnosis, DiagnosisRequest, DiagnosisResult,
    RiskLevel,
};

pub use error::ApiError;

/// Application state shared across REST API handlers
///
/// Holds the assistant pipeline. The service is immutable and cheap to clone, so each request
/// works on its own handle without locking.
#[derive(Clone)]
pub struct AppState {
    pub assistant: AssistantService,
}

impl AppState {
    pub fn new(assistant: AssistantService) -> Self {
        Self { assistant }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Medical Diagnosis Assistant API", version = "1.0.0"),
    paths(handlers::root, handlers::health, handlers::diagnose, handlers::chat),
    components(schemas(
        MessageRes,
        HealthRes,
        DiagnosisRequest,
        Diagnosis,
        RiskLevel,
        DiagnosisResult,
        ChatRequest,
        ChatResult,
        error::ErrorBody
    ))
)]
pub struct ApiDoc;

/// Build the REST router.
///
/// Layers, outermost first: request tracing, the catch-all OPTIONS responder, then CORS.
/// Swagger UI is served at `/docs`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/api/diagnose", post(handlers::diagnose))
        .route("/api/chat", post(handlers::chat))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::not_found)
        .layer(CorsLayer::very_permissive())
        .layer(middleware::from_fn(preflight::preflight))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
