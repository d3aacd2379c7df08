use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, build_router};
use medassist_core::{AssistantConfig, AssistantService, GroqClient, bind_addr_from_env_value};

/// Main entry point for the MedAssist application
///
/// Resolves configuration once, builds the completion client and serves the REST API.
/// Configuration is validated before the listener is bound, so a missing credential stops the
/// process before it can accept any request.
///
/// # Environment Variables
/// - `GROQ_API_KEY`: upstream API credential (required)
/// - `GROQ_API_URL`: chat completions endpoint (default: Groq's OpenAI-compatible endpoint)
/// - `GROQ_MODEL`: model identifier (default: "llama3-8b-8192")
/// - `MEDASSIST_ADDR`: REST server address (default: "0.0.0.0:8000")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medassist_run=info".parse()?)
                .add_directive("medassist_core=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AssistantConfig::from_env_values(
        std::env::var("GROQ_API_KEY").ok(),
        std::env::var("GROQ_API_URL").ok(),
        std::env::var("GROQ_MODEL").ok(),
    )?;
    let addr = bind_addr_from_env_value(std::env::var("MEDASSIST_ADDR").ok())?;

    tracing::info!(
        model = config.model(),
        url = config.completion_url(),
        "++ Completion service configured"
    );

    let client = GroqClient::new(config)?;
    let state = AppState::new(AssistantService::new(Arc::new(client)));
    let app = build_router(state);

    tracing::info!("++ Starting MedAssist REST on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
