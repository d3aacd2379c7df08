//! Constants used throughout the MedAssist core crate.
//!
//! Upstream defaults, sampling parameters and the placeholder strings rendered into prompts
//! live here so that the prompt builder, completion client and normaliser agree on them.

/// Default chat completions endpoint (Groq, OpenAI-compatible).
pub const DEFAULT_COMPLETION_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model identifier sent with every completion request.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Sampling temperature for every completion request.
pub const COMPLETION_TEMPERATURE: f32 = 0.3;

/// Maximum number of tokens the model may generate per completion.
pub const COMPLETION_MAX_TOKENS: u32 = 2048;

/// Rendered in place of any absent optional patient field.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Rendered in place of an absent chat context.
pub const DEFAULT_CHAT_CONTEXT: &str = "General medical inquiry";

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
