//! Vapi text-to-speech proxy handlers.
//!
//! Two independent endpoints share the request preamble (CORS, method gating,
//! text extraction) and the response envelopes:
//!
//! - `POST /api/cedar-tts`: OpenAI TTS, voice "cedar".
//! - `POST /api/azure-tts`: Azure Speech, token issuance then SSML synthesis.
//!
//! Both answer with `{success, audioUrl, message, timestamp}` where `audioUrl`
//! is a base64 MP3 data URL.

mod azure;
mod cedar;
pub mod config;
mod envelope;
mod error;
pub mod preamble;
mod state;

use axum::{Router, extract::DefaultBodyLimit, middleware, routing::post};
use tower_http::trace::TraceLayer;

pub use azure::azure_tts;
pub use cedar::cedar_tts;
pub use config::{Config, redact};
pub use envelope::{SuccessEnvelope, data_url, timestamp};
pub use error::{ApiError, ErrorBody};
pub use state::AppState;

/// Builds the router serving both handlers.
///
/// Request bodies are not size-limited; text length is left to the providers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/cedar-tts", post(cedar_tts))
        .route("/api/azure-tts", post(azure_tts))
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(preamble::preamble))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
