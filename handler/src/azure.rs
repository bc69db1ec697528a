//! Azure Speech handler.

use axum::{Json, body::Bytes, extract::State};
use serde_json::Value;
use voxbridge_azurespeech::TtsRequest;

use crate::{
    envelope::{SuccessEnvelope, data_url},
    error::ApiError,
    preamble::{parse_body, preview, require_text},
    state::AppState,
};

/// `POST /api/azure-tts`
///
/// Configuration is checked before the token request; token and synthesis
/// failures abort the request with the upstream body relayed.
pub async fn azure_tts(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuccessEnvelope>, ApiError> {
    let body = parse_body(&body)?;
    let text = require_text(&body)?;
    let client = state.azure()?;

    let chars = text.chars().count();
    let voice_key = body.get("voice").and_then(Value::as_str);
    tracing::info!(chars, voice = voice_key, preview = %preview(text), "azure tts request");

    let mut request = TtsRequest::new(text);
    if let Some(key) = voice_key {
        request = request.with_voice(key);
    }

    let result = client
        .tts()
        .synthesize(&request)
        .await
        .map_err(|e| ApiError::from_azure(e, state.expose_stack()))?;

    Ok(Json(
        SuccessEnvelope::new(
            data_url(result.format.mime_subtype(), &result.audio),
            format!("Azure audio generated successfully ({} characters)", chars),
        )
        .with_voice(result.voice),
    ))
}
