//! OpenAI TTS handler, fixed "cedar" voice.

use axum::{Json, body::Bytes, extract::State};
use voxbridge_openai::SpeechRequest;

use crate::{
    envelope::{SuccessEnvelope, data_url},
    error::ApiError,
    preamble::{parse_body, preview, require_text},
    state::AppState,
};

/// `POST /api/cedar-tts`
pub async fn cedar_tts(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuccessEnvelope>, ApiError> {
    let body = parse_body(&body)?;
    let text = require_text(&body)?;
    let client = state.openai()?;

    let chars = text.chars().count();
    tracing::info!(chars, preview = %preview(text), "cedar tts request");

    let request = SpeechRequest::new(text).with_model(state.openai_model());
    let audio = client
        .speech()
        .synthesize(&request)
        .await
        .map_err(|e| ApiError::from_openai(e, state.expose_stack()))?;

    Ok(Json(SuccessEnvelope::new(
        data_url(request.response_format.as_str(), &audio),
        format!("Cedar audio generated successfully ({} characters)", chars),
    )))
}
