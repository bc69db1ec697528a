//! Success envelope returned to Vapi.

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEnvelope {
    pub success: bool,
    pub audio_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    pub message: String,
    pub timestamp: String,
}

impl SuccessEnvelope {
    pub fn new(audio_url: String, message: String) -> Self {
        Self {
            success: true,
            audio_url,
            voice: None,
            message,
            timestamp: timestamp(),
        }
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }
}

/// Wraps encoded audio as `data:audio/<subtype>;base64,...`.
pub fn data_url(subtype: &str, audio: &[u8]) -> String {
    format!("data:audio/{};base64,{}", subtype, STANDARD.encode(audio))
}

/// Current UTC time as ISO-8601 with milliseconds, e.g. `2026-01-01T00:00:00.000Z`.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
