//! Speech synthesis service.

use std::sync::Arc;

use serde::Serialize;

use super::{error::Result, http::HttpClient};

/// Standard quality TTS model.
pub const MODEL_TTS_1: &str = "tts-1";

/// High definition TTS model.
pub const MODEL_TTS_1_HD: &str = "tts-1-hd";

/// The "cedar" voice.
pub const VOICE_CEDAR: &str = "cedar";

/// Speech synthesis service.
pub struct SpeechService {
    http: Arc<HttpClient>,
}

impl SpeechService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Synthesizes speech and returns the encoded audio bytes.
    ///
    /// The text length is not checked here; OpenAI enforces its own limit and
    /// reports it as an [`Error::Api`](crate::Error::Api).
    pub async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>> {
        let audio = self.http.post_for_bytes("/v1/audio/speech", request).await?;
        tracing::debug!(bytes = audio.len(), model = %request.model, "openai speech synthesized");
        Ok(audio.to_vec())
    }
}

/// Request for speech synthesis.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest {
    /// Model identifier.
    pub model: String,

    /// Text to synthesize.
    pub input: String,

    /// Voice identifier.
    pub voice: String,

    /// Audio container format.
    pub response_format: ResponseFormat,

    /// Playback speed (0.25-4.0).
    pub speed: f64,
}

impl SpeechRequest {
    /// Creates a request with the HD model, the cedar voice, MP3 output and
    /// normal speed.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            model: MODEL_TTS_1_HD.to_string(),
            input: input.into(),
            voice: VOICE_CEDAR.to_string(),
            response_format: ResponseFormat::Mp3,
            speed: 1.0,
        }
    }

    /// Overrides the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Output audio format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Mp3,
    Opus,
    Aac,
    Flac,
    Wav,
    Pcm,
}

impl ResponseFormat {
    /// Returns the MIME subtype used in data URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Mp3 => "mp3",
            ResponseFormat::Opus => "opus",
            ResponseFormat::Aac => "aac",
            ResponseFormat::Flac => "flac",
            ResponseFormat::Wav => "wav",
            ResponseFormat::Pcm => "pcm",
        }
    }
}
