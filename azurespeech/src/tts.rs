//! Text-to-speech service.

use std::sync::Arc;

use super::{
    error::Result,
    http::HttpClient,
    ssml::Ssml,
    types::OutputFormat,
    voice::resolve_voice,
};

/// Text-to-speech service.
pub struct TtsService {
    http: Arc<HttpClient>,
}

impl TtsService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Synthesizes speech.
    ///
    /// Runs the full exchange in order: issue a token, resolve the voice,
    /// build the SSML document, post it. The first failing step aborts the
    /// rest; nothing is retried.
    pub async fn synthesize(&self, request: &TtsRequest) -> Result<SynthesisResult> {
        let token = self.http.issue_token().await?;
        tracing::debug!("azure access token issued");

        let voice = resolve_voice(request.voice.as_deref());
        let ssml = Ssml::new(voice, &request.text).to_string();

        let audio = self.http.synthesize(&token, ssml).await?;
        tracing::debug!(bytes = audio.len(), voice, "azure speech synthesized");

        Ok(SynthesisResult {
            audio: audio.to_vec(),
            voice,
            format: self.http.output_format(),
        })
    }
}

/// Request for speech synthesis.
#[derive(Debug, Clone, Default)]
pub struct TtsRequest {
    /// Text to speak. Escaped before it is embedded in SSML.
    pub text: String,

    /// Voice selector key (`denise`, `henri`, `vivienne`).
    pub voice: Option<String>,
}

impl TtsRequest {
    /// Creates a request using the default voice.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: None,
        }
    }

    /// Sets the voice selector key.
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }
}

/// Result of a synthesis exchange.
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Encoded audio.
    pub audio: Vec<u8>,

    /// Azure voice name actually used.
    pub voice: &'static str,

    /// Format the audio is encoded in.
    pub format: OutputFormat,
}
