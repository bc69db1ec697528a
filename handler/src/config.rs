//! Process configuration.
//!
//! Resolved once at startup and injected into [`AppState`](crate::AppState);
//! handlers never read the environment themselves.

use std::fmt;

/// Configuration for both providers.
///
/// Empty or whitespace-only values are treated as absent.
#[derive(Clone, Default)]
pub struct Config {
    /// `OPENAI_API_KEY`.
    pub openai_api_key: Option<String>,
    /// `OPENAI_BASE_URL`, defaults to the public API.
    pub openai_base_url: Option<String>,
    /// `OPENAI_TTS_MODEL`, defaults to `tts-1-hd`.
    pub openai_model: Option<String>,
    /// `AZURE_SPEECH_KEY`.
    pub azure_speech_key: Option<String>,
    /// `AZURE_SPEECH_REGION`.
    pub azure_speech_region: Option<String>,
    /// `AZURE_SPEECH_TOKEN_URL`, defaults to the region's issuance endpoint.
    pub azure_token_url: Option<String>,
    /// `AZURE_SPEECH_TTS_URL`, defaults to the region's synthesis endpoint.
    pub azure_tts_url: Option<String>,
    /// Include error source chains in 500 responses. Set when
    /// `NODE_ENV=development`.
    pub expose_stack: bool,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL"),
            openai_model: get("OPENAI_TTS_MODEL"),
            azure_speech_key: get("AZURE_SPEECH_KEY"),
            azure_speech_region: get("AZURE_SPEECH_REGION"),
            azure_token_url: get("AZURE_SPEECH_TOKEN_URL"),
            azure_tts_url: get("AZURE_SPEECH_TTS_URL"),
            expose_stack: get("NODE_ENV").as_deref() == Some("development"),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &self.openai_api_key.as_deref().map(redact))
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("azure_speech_key", &self.azure_speech_key.as_deref().map(redact))
            .field("azure_speech_region", &self.azure_speech_region)
            .field("azure_token_url", &self.azure_token_url)
            .field("azure_tts_url", &self.azure_tts_url)
            .field("expose_stack", &self.expose_stack)
            .finish()
    }
}

/// Masks a credential for logs: keeps the first and last four characters of
/// keys longer than eight, masks shorter keys entirely.
pub fn redact(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
}
