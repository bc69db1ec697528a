//! Shared handler state built from [`Config`].

use std::sync::Arc;

use voxbridge_openai::MODEL_TTS_1_HD;

use crate::{config::Config, error::ApiError};

/// Provider clients, built once. A provider whose credentials are missing
/// holds the reason instead of a client, so requests fail before any
/// network call.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    openai: Result<voxbridge_openai::Client, String>,
    openai_model: String,
    azure: Result<voxbridge_azurespeech::Client, String>,
    expose_stack: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let openai = match &config.openai_api_key {
            None => Err("OPENAI_API_KEY must be set".to_string()),
            Some(key) => {
                let mut builder = voxbridge_openai::Client::builder(key.clone());
                if let Some(url) = &config.openai_base_url {
                    builder = builder.base_url(url.clone());
                }
                builder.build().map_err(|e| e.to_string())
            }
        };

        let azure = match (&config.azure_speech_key, &config.azure_speech_region) {
            (Some(key), Some(region)) => {
                let mut builder =
                    voxbridge_azurespeech::Client::builder(key.clone(), region.clone());
                if let Some(url) = &config.azure_token_url {
                    builder = builder.token_url(url.clone());
                }
                if let Some(url) = &config.azure_tts_url {
                    builder = builder.tts_url(url.clone());
                }
                builder.build().map_err(|e| e.to_string())
            }
            _ => Err("AZURE_SPEECH_KEY and AZURE_SPEECH_REGION must be set".to_string()),
        };

        if let Err(reason) = &openai {
            tracing::warn!(%reason, "openai tts disabled");
        }
        if let Err(reason) = &azure {
            tracing::warn!(%reason, "azure tts disabled");
        }

        Self {
            inner: Arc::new(Inner {
                openai,
                openai_model: config
                    .openai_model
                    .clone()
                    .unwrap_or_else(|| MODEL_TTS_1_HD.to_string()),
                azure,
                expose_stack: config.expose_stack,
            }),
        }
    }

    pub fn openai(&self) -> Result<&voxbridge_openai::Client, ApiError> {
        self.inner.openai.as_ref().map_err(|reason| ApiError::MissingConfig {
            provider: "OpenAI",
            message: reason.clone(),
        })
    }

    pub fn openai_model(&self) -> &str {
        &self.inner.openai_model
    }

    pub fn azure(&self) -> Result<&voxbridge_azurespeech::Client, ApiError> {
        self.inner.azure.as_ref().map_err(|reason| ApiError::MissingConfig {
            provider: "Azure Speech",
            message: reason.clone(),
        })
    }

    pub fn expose_stack(&self) -> bool {
        self.inner.expose_stack
    }

    pub fn is_openai_configured(&self) -> bool {
        self.inner.openai.is_ok()
    }

    pub fn is_azure_configured(&self) -> bool {
        self.inner.azure.is_ok()
    }
}
