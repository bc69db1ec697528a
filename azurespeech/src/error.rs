//! Error types for the Azure Speech client.

use thiserror::Error;

/// Step of the synthesis exchange that produced an API error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Access token issuance.
    Token,
    /// SSML synthesis.
    Synthesis,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Token => f.write_str("token"),
            Stage::Synthesis => f.write_str("synthesis"),
        }
    }
}

/// Result type alias for Azure Speech operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Azure Speech operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Non-success status returned by Azure. `body` is the raw response text.
    #[error("azurespeech: {stage} failed (http_status={http_status}): {body}")]
    Api {
        stage: Stage,
        http_status: u16,
        body: String,
    },

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new API error.
    pub fn api(stage: Stage, http_status: u16, body: impl Into<String>) -> Self {
        Error::Api {
            stage,
            http_status,
            body: body.into(),
        }
    }

    /// Returns the stage for API errors.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::Api { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Returns true if the subscription key or token was rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Error::Api {
                http_status: 401 | 403,
                ..
            }
        )
    }
}
