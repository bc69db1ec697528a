//! Error types for the OpenAI API client.

use thiserror::Error;

/// Result type alias for OpenAI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for OpenAI API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Non-success status returned by OpenAI. `body` is the raw response text.
    #[error("openai: http_status={http_status}: {body}")]
    Api { http_status: u16, body: String },

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new API error.
    pub fn api(http_status: u16, body: impl Into<String>) -> Self {
        Error::Api {
            http_status,
            body: body.into(),
        }
    }

    /// Returns the upstream HTTP status for API errors.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::Api { http_status, .. } => Some(*http_status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if this is an invalid API key error.
    pub fn is_invalid_api_key(&self) -> bool {
        matches!(self, Error::Api { http_status: 401, .. })
    }

    /// Returns true if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Error::Api { http_status: 429, .. })
    }
}
