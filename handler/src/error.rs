//! Error taxonomy and its JSON rendering.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::envelope::timestamp;

/// Errors a handler can answer with.
///
/// Client errors map to 4xx, everything else to 500. Upstream bodies are
/// relayed verbatim under `details`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Missing text")]
    MissingText { received: Value },

    #[error("{provider} configuration missing: {message}")]
    MissingConfig {
        provider: &'static str,
        message: String,
    },

    #[error("{error}: {details}")]
    Upstream {
        error: &'static str,
        details: String,
        status: u16,
    },

    #[error("{message}")]
    Internal {
        message: String,
        stack: Option<String>,
    },
}

impl ApiError {
    /// Wraps an unexpected error. The source chain is kept only when
    /// `expose_stack` is set.
    pub fn internal(err: &(dyn std::error::Error + 'static), expose_stack: bool) -> Self {
        ApiError::Internal {
            message: err.to_string(),
            stack: expose_stack.then(|| source_chain(err)),
        }
    }

    /// Maps an OpenAI SDK error.
    pub fn from_openai(err: voxbridge_openai::Error, expose_stack: bool) -> Self {
        match err {
            voxbridge_openai::Error::Api { http_status, body } => ApiError::Upstream {
                error: "OpenAI TTS error",
                details: body,
                status: http_status,
            },
            other => ApiError::internal(&other, expose_stack),
        }
    }

    /// Maps an Azure Speech SDK error.
    pub fn from_azure(err: voxbridge_azurespeech::Error, expose_stack: bool) -> Self {
        use voxbridge_azurespeech::{Error, Stage};

        match err {
            Error::Api {
                stage,
                http_status,
                body,
            } => ApiError::Upstream {
                error: match stage {
                    Stage::Token => "Azure token error",
                    Stage::Synthesis => "Azure TTS error",
                },
                details: body,
                status: http_status,
            },
            other => ApiError::internal(&other, expose_stack),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidJson(_) | ApiError::MissingText { .. } => StatusCode::BAD_REQUEST,
            ApiError::MissingConfig { .. }
            | ApiError::Upstream { .. }
            | ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Default, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::MethodNotAllowed => ErrorBody {
                error: "Method not allowed".to_string(),
                ..Default::default()
            },
            ApiError::InvalidJson(details) => ErrorBody {
                error: "Invalid JSON body".to_string(),
                details: Some(details),
                ..Default::default()
            },
            ApiError::MissingText { received } => ErrorBody {
                error: "Missing text".to_string(),
                received: Some(received),
                ..Default::default()
            },
            ApiError::MissingConfig { provider, message } => ErrorBody {
                error: format!("{} configuration missing", provider),
                message: Some(message),
                ..Default::default()
            },
            ApiError::Upstream {
                error,
                details,
                status,
            } => ErrorBody {
                error: error.to_string(),
                details: Some(details),
                status: Some(status),
                ..Default::default()
            },
            ApiError::Internal { message, stack } => ErrorBody {
                error: "Internal server error".to_string(),
                message: Some(message),
                stack,
                timestamp: Some(timestamp()),
                ..Default::default()
            },
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %body.error, "request failed");
        }

        (status, Json(body)).into_response()
    }
}

/// Renders an error and its sources, one per line.
fn source_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\n    caused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
