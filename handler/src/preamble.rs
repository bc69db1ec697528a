//! Shared request preamble: CORS, method gating, body and text extraction.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::error::ApiError;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Middleware run before every handler.
///
/// `OPTIONS` is answered with an empty 200, anything but `POST` with a 405.
/// The CORS headers are set on every response, including those two.
pub async fn preamble(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let mut response = match method {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::POST => next.run(request).await,
        method => {
            tracing::debug!(%method, path = %request.uri().path(), "method not allowed");
            ApiError::MethodNotAllowed.into_response()
        }
    };

    apply_cors(response.headers_mut());
    response
}

fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

/// Parses a request body. An empty body reads as `null`.
pub fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidJson(e.to_string()))
}

/// Resolves the text to speak: `message.content`, then `message.text`, then
/// top-level `text`. Non-string and empty values are skipped.
pub fn extract_text(body: &Value) -> Option<&str> {
    [
        body.pointer("/message/content"),
        body.pointer("/message/text"),
        body.get("text"),
    ]
    .into_iter()
    .flatten()
    .filter_map(Value::as_str)
    .find(|text| !text.is_empty())
}

/// Resolves the text or fails with the body echoed back.
pub fn require_text(body: &Value) -> Result<&str, ApiError> {
    extract_text(body).ok_or_else(|| {
        tracing::debug!(received = %body, "request body carries no text");
        ApiError::MissingText {
            received: body.clone(),
        }
    })
}

/// First 100 characters of `text`, for logs.
pub fn preview(text: &str) -> String {
    text.chars().take(100).collect()
}
