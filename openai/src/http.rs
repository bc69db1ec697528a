//! HTTP client implementation for the OpenAI API.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{
    Client as ReqwestClient, Response,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::Serialize;

use super::error::{Error, Result};

/// HTTP client for the OpenAI API.
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    api_key: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs a JSON body and returns the raw response bytes.
    ///
    /// No retries: a non-success status becomes [`Error::Api`] carrying the
    /// raw response text.
    pub async fn post_for_bytes<T>(&self, path: &str, body: &T) -> Result<Bytes>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers()?)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Returns default headers for API requests.
    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| Error::Config(format!("invalid api key: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("voxbridge-openai-rust/1.0"));
        Ok(headers)
    }

    /// Handles the API response.
    async fn handle_response(&self, response: Response) -> Result<Bytes> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            tracing::warn!(status = status.as_u16(), "openai returned an error status");
            return Err(Error::api(status.as_u16(), body));
        }

        Ok(response.bytes().await?)
    }
}
