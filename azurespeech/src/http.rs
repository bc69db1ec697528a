//! HTTP client implementation for the Azure Speech endpoints.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{
    Client as ReqwestClient, Response,
    header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};

use super::{
    error::{Error, Result, Stage},
    types::OutputFormat,
};

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";

/// HTTP client for the Azure token and synthesis endpoints.
pub struct HttpClient {
    client: ReqwestClient,
    subscription_key: String,
    token_url: String,
    tts_url: String,
    output_format: OutputFormat,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(
        subscription_key: String,
        token_url: String,
        tts_url: String,
        output_format: OutputFormat,
        timeout: Duration,
    ) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            subscription_key,
            token_url,
            tts_url,
            output_format,
        })
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    pub fn tts_url(&self) -> &str {
        &self.tts_url
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Requests an access token. The whole response body is the token.
    pub async fn issue_token(&self) -> Result<String> {
        let mut headers = HeaderMap::new();
        headers.insert(
            SUBSCRIPTION_KEY_HEADER,
            HeaderValue::from_str(&self.subscription_key)
                .map_err(|e| Error::Config(format!("invalid subscription key: {}", e)))?,
        );
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("0"));

        let response = self
            .client
            .post(&self.token_url)
            .headers(headers)
            .send()
            .await?;

        let body = self.handle_response(response, Stage::Token).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Posts an SSML document authorized by `token` and returns the audio.
    pub async fn synthesize(&self, token: &str, ssml: String) -> Result<Bytes> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| Error::Config(format!("invalid access token: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/ssml+xml"));
        headers.insert(
            OUTPUT_FORMAT_HEADER,
            HeaderValue::from_static(self.output_format.as_str()),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("voxbridge"));

        let response = self
            .client
            .post(&self.tts_url)
            .headers(headers)
            .body(ssml)
            .send()
            .await?;

        self.handle_response(response, Stage::Synthesis).await
    }

    /// Handles an API response, turning non-success statuses into errors
    /// that carry the raw body.
    async fn handle_response(&self, response: Response, stage: Stage) -> Result<Bytes> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            tracing::warn!(
                %stage,
                status = status.as_u16(),
                "azure speech returned an error status"
            );
            return Err(Error::api(stage, status.as_u16(), body));
        }

        Ok(response.bytes().await?)
    }
}
