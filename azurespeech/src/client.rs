//! Azure Speech client.

use std::{sync::Arc, time::Duration};

use super::{
    error::{Error, Result},
    http::HttpClient,
    tts::TtsService,
    types::OutputFormat,
};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Azure Speech client bound to one subscription key and region.
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use voxbridge_azurespeech::{Client, TtsRequest};
///
/// # async fn run() -> voxbridge_azurespeech::Result<()> {
/// let client = Client::new("subscription-key", "westeurope")?;
/// let result = client.tts().synthesize(&TtsRequest::new("Bonjour")).await?;
/// println!("{} bytes spoken by {}", result.audio.len(), result.voice);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    http: Arc<HttpClient>,
    region: String,
}

impl Client {
    /// Creates a new client using the region's public endpoints.
    pub fn new(subscription_key: impl Into<String>, region: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(subscription_key, region).build()
    }

    /// Creates a new client builder for more configuration options.
    pub fn builder(
        subscription_key: impl Into<String>,
        region: impl Into<String>,
    ) -> ClientBuilder {
        ClientBuilder::new(subscription_key, region)
    }

    /// Returns the configured region.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the token issuance URL.
    pub fn token_url(&self) -> &str {
        self.http.token_url()
    }

    /// Returns the synthesis URL.
    pub fn tts_url(&self) -> &str {
        self.http.tts_url()
    }

    /// Fetches a fresh access token for the subscription key.
    ///
    /// Tokens are never cached; each call hits the issuance endpoint.
    pub async fn issue_token(&self) -> Result<String> {
        self.http.issue_token().await
    }

    /// Returns the text-to-speech service.
    pub fn tts(&self) -> TtsService {
        TtsService::new(self.http.clone())
    }
}

/// Builder for creating an Azure Speech client.
pub struct ClientBuilder {
    subscription_key: String,
    region: String,
    token_url: Option<String>,
    tts_url: Option<String>,
    output_format: OutputFormat,
    timeout: Duration,
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new(subscription_key: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            region: region.into(),
            token_url: None,
            tts_url: None,
            output_format: OutputFormat::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the token issuance URL derived from the region.
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    /// Overrides the synthesis URL derived from the region.
    pub fn tts_url(mut self, url: impl Into<String>) -> Self {
        self.tts_url = Some(url.into());
        self
    }

    /// Sets the audio output format.
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        if self.subscription_key.trim().is_empty() {
            return Err(Error::Config("subscription_key must be non-empty".to_string()));
        }
        let region = self.region.trim().to_ascii_lowercase();
        if region.is_empty() {
            return Err(Error::Config("region must be non-empty".to_string()));
        }
        if !region.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::Config(format!("invalid region: {:?}", self.region)));
        }

        let token_url = self.token_url.unwrap_or_else(|| {
            format!("https://{region}.api.cognitive.microsoft.com/sts/v1.0/issueToken")
        });
        let tts_url = self.tts_url.unwrap_or_else(|| {
            format!("https://{region}.tts.speech.microsoft.com/cognitiveservices/v1")
        });

        let http = HttpClient::new(
            self.subscription_key,
            token_url,
            tts_url,
            self.output_format,
            self.timeout,
        )?;

        Ok(Client {
            http: Arc::new(http),
            region,
        })
    }
}
