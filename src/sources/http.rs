//! HTTP transport backed by reqwest.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::HttpConfig;
use crate::error::{FeedError, Result};
use crate::sources::Transport;

/// Shared HTTP client with sensible defaults
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport from the HTTP settings
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self { client })
    }
}

/// Reject links the client could never send
fn validate_url(url: &str) -> Result<url::Url> {
    let parsed = url::Url::parse(url.trim())
        .map_err(|e| FeedError::InvalidRequest(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(FeedError::InvalidRequest(format!(
            "invalid scheme: {}",
            scheme
        ))),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn id(&self) -> &str {
        "http"
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let url = validate_url(url)?;
        tracing::debug!(%url, "fetching feed");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/atom+xml, application/rss+xml, application/xml")
            .send()
            .await
            .map_err(|e| FeedError::Network(format!("Failed to fetch arXiv feed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Api(format!("arXiv returned status: {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FeedError::Network(format!("Failed to read response: {}", e)))?;

        tracing::debug!(bytes = bytes.len(), "feed received");
        Ok(bytes.to_vec())
    }
}
