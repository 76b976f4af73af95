//! arXiv client: query building, retrieval and normalization in one place.

use std::sync::Arc;

use crate::config::{ArxivConfig, Config};
use crate::error::Result;
use crate::models::{FeedKind, SearchResponse, SearchSpec, SearchWords};
use crate::normalize::normalize;
use crate::query::{build_advanced_search, build_category_feed, build_simple_search};
use crate::sources::{parse_feed, HttpTransport, Transport};
use crate::utils::fields::total_result_count;

/// arXiv feed client
///
/// Supports:
/// - Keyword search over all fields
/// - Advanced field-by-field search
/// - Daily submissions of a category
#[derive(Debug, Clone)]
pub struct ArxivClient {
    transport: Arc<dyn Transport>,
    config: ArxivConfig,
}

impl ArxivClient {
    /// Create a client that talks HTTP with the given settings
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(&config.http)?),
            config: config.arxiv.clone(),
        })
    }

    /// Create with a custom transport (for testing)
    pub fn with_transport(transport: Arc<dyn Transport>, config: ArxivConfig) -> Self {
        Self { transport, config }
    }

    /// Settings in use
    pub fn config(&self) -> &ArxivConfig {
        &self.config
    }

    /// Keyword search through the API feed
    pub async fn search(
        &self,
        words: impl Into<SearchWords>,
        start: usize,
        max_results: usize,
    ) -> Result<SearchResponse> {
        let url = build_simple_search(words, &self.config.api_url, start, max_results)?;
        self.run(url, FeedKind::Api).await
    }

    /// Field-by-field search through the API feed
    pub async fn advanced_search(&self, spec: &SearchSpec) -> Result<SearchResponse> {
        let url = build_advanced_search(spec, &self.config.api_url)?;
        let url = format!("{}&max_results={}", url, self.config.max_results);
        self.run(url, FeedKind::Api).await
    }

    /// Today's submissions of `category` through the RSS feed
    pub async fn daily_submissions(&self, category: &str) -> Result<SearchResponse> {
        let url = build_category_feed(category, &self.config.rss_url)?;
        self.run(url, FeedKind::Rss).await
    }

    async fn run(&self, url: String, kind: FeedKind) -> Result<SearchResponse> {
        tracing::info!(transport = self.transport.id(), %kind, %url, "querying arXiv");

        let body = self.transport.fetch(&url).await?;
        let document = parse_feed(&body)?;
        let results = normalize(&document, kind, self.config.max_authors)?;

        tracing::debug!(results = results.len(), "feed normalized");

        let response = SearchResponse::new(results, url);
        match kind {
            FeedKind::Api => Ok(response.total_results(total_result_count(&document)?)),
            FeedKind::Rss => Ok(response),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeedError;
    use crate::sources::{MockReply, MockTransport};

    fn client(mock: Arc<MockTransport>) -> ArxivClient {
        ArxivClient::with_transport(mock, ArxivConfig::default())
    }

    #[tokio::test]
    async fn test_empty_search_skips_transport() {
        let mock = Arc::new(MockTransport::with_body(""));
        let err = client(mock.clone()).search("", 0, 10).await.unwrap_err();
        assert!(matches!(err, FeedError::EmptySearch));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_category_skips_transport() {
        let mock = Arc::new(MockTransport::with_body(""));
        let err = client(mock.clone())
            .daily_submissions("cs.XX")
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::UnknownCategory(_)));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_transport_errors_pass_through() {
        let mock = Arc::new(MockTransport::with_reply(MockReply::Status(500)));
        let err = client(mock.clone()).search("quark", 0, 10).await.unwrap_err();
        assert!(matches!(err, FeedError::Api(_)));

        mock.set_reply(MockReply::Unreachable);
        let err = client(mock.clone())
            .daily_submissions("hep-th")
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::Network(_)));
        assert_eq!(
            mock.requests(),
            vec![
                "http://export.arxiv.org/api/query?search_query=all:quark&start=0&max_results=10"
                    .to_string(),
                "http://export.arxiv.org/rss/hep-th".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_advanced_search_link() {
        let mock = Arc::new(MockTransport::with_reply(MockReply::Unreachable));
        let _ = client(mock.clone())
            .advanced_search(&SearchSpec::new().author("Smith"))
            .await;
        assert_eq!(
            mock.requests(),
            vec!["http://export.arxiv.org/api/query?search_query=au:Smith&max_results=10".to_string()]
        );
    }
}
