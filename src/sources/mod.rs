//! Feed retrieval: transports, the feed parser and the arXiv client.
//!
//! The [`Transport`] trait is the seam between query building and the
//! network. [`HttpTransport`] talks to the real service, [`MockTransport`]
//! serves canned bodies in tests. [`ArxivClient`] ties a transport to the
//! query builders and the normalizer.

mod arxiv;
mod http;
pub mod mock;
mod parser;

pub use arxiv::ArxivClient;
pub use http::HttpTransport;
pub use mock::{MockReply, MockTransport};
pub use parser::{parse_feed, read_total_results};

use async_trait::async_trait;

use crate::error::Result;

/// Fetches the raw body behind a fully assembled query link
///
/// Implementations must keep three outcomes apart: a body, a client-side
/// request error ([`FeedError::InvalidRequest`](crate::FeedError::InvalidRequest))
/// and a server-side failure ([`FeedError::Network`](crate::FeedError::Network)
/// or [`FeedError::Api`](crate::FeedError::Api)). They do not retry.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Short identifier used in logs
    fn id(&self) -> &str;

    /// Fetch the body behind `url`
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
