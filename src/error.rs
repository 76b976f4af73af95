//! Error taxonomy shared by the query builder, the normalizer and the transport.

/// Errors produced while building queries, fetching feeds or normalizing them
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Wrong shape or range supplied to an operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Indexed lookup outside of the valid range
    #[error("Index {index} is out of range (count is {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// A search-building call produced no usable terms
    #[error("No arguments have been provided to the search")]
    EmptySearch,

    /// Category code not present in the registry
    #[error("Unknown arXiv category: {0}")]
    UnknownCategory(String),

    /// Feed document lacks an expected field or has the wrong shape
    #[error("Malformed feed: {0}")]
    MalformedFeed(String),

    /// The feed carried no entries at all
    #[error("No entries have been found during the search")]
    NoEntries,

    /// Every entry was filtered out or empty
    #[error("No results left after processing the feed")]
    NoResults,

    /// Client-side request error (bad URL or scheme)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Connection or IO failure while talking to the server
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("API error: {0}")]
    Api(String),
}

impl FeedError {
    /// Whether this error originated at the transport boundary
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FeedError::InvalidRequest(_) | FeedError::Network(_) | FeedError::Api(_)
        )
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            FeedError::InvalidRequest(err.to_string())
        } else if let Some(status) = err.status() {
            FeedError::Api(format!("arXiv returned status: {}", status))
        } else {
            FeedError::Network(err.to_string())
        }
    }
}

impl From<feed_rs::parser::ParseFeedError> for FeedError {
    fn from(err: feed_rs::parser::ParseFeedError) -> Self {
        FeedError::MalformedFeed(format!("feed: {}", err))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FeedError>;
