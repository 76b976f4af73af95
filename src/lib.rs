//! # arxiv-feed
//!
//! Query building and response normalization for the arXiv search API and
//! the daily-submissions RSS feeds.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (FeedDocument, SearchSpec, CategoryRegistry, etc.)
//! - [`query`]: Search and category link assembly
//! - [`normalize`]: Per-feed-kind extraction into display-ready results
//! - [`sources`]: Transports, feed parsing and the arXiv client
//! - [`utils`]: Field access and text formatting helpers
//! - [`config`]: Configuration management
//!
//! ## Example
//!
//! ```rust
//! use arxiv_feed::models::{FeedDocument, FeedEntry, FeedKind};
//! use arxiv_feed::normalize::normalize;
//!
//! let document = FeedDocument {
//!     entries: Some(vec![FeedEntry {
//!         title: Some("Fresh Paper (arXiv:2401.00001v1 [cs.AI])".to_string()),
//!         author: Some("<a href='u'>Ada Lovelace</a>".to_string()),
//!         ..Default::default()
//!     }]),
//!     feed: None,
//! };
//!
//! let results = normalize(&document, FeedKind::Rss, 3).unwrap();
//! assert_eq!(results[0].title.as_deref(), Some("Fresh Paper"));
//! assert_eq!(results[0].authors.as_deref(), Some("Ada Lovelace"));
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod query;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use error::{FeedError, Result};
pub use models::{CategoryRegistry, FeedDocument, FeedKind, NormalizedResult};
pub use sources::{ArxivClient, Transport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
