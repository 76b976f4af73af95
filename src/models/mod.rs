//! Core data models for feeds, searches and categories.

mod category;
mod feed;
mod search;

pub use category::CategoryRegistry;
pub use feed::{AuthorRecord, FeedDocument, FeedEntry, FeedInfo, FeedKind, NormalizedResult};
pub use search::{SearchField, SearchResponse, SearchSpec, SearchWords};
