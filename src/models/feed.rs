//! Parsed feed documents and the normalized results built from them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::error::{FeedError, Result};
use crate::utils::fields;

/// Which arXiv feed a document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    /// Atom feed returned by the search API
    Api,
    /// Daily-submissions RSS feed
    Rss,
}

impl FeedKind {
    /// Returns the display name of the feed kind
    pub fn name(&self) -> &'static str {
        match self {
            FeedKind::Api => "API",
            FeedKind::Rss => "RSS",
        }
    }
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FeedKind {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "API" | "api" => Ok(FeedKind::Api),
            "RSS" | "rss" => Ok(FeedKind::Rss),
            other => Err(FeedError::InvalidArgument(format!(
                "wrong feed type '{}', it can only be API or RSS",
                other
            ))),
        }
    }
}

/// A parsed feed: its entries plus feed-level metadata
///
/// `entries` is `None` when the parser produced no entry list at all, which
/// is distinct from an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedDocument {
    pub entries: Option<Vec<FeedEntry>>,
    pub feed: Option<FeedInfo>,
}

impl FeedDocument {
    /// Build a document from the generic mapping produced by a feed parser
    ///
    /// Structural problems that would make normalization impossible are
    /// reported as [`FeedError::MalformedFeed`]; missing optional fields are
    /// simply left as `None`.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(FeedError::MalformedFeed(
                "the document is not a mapping".to_string(),
            ));
        }

        // An explicit null is a corrupted list, not a missing one.
        let entries = match value.as_object().and_then(|map| map.get("entries")) {
            None => None,
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .map(FeedEntry::from_value)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Some(_) => {
                return Err(FeedError::MalformedFeed(
                    "the field entries is corrupted".to_string(),
                ))
            }
        };

        let feed = match fields::get(value, "feed") {
            None => None,
            Some(info @ Value::Object(_)) => Some(FeedInfo::from_value(info)),
            Some(_) => {
                return Err(FeedError::MalformedFeed(
                    "the field feed is corrupted".to_string(),
                ))
            }
        };

        Ok(Self { entries, feed })
    }
}

/// Feed-level metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedInfo {
    /// Feed title
    pub title: Option<String>,

    /// Raw OpenSearch total result count, as delivered by the feed
    pub total_results: Option<String>,
}

impl FeedInfo {
    fn from_value(value: &Value) -> Self {
        let total_results = match fields::get(value, "opensearch_totalresults") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        Self {
            title: fields::get_str(value, "title").map(str::to_string),
            total_results,
        }
    }
}

/// A single feed entry; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Raw title text
    pub title: Option<String>,

    /// Individual authors (Atom search feed)
    pub authors: Option<Vec<AuthorRecord>>,

    /// Pre-joined author string with inline links (RSS feed)
    pub author: Option<String>,

    /// Abstract page URL
    pub link: Option<String>,

    /// Publication date (ISO format)
    pub date: Option<String>,
}

impl FeedEntry {
    fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(FeedError::MalformedFeed(
                "one of the entries is corrupted".to_string(),
            ));
        }

        let text = |key: &str| fields::get_str(value, key).map(str::to_string);

        Ok(Self {
            title: text("title"),
            authors: fields::get(value, "authors")
                .and_then(Value::as_array)
                .map(|list| list.iter().map(AuthorRecord::from_value).collect()),
            author: text("author"),
            link: text("link"),
            date: text("date"),
        })
    }

    /// Publication year, if the entry carries a usable date
    pub fn year(&self) -> Option<String> {
        self.date.as_deref().and_then(fields::year_prefix)
    }
}

/// One named author of an Atom entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub name: Option<String>,
}

impl AuthorRecord {
    /// Create a record with a known name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    fn from_value(value: &Value) -> Self {
        Self {
            name: fields::get_str(value, "name").map(str::to_string),
        }
    }
}

/// Display-ready entry produced by normalization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub title: Option<String>,
    pub authors: Option<String>,
    pub link: Option<String>,
}

impl NormalizedResult {
    /// True when the result carries no information at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.authors.is_none() && self.link.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feed_kind_from_str() {
        assert_eq!("API".parse::<FeedKind>().unwrap(), FeedKind::Api);
        assert_eq!("rss".parse::<FeedKind>().unwrap(), FeedKind::Rss);
        assert!(matches!(
            "ATOM".parse::<FeedKind>(),
            Err(FeedError::InvalidArgument(_))
        ));
        assert_eq!(FeedKind::Rss.to_string(), "RSS");
    }

    #[test]
    fn test_from_value_typed_fields() {
        let value = json!({
            "feed": {"title": "arXiv Query", "opensearch_totalresults": "42"},
            "entries": [{
                "title": "Paper",
                "authors": [{"name": "Ada"}, {"name": 3}, "Bob"],
                "link": "http://arxiv.org/abs/1",
                "date": "2020-01-01",
                "author": ["not", "text"]
            }]
        });

        let document = FeedDocument::from_value(&value).unwrap();
        let feed = document.feed.unwrap();
        assert_eq!(feed.total_results.as_deref(), Some("42"));
        assert_eq!(feed.title.as_deref(), Some("arXiv Query"));

        let entries = document.entries.unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.title.as_deref(), Some("Paper"));
        assert_eq!(entry.author, None);
        assert_eq!(entry.year().as_deref(), Some("2020"));
        assert_eq!(
            entry.authors.as_deref(),
            Some(
                &[
                    AuthorRecord::named("Ada"),
                    AuthorRecord::default(),
                    AuthorRecord::default()
                ][..]
            )
        );
    }

    #[test]
    fn test_from_value_numeric_total() {
        let document = FeedDocument::from_value(&json!({
            "feed": {"opensearch_totalresults": 7}
        }))
        .unwrap();
        assert_eq!(document.entries, None);
        assert_eq!(
            document.feed.and_then(|f| f.total_results).as_deref(),
            Some("7")
        );
    }

    #[test]
    fn test_from_value_shape_errors() {
        let cases = [
            json!(["entries"]),
            json!({"entries": "corrupted"}),
            json!({"entries": null}),
            json!({"entries": [{"title": "ok"}, 5]}),
            json!({"entries": [], "feed": "corrupted"}),
        ];

        for case in cases {
            assert!(
                matches!(
                    FeedDocument::from_value(&case),
                    Err(FeedError::MalformedFeed(_))
                ),
                "expected malformed feed for {}",
                case
            );
        }
    }

    #[test]
    fn test_normalized_result_is_empty() {
        assert!(NormalizedResult::default().is_empty());
        let with_link = NormalizedResult {
            link: Some("http://arxiv.org/abs/1".to_string()),
            ..Default::default()
        };
        assert!(!with_link.is_empty());
    }
}
