//! Normalization of parsed feeds into display-ready results.
//!
//! The two arXiv feed shapes differ in how titles and authors are encoded and
//! in whether revised papers show up again. Each shape gets its own
//! [`EntryExtractor`]; [`normalize`] only walks the entries.

use serde_json::Value;

use crate::error::{FeedError, Result};
use crate::models::{FeedDocument, FeedEntry, FeedKind, NormalizedResult};
use crate::utils::text::{
    clean_title, strip_arxiv_id_suffix, strip_hyperlinks, truncate_author_list,
    truncate_author_string,
};

/// Marker arXiv puts in the title of revised RSS entries
const UPDATE_MARKER: &str = "UPDATED";

/// Per-feed-kind extraction rules
pub trait EntryExtractor: Send + Sync {
    /// Display title of the entry
    fn extract_title(&self, entry: &FeedEntry) -> Option<String>;

    /// Author line, holding at most `cap` names
    fn extract_authors(&self, entry: &FeedEntry, cap: usize) -> Option<String>;

    /// Whether the entry is a revision that should be skipped
    fn is_update(&self, _entry: &FeedEntry) -> bool {
        false
    }
}

/// Rules for the Atom feed of the search API
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiExtractor;

impl EntryExtractor for ApiExtractor {
    fn extract_title(&self, entry: &FeedEntry) -> Option<String> {
        clean_title(entry.title.as_deref())
    }

    fn extract_authors(&self, entry: &FeedEntry, cap: usize) -> Option<String> {
        truncate_author_list(entry.authors.as_deref(), cap)
    }
}

/// Rules for the daily-submissions RSS feed
#[derive(Debug, Clone, Copy, Default)]
pub struct RssExtractor;

impl EntryExtractor for RssExtractor {
    fn extract_title(&self, entry: &FeedEntry) -> Option<String> {
        strip_arxiv_id_suffix(clean_title(entry.title.as_deref()))
    }

    fn extract_authors(&self, entry: &FeedEntry, cap: usize) -> Option<String> {
        entry
            .author
            .as_deref()
            .map(|author| strip_hyperlinks(&truncate_author_string(author, cap)))
    }

    // A missing title cannot be checked, so the entry counts as an update.
    fn is_update(&self, entry: &FeedEntry) -> bool {
        entry
            .title
            .as_deref()
            .map_or(true, |title| title.contains(UPDATE_MARKER))
    }
}

/// Extraction rules for `kind`
pub fn extractor_for(kind: FeedKind) -> &'static dyn EntryExtractor {
    match kind {
        FeedKind::Api => &ApiExtractor,
        FeedKind::Rss => &RssExtractor,
    }
}

/// Turn every usable entry of `document` into a [`NormalizedResult`]
///
/// Updates (RSS only) are skipped and entries without title, authors and
/// link are dropped; the remaining results keep the feed order.
///
/// # Errors
///
/// - [`FeedError::InvalidArgument`] if `author_cap` is zero
/// - [`FeedError::NoEntries`] if the document has no entry list
/// - [`FeedError::NoResults`] if nothing is left after filtering
pub fn normalize(
    document: &FeedDocument,
    kind: FeedKind,
    author_cap: usize,
) -> Result<Vec<NormalizedResult>> {
    if author_cap < 1 {
        return Err(FeedError::InvalidArgument(
            "the maximum number of authors has to be at least 1".to_string(),
        ));
    }

    let entries = document.entries.as_ref().ok_or(FeedError::NoEntries)?;
    let extractor = extractor_for(kind);

    let results: Vec<NormalizedResult> = entries
        .iter()
        .filter(|entry| !extractor.is_update(entry))
        .map(|entry| NormalizedResult {
            title: extractor.extract_title(entry),
            authors: extractor.extract_authors(entry, author_cap),
            link: entry.link.clone(),
        })
        .filter(|result| !result.is_empty())
        .collect();

    if results.is_empty() {
        return Err(FeedError::NoResults);
    }

    Ok(results)
}

/// [`normalize`] a generic parser mapping, checking its shape first
pub fn normalize_value(
    value: &Value,
    kind: FeedKind,
    author_cap: usize,
) -> Result<Vec<NormalizedResult>> {
    if author_cap < 1 {
        return Err(FeedError::InvalidArgument(
            "the maximum number of authors has to be at least 1".to_string(),
        ));
    }
    let document = FeedDocument::from_value(value)?;
    normalize(&document, kind, author_cap)
}
