//! Search request and response models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::NormalizedResult;

/// Field of the arXiv advanced search
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchField {
    Author,
    Title,
    Abstract,
    Comment,
    JournalRef,
    Category,
    ReportNumber,
    Identity,
}

impl SearchField {
    /// All recognized fields
    pub const ALL: [SearchField; 8] = [
        SearchField::Author,
        SearchField::Title,
        SearchField::Abstract,
        SearchField::Comment,
        SearchField::JournalRef,
        SearchField::Category,
        SearchField::ReportNumber,
        SearchField::Identity,
    ];

    /// Query prefix used by the arXiv API for this field
    pub fn prefix(&self) -> &'static str {
        match self {
            SearchField::Author => "au:",
            SearchField::Title => "ti:",
            SearchField::Abstract => "abs:",
            SearchField::Comment => "co:",
            SearchField::JournalRef => "jr:",
            SearchField::Category => "cat:",
            SearchField::ReportNumber => "rn:",
            SearchField::Identity => "id:",
        }
    }

    /// Key of the field as used in search specs
    pub fn key(&self) -> &'static str {
        match self {
            SearchField::Author => "author",
            SearchField::Title => "title",
            SearchField::Abstract => "abstract",
            SearchField::Comment => "comment",
            SearchField::JournalRef => "journal-ref",
            SearchField::Category => "category",
            SearchField::ReportNumber => "report-number",
            SearchField::Identity => "identity",
        }
    }

    /// Look a field up by its key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Field values of an advanced search
///
/// A spec is only usable when at least one value is a non-empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSpec {
    fields: BTreeMap<SearchField, Option<String>>,
}

impl SearchSpec {
    /// Create an empty spec
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value
    pub fn field(mut self, field: SearchField, value: impl Into<String>) -> Self {
        self.fields.insert(field, Some(value.into()));
        self
    }

    /// Set a field value when one is given
    pub fn field_opt(mut self, field: SearchField, value: Option<String>) -> Self {
        self.fields.insert(field, value);
        self
    }

    /// Set author
    pub fn author(self, author: impl Into<String>) -> Self {
        self.field(SearchField::Author, author)
    }

    /// Set title
    pub fn title(self, title: impl Into<String>) -> Self {
        self.field(SearchField::Title, title)
    }

    /// Set abstract
    pub fn abstract_text(self, abstract_text: impl Into<String>) -> Self {
        self.field(SearchField::Abstract, abstract_text)
    }

    /// Set category
    pub fn category(self, category: impl Into<String>) -> Self {
        self.field(SearchField::Category, category)
    }

    /// Value of a field, if set
    pub fn get(&self, field: SearchField) -> Option<&str> {
        self.fields.get(&field).and_then(|v| v.as_deref())
    }

    /// Fields carrying a non-empty value
    pub fn terms(&self) -> impl Iterator<Item = (SearchField, &str)> {
        self.fields.iter().filter_map(|(field, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (*field, v))
        })
    }

    /// Whether at least one field carries a non-empty value
    pub fn is_valid(&self) -> bool {
        self.terms().next().is_some()
    }
}

/// Keywords of a simple search: one string or an ordered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchWords {
    Single(String),
    Many(Vec<String>),
}

impl SearchWords {
    /// Iterate over the words in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let words: &[String] = match self {
            SearchWords::Single(word) => std::slice::from_ref(word),
            SearchWords::Many(words) => words,
        };
        words.iter().map(String::as_str)
    }
}

impl From<&str> for SearchWords {
    fn from(word: &str) -> Self {
        SearchWords::Single(word.to_string())
    }
}

impl From<String> for SearchWords {
    fn from(word: String) -> Self {
        SearchWords::Single(word)
    }
}

impl From<Vec<String>> for SearchWords {
    fn from(words: Vec<String>) -> Self {
        SearchWords::Many(words)
    }
}

impl From<Vec<&str>> for SearchWords {
    fn from(words: Vec<&str>) -> Self {
        SearchWords::Many(words.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SearchWords {
    fn from(words: [&str; N]) -> Self {
        SearchWords::Many(words.iter().map(|w| w.to_string()).collect())
    }
}

/// Normalized results of one feed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Results in feed order
    pub results: Vec<NormalizedResult>,

    /// Total number of results (API feeds only)
    pub total_results: Option<u64>,

    /// Query URL that was executed
    pub query: String,
}

impl SearchResponse {
    /// Create a new search response
    pub fn new(results: Vec<NormalizedResult>, query: impl Into<String>) -> Self {
        Self {
            results,
            total_results: None,
            query: query.into(),
        }
    }

    /// Set total results
    pub fn total_results(mut self, total: u64) -> Self {
        self.total_results = Some(total);
        self
    }

    /// Whether more results are available beyond this page
    pub fn has_more(&self, start: usize) -> bool {
        self.total_results
            .is_some_and(|total| ((start + self.results.len()) as u64) < total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_field_keys() {
        for field in SearchField::ALL {
            assert_eq!(SearchField::from_key(field.key()), Some(field));
        }
        assert_eq!(SearchField::from_key("journal-ref"), Some(SearchField::JournalRef));
        assert_eq!(SearchField::from_key("journal"), None);
        assert_eq!(SearchField::Author.prefix(), "au:");
    }

    #[test]
    fn test_search_spec_validity() {
        assert!(!SearchSpec::new().is_valid());
        assert!(!SearchSpec::new().author("").is_valid());
        assert!(!SearchSpec::new()
            .field_opt(SearchField::Title, None)
            .is_valid());

        let spec = SearchSpec::new().author("").title("Graphs");
        assert!(spec.is_valid());
        assert_eq!(
            spec.terms().collect::<Vec<_>>(),
            vec![(SearchField::Title, "Graphs")]
        );
        assert_eq!(spec.get(SearchField::Author), Some(""));
    }

    #[test]
    fn test_search_words_iter() {
        let single = SearchWords::from("graphs");
        assert_eq!(single.iter().collect::<Vec<_>>(), vec!["graphs"]);

        let many = SearchWords::from(["a", "b"]);
        assert_eq!(many.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_search_response_has_more() {
        let response = SearchResponse::new(vec![NormalizedResult::default(); 5], "q")
            .total_results(12);
        assert!(response.has_more(0));
        assert!(response.has_more(6));
        assert!(!response.has_more(7));
        assert!(!SearchResponse::new(Vec::new(), "q").has_more(0));
    }
}
