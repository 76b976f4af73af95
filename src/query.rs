//! Query string assembly for the arXiv API and RSS endpoints.
//!
//! All builders take the base link from the caller and only append to it, so
//! nothing here knows about hosts, schemes or transport settings.

use crate::error::{FeedError, Result};
use crate::models::{CategoryRegistry, SearchSpec, SearchWords};

/// Connector placed between search terms
pub const CONNECTOR: &str = "+AND+";

/// Field prefix of a keyword search term
const ALL_FIELD: &str = "all:";

fn encode_term(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Build a keyword search over all fields
///
/// Every non-blank word becomes an `all:` term; terms are joined with
/// [`CONNECTOR`] and followed by the `start`/`max_results` parameters.
pub fn build_simple_search(
    words: impl Into<SearchWords>,
    base_link: &str,
    start: usize,
    max_results: usize,
) -> Result<String> {
    let words = words.into();
    let terms: Vec<String> = words
        .iter()
        .filter(|word| !word.trim().is_empty())
        .map(|word| format!("{}{}", ALL_FIELD, encode_term(word)))
        .collect();

    if terms.is_empty() {
        return Err(FeedError::EmptySearch);
    }

    Ok(format!(
        "{}{}&start={}&max_results={}",
        base_link,
        terms.join(CONNECTOR),
        start,
        max_results
    ))
}

/// Build a field-by-field search from `spec`
pub fn build_advanced_search(spec: &SearchSpec, base_link: &str) -> Result<String> {
    let terms: Vec<String> = spec
        .terms()
        .map(|(field, value)| format!("{}{}", field.prefix(), encode_term(value)))
        .collect();

    if terms.is_empty() {
        return Err(FeedError::EmptySearch);
    }

    Ok(format!("{}{}", base_link, terms.join(CONNECTOR)))
}

/// Build the daily-submissions link for `category`
pub fn build_category_feed(category: &str, base_link: &str) -> Result<String> {
    if !CategoryRegistry::exists(category) {
        return Err(FeedError::UnknownCategory(category.to_string()));
    }

    Ok(format!("{}{}", base_link, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchField;

    const BASE: &str = "http://export.arxiv.org/api/query?search_query=";

    #[test]
    fn test_simple_search_two_words() {
        let link = build_simple_search(["a", "b"], BASE, 0, 5).unwrap();
        assert_eq!(link, format!("{}all:a+AND+all:b&start=0&max_results=5", BASE));
        assert!(!link.contains("+AND+&"));
    }

    #[test]
    fn test_simple_search_single_string() {
        let link = build_simple_search("electron", BASE, 10, 20).unwrap();
        assert_eq!(link, format!("{}all:electron&start=10&max_results=20", BASE));
    }

    #[test]
    fn test_simple_search_encodes_terms() {
        let link = build_simple_search("dark matter", BASE, 0, 1).unwrap();
        assert!(link.contains("all:dark%20matter"));
    }

    #[test]
    fn test_simple_search_empty() {
        assert!(matches!(
            build_simple_search(Vec::<String>::new(), BASE, 0, 10),
            Err(FeedError::EmptySearch)
        ));
        assert!(matches!(
            build_simple_search("", BASE, 0, 10),
            Err(FeedError::EmptySearch)
        ));
        assert!(matches!(
            build_simple_search(["", "  "], BASE, 0, 10),
            Err(FeedError::EmptySearch)
        ));
    }

    #[test]
    fn test_simple_search_skips_blank_words() {
        let link = build_simple_search(["", "quark"], BASE, 0, 10).unwrap();
        assert_eq!(link, format!("{}all:quark&start=0&max_results=10", BASE));
    }

    #[test]
    fn test_advanced_search_single_field() {
        let spec = SearchSpec::new().author("Smith");
        let link = build_advanced_search(&spec, BASE).unwrap();
        assert_eq!(link, format!("{}au:Smith", BASE));
        assert_eq!(link.matches("au:").count(), 1);
        assert!(!link.ends_with(CONNECTOR));
    }

    #[test]
    fn test_advanced_search_many_fields() {
        let spec = SearchSpec::new()
            .author("Smith")
            .title("")
            .category("hep-th")
            .field(SearchField::JournalRef, "PRL");
        let link = build_advanced_search(&spec, BASE).unwrap();
        let query = link.strip_prefix(BASE).unwrap();
        let mut terms: Vec<&str> = query.split(CONNECTOR).collect();
        terms.sort_unstable();
        assert_eq!(terms, vec!["au:Smith", "cat:hep-th", "jr:PRL"]);
    }

    #[test]
    fn test_advanced_search_empty() {
        assert!(matches!(
            build_advanced_search(&SearchSpec::new(), BASE),
            Err(FeedError::EmptySearch)
        ));
        assert!(matches!(
            build_advanced_search(&SearchSpec::new().author(""), BASE),
            Err(FeedError::EmptySearch)
        ));
    }

    #[test]
    fn test_category_feed() {
        let rss = "http://export.arxiv.org/rss/";
        assert_eq!(
            build_category_feed("cs.AI", rss).unwrap(),
            "http://export.arxiv.org/rss/cs.AI"
        );
        assert!(matches!(
            build_category_feed("cs.ai", rss),
            Err(FeedError::UnknownCategory(c)) if c == "cs.ai"
        ));
    }
}
