//! Panic-free field access for loosely-structured feed documents.
//!
//! Feed parsers hand back nested mappings where any field may be missing or
//! carry an unexpected type. Everything here turns "missing" into `None` so
//! callers branch on presence instead of handling errors.

use serde_json::Value;

use crate::error::{FeedError, Result};
use crate::models::FeedDocument;

/// Look up `key` in `record`
///
/// Returns `None` when `record` is not a mapping, when the key is missing or
/// when the stored value is `null`.
pub fn get<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record
        .as_object()
        .and_then(|map| map.get(key))
        .filter(|value| !value.is_null())
}

/// Look up a textual field, `None` if absent or not text
pub fn get_str<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    get(record, key).and_then(Value::as_str)
}

/// Year of a record, taken from the first four characters of its `date`
pub fn find_year(record: &Value) -> Option<String> {
    get_str(record, "date").and_then(year_prefix)
}

/// First four characters of an ISO date, `None` for shorter input
pub(crate) fn year_prefix(date: &str) -> Option<String> {
    if date.chars().count() < 4 {
        return None;
    }
    Some(date.chars().take(4).collect())
}

/// Total number of results reported by an API-kind feed
pub fn total_result_count(document: &FeedDocument) -> Result<u64> {
    let feed = document
        .feed
        .as_ref()
        .ok_or_else(|| FeedError::MalformedFeed("no feed has been returned".to_string()))?;

    let total = feed
        .total_results
        .as_deref()
        .ok_or_else(|| FeedError::MalformedFeed("total result count is missing".to_string()))?;

    total.trim().parse::<u64>().map_err(|_| {
        FeedError::MalformedFeed(format!("total result count '{}' is not a number", total))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeedInfo;
    use serde_json::json;

    #[test]
    fn test_get_absent_forms() {
        let record = json!({"title": "A", "link": null});
        assert_eq!(get(&record, "title"), Some(&json!("A")));
        assert_eq!(get(&record, "missing"), None);
        assert_eq!(get(&record, "link"), None);
        assert_eq!(get(&json!(["title"]), "title"), None);
        assert_eq!(get(&json!("title"), "title"), None);
    }

    #[test]
    fn test_get_str_rejects_non_text() {
        let record = json!({"title": 12, "link": "http://arxiv.org/abs/1"});
        assert_eq!(get_str(&record, "title"), None);
        assert_eq!(get_str(&record, "link"), Some("http://arxiv.org/abs/1"));
    }

    #[test]
    fn test_find_year() {
        assert_eq!(
            find_year(&json!({"date": "2017-03-01T00:00:00Z"})),
            Some("2017".to_string())
        );
        assert_eq!(find_year(&json!({"date": "2017"})), Some("2017".to_string()));
        assert_eq!(find_year(&json!({"date": "201"})), None);
        assert_eq!(find_year(&json!({"date": 2017})), None);
        assert_eq!(find_year(&json!({})), None);
    }

    #[test]
    fn test_total_result_count() {
        let document = FeedDocument {
            entries: None,
            feed: Some(FeedInfo {
                title: None,
                total_results: Some("42".to_string()),
            }),
        };
        assert_eq!(total_result_count(&document).unwrap(), 42);
    }

    #[test]
    fn test_total_result_count_errors() {
        let missing_feed = FeedDocument::default();
        assert!(matches!(
            total_result_count(&missing_feed),
            Err(FeedError::MalformedFeed(_))
        ));

        let missing_count = FeedDocument {
            entries: None,
            feed: Some(FeedInfo::default()),
        };
        assert!(matches!(
            total_result_count(&missing_count),
            Err(FeedError::MalformedFeed(_))
        ));

        let not_numeric = FeedDocument {
            entries: None,
            feed: Some(FeedInfo {
                title: None,
                total_results: Some("many".to_string()),
            }),
        };
        assert!(matches!(
            total_result_count(&not_numeric),
            Err(FeedError::MalformedFeed(_))
        ));
    }
}
