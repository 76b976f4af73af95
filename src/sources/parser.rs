//! Raw feed bytes to [`FeedDocument`].

use feed_rs::model::{Entry, Link};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Result;
use crate::models::{AuthorRecord, FeedDocument, FeedEntry, FeedInfo};

/// Local name of the OpenSearch total in arXiv API responses
const TOTAL_RESULTS_TAG: &[u8] = b"totalResults";

/// Parse an Atom or RSS body into a [`FeedDocument`]
pub fn parse_feed(bytes: &[u8]) -> Result<FeedDocument> {
    let feed = feed_rs::parser::parse(bytes)?;

    let info = FeedInfo {
        title: feed.title.map(|t| t.content),
        total_results: read_total_results(bytes),
    };

    Ok(FeedDocument {
        entries: Some(feed.entries.iter().map(convert_entry).collect()),
        feed: Some(info),
    })
}

fn convert_entry(entry: &Entry) -> FeedEntry {
    let names: Vec<&str> = entry.authors.iter().map(|a| a.name.as_str()).collect();

    FeedEntry {
        title: entry.title.as_ref().map(|t| t.content.clone()),
        authors: Some(names.iter().map(|n| AuthorRecord::named(*n)).collect()),
        author: if names.is_empty() {
            None
        } else {
            Some(names.join(", "))
        },
        link: primary_link(&entry.links).map(|l| l.href.clone()),
        date: entry
            .published
            .or(entry.updated)
            .map(|d| d.to_rfc3339()),
    }
}

fn primary_link(links: &[Link]) -> Option<&Link> {
    links
        .iter()
        .find(|l| l.rel.as_deref() == Some("alternate"))
        .or_else(|| links.first())
}

/// Text of the `opensearch:totalResults` element, if the body has one
///
/// Unreadable XML yields `None`; the caller decides whether a missing
/// count is an error.
pub fn read_total_results(bytes: &[u8]) -> Option<String> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut inside = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.local_name().as_ref() == TOTAL_RESULTS_TAG => inside = true,
            Ok(Event::Text(text)) if inside => {
                return Some(String::from_utf8_lossy(&text).trim().to_string());
            }
            Ok(Event::End(_)) if inside => return None,
            Ok(Event::Eof) | Err(_) => return None,
            _ => {}
        }
        buf.clear();
    }
}
