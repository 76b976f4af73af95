//! Title and author text formatting for display.

use scraper::{ElementRef, Html};

use crate::models::AuthorRecord;

/// Marker appended when an author list is cut short
pub const ET_AL: &str = "et al.";

/// Separator between author names
const AUTHOR_SEPARATOR: &str = ", ";

/// Start of the arXiv identifier that RSS feeds append to titles
const ARXIV_ID_MARKER: &str = " (arXiv:";

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Escape `&`, `<` and `>` for markup-aware display
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Clean a raw title for display
///
/// Newlines are removed, the double spaces this leaves behind are collapsed
/// and the result is HTML-escaped.
pub fn clean_title(raw: Option<&str>) -> Option<String> {
    let title = raw?.replace('\n', "").replace("  ", " ");
    Some(escape_html(&title))
}

/// Drop the ` (arXiv:...)` suffix from an RSS title
pub fn strip_arxiv_id_suffix(title: Option<String>) -> Option<String> {
    title.map(|mut title| {
        if let Some(index) = title.find(ARXIV_ID_MARKER) {
            title.truncate(index);
        }
        title
    })
}

/// Join author names, keeping at most `cap` of them
///
/// Once `cap` names are in and another record follows, the rest collapse
/// into [`ET_AL`]. Records without a name are skipped. Returns `None` when
/// there is no list or nothing was collected.
pub fn truncate_author_list(records: Option<&[AuthorRecord]>, cap: usize) -> Option<String> {
    let records = records?;
    let mut names: Vec<&str> = Vec::with_capacity(cap.min(records.len()));
    let mut truncated = false;

    for record in records {
        if names.len() >= cap {
            truncated = true;
            break;
        }
        if let Some(name) = record.name.as_deref() {
            names.push(name);
        }
    }

    let mut authors = names.join(AUTHOR_SEPARATOR);
    if truncated {
        if !authors.is_empty() {
            authors.push_str(AUTHOR_SEPARATOR);
        }
        authors.push_str(ET_AL);
    }

    if authors.is_empty() {
        None
    } else {
        Some(authors)
    }
}

/// Byte offset of the `n`-th comma (1-indexed), `None` if there are fewer
pub fn nth_comma_offset(text: &str, n: usize) -> Option<usize> {
    let n = n.checked_sub(1)?;
    text.match_indices(',').nth(n).map(|(offset, _)| offset)
}

/// Cut a pre-joined author string after `cap` authors
pub fn truncate_author_string(authors: &str, cap: usize) -> String {
    match nth_comma_offset(authors, cap) {
        Some(offset) => format!("{}{}{}", &authors[..offset], AUTHOR_SEPARATOR, ET_AL),
        None => authors.to_string(),
    }
}

/// Replace every `<a>` element with its inner content
///
/// The input is parsed as an HTML fragment. Other elements are written back
/// unchanged and text is re-escaped.
pub fn strip_hyperlinks(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    let mut out = String::with_capacity(markup.len());
    write_children(fragment.root_element(), &mut out);
    out
}

fn write_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            write_element(child_element, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(&escape_html(&text.text));
        } else if let Some(comment) = child.value().as_comment() {
            out.push_str("<!--");
            out.push_str(&comment.comment);
            out.push_str("-->");
        }
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if name == "a" {
        write_children(element, out);
        return;
    }

    out.push('<');
    out.push_str(name);
    for (attr, value) in element.value().attrs() {
        out.push(' ');
        out.push_str(attr);
        out.push_str("=\"");
        out.push_str(&value.replace('&', "&amp;").replace('"', "&quot;"));
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}
