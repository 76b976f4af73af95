//! Utility modules supporting feed normalization.
//!
//! - [`fields`]: panic-free lookup into loosely-structured feed documents
//! - [`text`]: title cleanup, author truncation and hyperlink stripping
//!
//! ```rust
//! use arxiv_feed::utils::text::{strip_hyperlinks, truncate_author_string};
//!
//! let authors = r#"<a href="u1">A</a>, <a href="u2">B</a>, <a href="u3">C</a>"#;
//! let line = strip_hyperlinks(&truncate_author_string(authors, 2));
//! assert_eq!(line, "A, B, et al.");
//! ```

pub mod fields;
pub mod text;

pub use fields::{find_year, total_result_count};
pub use text::{
    clean_title, strip_arxiv_id_suffix, strip_hyperlinks, truncate_author_list,
    truncate_author_string,
};
