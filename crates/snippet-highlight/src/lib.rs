//! `snippet-highlight` - search-mode query resolution and match highlighting for search snippets.
//!
//! A search query is a mode glyph plus an argument (`📄:ing`, `📏:3`, `🔧:^[bcd].*ing$`) or a bare
//! term. This crate turns the query, and optionally the regex the search backend reports for
//! sentence-level modes, into a single pattern and splits each result snippet into plain and
//! matched [`Segment`]s for rendering.
//!
//! The render path never fails: malformed queries produce the snippet as one plain segment.
//!
//! ```
//! use snippet_highlight::{ResolveOptions, highlight_match, matched_texts};
//!
//! let segments = highlight_match("cat dog mouse", "\u{1F4CF}:3", "", &ResolveOptions::default());
//! assert_eq!(matched_texts(&segments), vec!["cat", "dog"]);
//! ```

mod error;
mod highlighter;
mod mode;
mod options;
mod pattern;
mod query;
mod server;
mod spans;

pub use error::{ResolveError, UnknownMode};
pub use highlighter::{Highlighter, highlight_literal, highlight_match};
pub use mode::SearchMode;
pub use options::ResolveOptions;
pub use pattern::{compile, compile_pattern, escape, pattern_source};
pub use query::Query;
pub use server::ServerPattern;
pub use spans::{Segment, extract_spans, find_matches, matched_texts, segments_to_string};
