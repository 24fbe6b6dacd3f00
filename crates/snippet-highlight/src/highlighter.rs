//! The render-path entry points: compile once, highlight many snippets, never fail.

use crate::error::ResolveError;
use crate::options::ResolveOptions;
use crate::pattern::{compile, compile_pattern, escape};
use crate::query::Query;
use crate::server::ServerPattern;
use crate::spans::{Segment, extract_spans, find_matches};
use onig::Regex;
use std::sync::Arc;

/// Highlights snippets for one query.
///
/// If the query cannot be turned into a pattern (malformed regex, non-numeric length, empty
/// argument, ...), the highlighter is *inactive* and every snippet comes back as a single plain
/// segment.
#[derive(Debug, Clone)]
pub struct Highlighter {
    query: Query,
    regex: Option<Arc<Regex>>,
}

impl Highlighter {
    /// Builds a highlighter, logging and swallowing resolution errors.
    pub fn new(query: Query, server: Option<&ServerPattern>, options: &ResolveOptions) -> Self {
        let regex = match compile_pattern(server, query.mode, &query.argument, options) {
            Ok(regex) => Some(Arc::new(regex)),
            Err(err) => {
                log::debug!("highlighting disabled for query '{query}': {err}");
                None
            }
        };
        Self { query, regex }
    }

    /// Builds a highlighter, reporting why the query has no usable pattern.
    pub fn try_new(
        query: Query,
        server: Option<&ServerPattern>,
        options: &ResolveOptions,
    ) -> Result<Self, ResolveError> {
        let regex = compile_pattern(server, query.mode, &query.argument, options)?;
        Ok(Self {
            query,
            regex: Some(Arc::new(regex)),
        })
    }

    /// Parses a raw `glyph:argument` query and an optional raw backend pattern.
    pub fn from_raw(raw_query: &str, server_pattern: &str, options: &ResolveOptions) -> Self {
        let server = ServerPattern::parse(server_pattern);
        Self::new(Query::parse(raw_query), server.as_ref(), options)
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Returns `true` if a pattern was resolved.
    pub fn is_active(&self) -> bool {
        self.regex.is_some()
    }

    /// Splits `text` into plain and matched segments.
    pub fn highlight(&self, text: &str) -> Vec<Segment> {
        match &self.regex {
            Some(regex) => extract_spans(text, regex),
            None => vec![Segment::plain(text)],
        }
    }

    /// Number of matched spans in `text`.
    pub fn match_count(&self, text: &str) -> usize {
        self.regex
            .as_ref()
            .map_or(0, |regex| find_matches(text, regex).len())
    }
}

/// One-shot highlighting of `text` for a raw query and raw backend pattern.
pub fn highlight_match(
    text: &str,
    raw_query: &str,
    server_pattern: &str,
    options: &ResolveOptions,
) -> Vec<Segment> {
    Highlighter::from_raw(raw_query, server_pattern, options).highlight(text)
}

/// Case-insensitive highlighting of a plain search term, as used for in-page search.
pub fn highlight_literal(text: &str, term: &str) -> Vec<Segment> {
    let term = term.trim();
    if term.is_empty() {
        return vec![Segment::plain(text)];
    }

    match compile(&escape(term), &ResolveOptions::default()) {
        Ok(regex) => extract_spans(text, &regex),
        Err(err) => {
            log::debug!("literal highlight failed for '{term}': {err}");
            vec![Segment::plain(text)]
        }
    }
}
