//! Patterns supplied by the search backend.
//!
//! The backend answers sentence-level queries with the regex it searched with. It may tag the
//! string with the kind of pattern it is:
//!
//! - `SENTENCE:<phrase>` - a literal phrase
//! - `SENTENCE_REGEX:<regex>` / `RAW_REGEX:<regex>` - a regex
//!
//! Untagged strings are regexes.

use crate::pattern::escape;

const PHRASE_TAG: &str = "SENTENCE:";
const REGEX_TAGS: [&str; 2] = ["SENTENCE_REGEX:", "RAW_REGEX:"];

/// A pattern computed by the search backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerPattern {
    /// A regex to be used as-is.
    Regex(String),
    /// A literal phrase; escaped before compiling.
    Phrase(String),
}

impl ServerPattern {
    /// Parses a backend pattern string. Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Some(phrase) = raw.strip_prefix(PHRASE_TAG) {
            let phrase = phrase.trim();
            return (!phrase.is_empty()).then(|| Self::Phrase(phrase.to_string()));
        }

        for tag in REGEX_TAGS {
            if let Some(regex) = raw.strip_prefix(tag) {
                let regex = regex.trim();
                return (!regex.is_empty()).then(|| Self::Regex(regex.to_string()));
            }
        }

        Some(Self::Regex(raw.to_string()))
    }

    /// Regex source for scanning a snippet.
    ///
    /// With `strip_anchors`, one leading `^` and one trailing unescaped `$` are removed.
    pub fn regex_source(&self, strip_anchors: bool) -> String {
        match self {
            Self::Phrase(phrase) => escape(phrase),
            Self::Regex(regex) if strip_anchors => strip_anchors_from(regex).to_string(),
            Self::Regex(regex) => regex.clone(),
        }
    }
}

/// Removes one leading `^` and one trailing `$` (unless the `$` is escaped).
pub(crate) fn strip_anchors_from(pattern: &str) -> &str {
    let pattern = pattern.strip_prefix('^').unwrap_or(pattern);
    match pattern.strip_suffix('$') {
        Some(rest) if !ends_with_escape(rest) => rest,
        _ => pattern,
    }
}

/// Returns `true` if `s` ends with an odd number of backslashes.
fn ends_with_escape(s: &str) -> bool {
    s.chars().rev().take_while(|&ch| ch == '\\').count() % 2 == 1
}
