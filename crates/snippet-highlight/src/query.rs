//! Parsing of raw search-bar input.

use crate::mode::SearchMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed query: an optional mode plus the argument it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Query {
    pub mode: Option<SearchMode>,
    pub argument: String,
}

impl Query {
    pub fn new(mode: Option<SearchMode>, argument: impl Into<String>) -> Self {
        Self {
            mode,
            argument: argument.into(),
        }
    }

    /// Parses `glyph:argument` (or `mode-name:argument`) into a query.
    ///
    /// - The selector is everything before the first `:`; glyphs and their aliases are matched
    ///   whole, so `🖌️S:` selects the sentence mode rather than the suffix-list mode.
    /// - The argument is trimmed.
    /// - Input without a recognised selector becomes a bare argument with no mode.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if let Some((head, tail)) = raw.split_once(':')
            && let Ok(mode) = head.parse::<SearchMode>()
        {
            return Self::new(Some(mode), tail.trim());
        }

        Self::new(None, raw)
    }

    /// Returns `true` if there is neither a mode nor an argument.
    pub fn is_empty(&self) -> bool {
        self.mode.is_none() && self.argument.trim().is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            Some(mode) => write!(f, "{}:{}", mode.glyph(), self.argument),
            None => f.write_str(&self.argument),
        }
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
