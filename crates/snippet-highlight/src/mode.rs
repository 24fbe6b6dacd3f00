//! Search modes and their presentation glyphs.
//!
//! Each query typed into the search bar may start with a glyph (an emoji) followed by `:`.
//! The glyph only selects a [`SearchMode`]; all behavior hangs off the enum.

use crate::error::UnknownMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emoji variation selector. Some keyboards and copy/paste paths drop or add it.
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// How the argument of a query is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Words ending with the argument.
    Suffix,
    /// Words starting with the argument.
    Prefix,
    /// Words of at least N characters.
    MinLength,
    /// Words of at most N characters.
    MaxLength,
    /// Words of exactly N characters.
    ExactLength,
    /// Words ending with any of a list of suffixes.
    SuffixList,
    /// Words containing a character repeated at least N times in a row.
    RepeatCount,
    /// The argument as a whole word.
    ExactWord,
    /// A user-supplied word regex.
    RawWordRegex,
    /// The argument as a literal phrase.
    ExactPhrase,
    /// Sentences starting with the argument (server pattern).
    SentenceStartsWith,
    /// Sentences ending with the argument (server pattern).
    SentenceEndsWith,
    /// Sentences containing the argument as a whole word.
    ContainsWord,
    /// Sentences containing any of a comma-separated list of words.
    ContainsAnyOf,
    /// A user-supplied sentence regex, used verbatim.
    StructuredSentence,
    /// A raw sentence regex (server pattern).
    RawSentenceRegex,
}

impl SearchMode {
    /// All modes, in cheat-sheet order.
    pub const ALL: [SearchMode; 16] = [
        SearchMode::Suffix,
        SearchMode::Prefix,
        SearchMode::MinLength,
        SearchMode::MaxLength,
        SearchMode::ExactLength,
        SearchMode::SuffixList,
        SearchMode::RepeatCount,
        SearchMode::ExactWord,
        SearchMode::RawWordRegex,
        SearchMode::ExactPhrase,
        SearchMode::SentenceStartsWith,
        SearchMode::SentenceEndsWith,
        SearchMode::ContainsWord,
        SearchMode::ContainsAnyOf,
        SearchMode::StructuredSentence,
        SearchMode::RawSentenceRegex,
    ];

    /// Canonical glyph shown in the UI.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Suffix => "\u{1F4C4}",
            Self::Prefix => "\u{270F}\u{FE0F}",
            Self::MinLength => "\u{1F4C2}",
            Self::MaxLength => "\u{1F4D5}",
            Self::ExactLength => "\u{1F4CF}",
            Self::SuffixList => "\u{1F58C}\u{FE0F}",
            Self::RepeatCount => "\u{1F4CE}",
            Self::ExactWord => "\u{1F4D6}",
            Self::RawWordRegex => "\u{1F527}",
            Self::ExactPhrase => "\u{1F4DD}",
            Self::SentenceStartsWith => "\u{1F4DA}",
            Self::SentenceEndsWith => "\u{1F4CC}",
            Self::ContainsWord => "\u{1F50D}",
            Self::ContainsAnyOf => "\u{1F58B}\u{FE0F}",
            Self::StructuredSentence => "\u{1F58D}\u{FE0F}",
            Self::RawSentenceRegex => "\u{1F6E0}\u{FE0F}",
        }
    }

    /// Alternative glyphs accepted on input (used by the search backend's query syntax).
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::SentenceStartsWith => &["\u{1F58C}\u{FE0F}S"],
            Self::RawSentenceRegex => &["\u{1F527}S"],
            _ => &[],
        }
    }

    /// Stable kebab-case name, also accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Suffix => "suffix",
            Self::Prefix => "prefix",
            Self::MinLength => "min-length",
            Self::MaxLength => "max-length",
            Self::ExactLength => "exact-length",
            Self::SuffixList => "suffix-list",
            Self::RepeatCount => "repeat-count",
            Self::ExactWord => "exact-word",
            Self::RawWordRegex => "raw-word-regex",
            Self::ExactPhrase => "exact-phrase",
            Self::SentenceStartsWith => "sentence-starts-with",
            Self::SentenceEndsWith => "sentence-ends-with",
            Self::ContainsWord => "contains-word",
            Self::ContainsAnyOf => "contains-any-of",
            Self::StructuredSentence => "structured-sentence",
            Self::RawSentenceRegex => "raw-sentence-regex",
        }
    }

    /// Short help text for the cheat sheet.
    pub fn description(self) -> &'static str {
        match self {
            Self::Suffix => "Ends with a suffix",
            Self::Prefix => "Starts with a prefix",
            Self::MinLength => "Minimum word length",
            Self::MaxLength => "Maximum word length",
            Self::ExactLength => "Exact word length",
            Self::SuffixList => "Ends in any listed suffix",
            Self::RepeatCount => "Repeated characters",
            Self::ExactWord => "Exact word match",
            Self::RawWordRegex => "Raw custom regex",
            Self::ExactPhrase => "Exact sentence phrase",
            Self::SentenceStartsWith => "Sentence starts with",
            Self::SentenceEndsWith => "Sentence ends with",
            Self::ContainsWord => "Sentence contains word",
            Self::ContainsAnyOf => "Sentence contains any listed words",
            Self::StructuredSentence => "Structured sentence pattern",
            Self::RawSentenceRegex => "Raw sentence regex",
        }
    }

    /// `(glyph, description)` rows for the help panel, in display order.
    pub fn cheat_sheet() -> Vec<(&'static str, &'static str)> {
        Self::ALL
            .iter()
            .map(|mode| (mode.glyph(), mode.description()))
            .collect()
    }

    /// Returns `true` if the argument must be a positive integer.
    pub fn takes_number(self) -> bool {
        matches!(
            self,
            Self::MinLength | Self::MaxLength | Self::ExactLength | Self::RepeatCount
        )
    }

    /// Returns `true` if the authoritative pattern comes from the search backend.
    pub fn uses_server_pattern(self) -> bool {
        matches!(
            self,
            Self::SentenceStartsWith | Self::SentenceEndsWith | Self::RawSentenceRegex
        )
    }

    /// Looks up a mode by glyph, ignoring emoji variation selectors.
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        let wanted = strip_variation_selectors(glyph.trim());
        if wanted.is_empty() {
            return None;
        }

        Self::ALL.iter().copied().find(|mode| {
            strip_variation_selectors(mode.glyph()) == wanted
                || mode
                    .aliases()
                    .iter()
                    .any(|alias| strip_variation_selectors(alias) == wanted)
        })
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchMode {
    type Err = UnknownMode;

    /// Accepts either a kebab-case name (`min-length`) or a glyph.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(trimmed))
            .or_else(|| Self::from_glyph(trimmed))
            .ok_or_else(|| UnknownMode(trimmed.to_string()))
    }
}

fn strip_variation_selectors(s: &str) -> String {
    s.chars().filter(|&ch| ch != VARIATION_SELECTOR).collect()
}
