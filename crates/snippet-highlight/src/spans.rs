//! Splitting a snippet into plain and matched segments.

use onig::{Regex, Region, SearchOptions};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A contiguous run of snippet text, either plain or matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    #[serde(rename = "isMatch")]
    pub is_match: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: true,
        }
    }
}

/// Concatenates segment texts. For segments from [`extract_spans`] this is the original text.
pub fn segments_to_string(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// Texts of the matched segments, in document order.
pub fn matched_texts(segments: &[Segment]) -> Vec<&str> {
    segments
        .iter()
        .filter(|s| s.is_match)
        .map(|s| s.text.as_str())
        .collect()
}

/// Finds all non-empty, non-overlapping matches of `regex` in `text`, left to right.
///
/// - Ranges are byte offsets on UTF-8 character boundaries, half-open (`[start, end)`).
/// - Empty matches are skipped; the scan then resumes one character further.
/// - Each search sees the whole text, so lookbehind works across the resume point.
pub fn find_matches(text: &str, regex: &Regex) -> Vec<Range<usize>> {
    let mut matches = Vec::new();
    let mut from = 0;

    while from <= text.len() {
        let Some((start, end)) = search_first(regex, text, from) else {
            break;
        };

        if start >= end {
            let Some(ch) = text[end..].chars().next() else {
                break;
            };
            from = end + ch.len_utf8();
            continue;
        }

        matches.push(start..end);
        from = end;
    }

    matches
}

/// Splits `text` into alternating plain and matched segments.
///
/// The concatenation of the returned segments is exactly `text`. Zero matches (or empty
/// input) yield one plain segment holding the whole text.
pub fn extract_spans(text: &str, regex: &Regex) -> Vec<Segment> {
    segments_from_ranges(text, &find_matches(text, regex))
}

/// Builds segments from sorted, non-overlapping byte ranges.
///
/// Touching ranges are merged into one matched segment, so plain and matched segments
/// always alternate.
pub(crate) fn segments_from_ranges(text: &str, ranges: &[Range<usize>]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut last = 0;

    for range in ranges {
        if range.start > last {
            segments.push(Segment::plain(&text[last..range.start]));
        }
        let matched = &text[range.clone()];
        if let Some(prev) = segments.last_mut().filter(|s| s.is_match && range.start == last) {
            prev.text.push_str(matched);
        } else {
            segments.push(Segment::matched(matched));
        }
        last = range.end;
    }

    if last < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[last..]));
    }

    segments
}

fn search_first(regex: &Regex, text: &str, from: usize) -> Option<(usize, usize)> {
    let mut region = Region::new();
    regex.search_with_options(
        text,
        from,
        text.len(),
        SearchOptions::SEARCH_OPTION_NONE,
        Some(&mut region),
    )?;
    region.pos(0)
}
