//! Match highlighting for suggestion labels

use std::ops::Range;

use crate::matcher::find_match;
use crate::sanitize::escape;

/// Class applied to the matched segment in markup
pub const HIGHLIGHT_CLASS: &str = "highlight";

/// A label split around the first occurrence of the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight<'a> {
    Plain(&'a str),
    Marked {
        before: &'a str,
        matched: &'a str,
        after: &'a str,
    },
}

impl<'a> Highlight<'a> {
    /// Split `label` at the matched byte range, or keep it whole
    pub fn from_range(label: &'a str, range: Option<Range<usize>>) -> Self {
        match range {
            Some(range) => Highlight::Marked {
                before: &label[..range.start],
                matched: &label[range.clone()],
                after: &label[range.end..],
            },
            None => Highlight::Plain(label),
        }
    }

    /// Escaped markup, with the matched segment wrapped in a highlight span
    pub fn to_markup(&self) -> String {
        match self {
            Highlight::Plain(label) => escape(label),
            Highlight::Marked {
                before,
                matched,
                after,
            } => format!(
                "{}<span class=\"{}\">{}</span>{}",
                escape(before),
                HIGHLIGHT_CLASS,
                escape(matched),
                escape(after)
            ),
        }
    }
}

/// Byte range to highlight in `label` for `query`, trimmed
pub fn match_range(label: &str, query: &str) -> Option<Range<usize>> {
    find_match(label, query.trim())
}

/// Highlight the first case-insensitive occurrence of the trimmed query
pub fn highlight<'a>(label: &'a str, query: &str) -> Highlight<'a> {
    Highlight::from_range(label, match_range(label, query))
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
