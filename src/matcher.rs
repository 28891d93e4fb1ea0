//! Case-insensitive substring search
//!
//! Matching walks the label char by char so the returned range always
//! indexes the original label, even when lowercasing would change byte
//! lengths.

use std::ops::Range;

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte range of the first case-insensitive occurrence of `needle` in
/// `haystack`. An empty needle never matches.
pub fn find_match(haystack: &str, needle: &str) -> Option<Range<usize>> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return None;
    }

    let indices: Vec<(usize, char)> = haystack.char_indices().collect();
    if indices.len() < needle.len() {
        return None;
    }

    for start in 0..=indices.len() - needle.len() {
        let window = &indices[start..start + needle.len()];
        if window
            .iter()
            .zip(&needle)
            .all(|((_, h), n)| chars_eq_ignore_case(*h, *n))
        {
            let begin = window[0].0;
            let end = indices
                .get(start + needle.len())
                .map(|(i, _)| *i)
                .unwrap_or(haystack.len());
            return Some(begin..end);
        }
    }

    None
}

/// Whether `needle` occurs in `haystack`, ignoring case
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || find_match(haystack, needle).is_some()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
