//! Markup escaping for untrusted text
//!
//! Labels and detail fields come straight from the remote API, so anything
//! spliced into markup goes through [`escape`] exactly once. Escaping is not
//! idempotent: `&amp;` escapes to `&amp;amp;`.

/// Replace `& < > " '` with their named entities
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod sanitize_tests;
