//! Tests for markup escaping

use super::*;
use proptest::prelude::*;

#[test]
fn test_escape_all_special_characters() {
    assert_eq!(escape(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
}

#[test]
fn test_escape_plain_text_unchanged() {
    assert_eq!(escape("Mechanical Engineer"), "Mechanical Engineer");
}

#[test]
fn test_escape_empty() {
    assert_eq!(escape(""), "");
}

#[test]
fn test_escape_script_tag() {
    assert_eq!(
        escape("<script>alert('x')</script>"),
        "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
    );
}

#[test]
fn test_escape_is_not_idempotent() {
    let once = escape("R&D");
    assert_eq!(once, "R&amp;D");
    assert_eq!(escape(&once), "R&amp;amp;D");
}

#[test]
fn test_escape_preserves_unicode() {
    assert_eq!(escape("Ingénieur <ü>"), "Ingénieur &lt;ü&gt;");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Escaped output never contains a raw markup delimiter
    #[test]
    fn prop_escape_removes_delimiters(text in ".{0,64}") {
        let escaped = escape(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    // Text without special characters passes through untouched
    #[test]
    fn prop_escape_identity_on_safe_text(text in "[a-zA-Z0-9 ,.-]{0,64}") {
        prop_assert_eq!(escape(&text), text);
    }
}
