//! Tests for match highlighting

use super::*;
use insta::assert_snapshot;

#[test]
fn test_highlight_is_case_insensitive() {
    assert_eq!(
        highlight("Engineer", "eng"),
        Highlight::Marked {
            before: "",
            matched: "Eng",
            after: "ineer",
        }
    );
}

#[test]
fn test_highlight_in_middle() {
    assert_eq!(
        highlight("Mechanical Engineer", "eng"),
        Highlight::Marked {
            before: "Mechanical ",
            matched: "Eng",
            after: "ineer",
        }
    );
}

#[test]
fn test_highlight_trims_query() {
    assert_eq!(
        highlight("Chef", "  he "),
        Highlight::Marked {
            before: "C",
            matched: "he",
            after: "f",
        }
    );
}

#[test]
fn test_highlight_empty_query_is_plain() {
    assert_eq!(highlight("Chef", "   "), Highlight::Plain("Chef"));
}

#[test]
fn test_highlight_no_match_is_plain() {
    assert_eq!(highlight("Chef", "nurse"), Highlight::Plain("Chef"));
}

#[test]
fn test_markup_marks_match() {
    assert_snapshot!(
        highlight("Mechanical Engineer", "ENG").to_markup(),
        @r#"Mechanical <span class="highlight">Eng</span>ineer"#
    );
}

#[test]
fn test_markup_escapes_each_segment() {
    assert_snapshot!(
        highlight("R&D <Eng> 'Lead'", "eng").to_markup(),
        @r#"R&amp;D &lt;<span class="highlight">Eng</span>&gt; &#39;Lead&#39;"#
    );
}

#[test]
fn test_plain_markup_is_escaped() {
    assert_eq!(highlight("A & B", "zzz").to_markup(), "A &amp; B");
}
