//! CLI integration tests for the one-shot commands

mod util;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use util::{dead_base_url, missing_config, serve_once};

const DETAIL_BODY: &str = r#"{"JobID":"1","Job_name":"Mechanical Engineer","Final_degree":"Bachelor's","years_needed":"4","avgCost":"42000","majors":[{"MajorID":"10","Major_name":"Mechanical Engineering","CreditHrs":"128"}]}"#;

const ITEMS_BODY: &str = r#"[{"Job_name":"Engineer"},{"Job_name":"Teacher"},{"Job_name":"R&D Engineer"}]"#;

#[test]
fn test_help_lists_commands() {
    cargo_bin_cmd!("careersearch")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("suggest"))
        .stdout(predicate::str::contains("detail"))
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_blank_query_prints_nothing() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("careersearch")
        .args(["--config", &missing_config(&dir)])
        .args(["--base-url", &dead_base_url()])
        .args(["suggest", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_blank_detail_name_prints_nothing() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("careersearch")
        .args(["--config", &missing_config(&dir)])
        .args(["--base-url", &dead_base_url()])
        .args(["detail", ""])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unreachable_api_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("careersearch")
        .args(["--config", &missing_config(&dir)])
        .args(["--base-url", &dead_base_url()])
        .args(["suggest", "eng"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_suggest_filters_items() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("careersearch")
        .args(["--config", &missing_config(&dir)])
        .args(["--base-url", &serve_once(ITEMS_BODY)])
        .args(["suggest", "eng"])
        .assert()
        .success()
        .stdout("Engineer\nR&D Engineer\n");
}

#[test]
fn test_suggest_matches_query_as_typed() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("careersearch")
        .args(["--config", &missing_config(&dir)])
        .args(["--base-url", &serve_once(ITEMS_BODY)])
        .args(["suggest", " eng"])
        .assert()
        .success()
        .stdout("R&D Engineer\n");
}

#[test]
fn test_suggest_html_escapes_labels() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("careersearch")
        .args(["--config", &missing_config(&dir)])
        .args(["--base-url", &serve_once(ITEMS_BODY)])
        .args(["suggest", "eng", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"aria-expanded="true""#))
        .stdout(predicate::str::contains(
            r#"<li id="option-1" role="option" aria-selected="false">R&amp;D <span class="highlight">Eng</span>ineer</li>"#,
        ));
}

#[test]
fn test_detail_prints_cards() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("careersearch")
        .args(["--config", &missing_config(&dir)])
        .args(["--base-url", &serve_once(DETAIL_BODY)])
        .args(["detail", "Mechanical Engineer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mechanical Engineering"))
        .stdout(predicate::str::contains("  Degree: Bachelor's"))
        .stdout(predicate::str::contains("  Cost estimate: $42000"))
        .stdout(predicate::str::contains("  Credit Hours: 128"));
}

#[test]
fn test_detail_not_found_message() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("careersearch")
        .args(["--config", &missing_config(&dir)])
        .args(["--base-url", &serve_once(r#"{"error":"No job found"}"#)])
        .args(["detail", "Plumber", "--html"])
        .assert()
        .success()
        .stdout("<div class=\"card\"><p>No job found for &quot;Plumber&quot;</p></div>\n");
}
