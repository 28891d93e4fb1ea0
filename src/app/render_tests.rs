//! Tests for app rendering and region tracking

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::app::App;
use crate::detail::parse_detail;
use crate::input::InputBinding;
use crate::layout::{Region, region_at};
use crate::test_utils::test_helpers::{ENGINEER_DETAIL, offline_app};

const TEST_WIDTH: u16 = 80;
const TEST_HEIGHT: u16 = 20;

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(TEST_WIDTH, TEST_HEIGHT)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_idle_screen_shows_input_and_button() {
    let mut app = offline_app();
    let output = render(&mut app);

    assert!(output.contains("Career"));
    assert!(output.contains("Search careers..."));
    assert!(output.contains("Search"));
    assert!(output.contains("Esc quit"));
    assert!(!output.contains("Suggestions"));
}

#[test]
fn test_render_records_regions() {
    let mut app = offline_app();
    render(&mut app);

    let input = app.regions.input.unwrap();
    let button = app.regions.search_button.unwrap();
    assert_eq!(input.y, 0);
    assert_eq!(input.height, 3);
    assert_eq!(button.x, input.right());
    assert_eq!(button.right(), TEST_WIDTH);
    assert_eq!(app.regions.suggestions, None);
    assert_eq!(app.regions.cards, [None, None, None]);

    assert_eq!(region_at(&app.regions, 5, 1), Some(Region::InputField));
    assert_eq!(region_at(&app.regions, button.x + 2, 1), Some(Region::SearchButton));
}

#[test]
fn test_open_list_drawn_under_input() {
    let mut app = offline_app();
    app.input.set_value("eng");
    app.suggestions.render(
        vec!["Engineer".to_string(), "Mechanical Engineer".to_string()],
        "eng",
    );

    let output = render(&mut app);

    assert!(output.contains("Suggestions (2)"));
    assert!(output.contains("Mechanical Engineer"));
    assert!(output.contains("↑/↓ move"));
    let popup = app.regions.suggestions.unwrap();
    assert_eq!(popup.y, 3);
    assert_eq!(region_at(&app.regions, popup.x + 2, popup.y + 1), Some(Region::SuggestionList));
}

#[test]
fn test_cards_drawn_after_lookup() {
    let mut app = offline_app();
    app.input.set_value("Mechanical Engineer");
    app.details.present(&parse_detail(ENGINEER_DETAIL), "Mechanical Engineer");

    let output = render(&mut app);

    assert!(output.contains("Physics"));
    assert!(output.contains("Degree:"));
    assert!(app.regions.cards[0].is_some());
    assert!(app.regions.cards[1].is_some());
    assert!(app.regions.cards[2].is_none());
}

#[test]
fn test_popup_draws_over_cards() {
    let mut app = offline_app();
    app.details.present(&parse_detail(ENGINEER_DETAIL), "Mechanical Engineer");
    app.suggestions
        .render(vec!["Engineer".to_string()], "eng");

    render(&mut app);

    let popup = app.regions.suggestions.unwrap();
    assert_eq!(region_at(&app.regions, popup.x + 1, popup.y + 1), Some(Region::SuggestionList));
}

#[test]
fn test_regions_cleared_each_frame() {
    let mut app = offline_app();
    app.suggestions.render(vec!["Engineer".to_string()], "eng");
    render(&mut app);
    assert!(app.regions.suggestions.is_some());

    app.suggestions.close();
    render(&mut app);
    assert_eq!(app.regions.suggestions, None);
}

#[test]
fn test_not_found_message_rendered() {
    let mut app = offline_app();
    let outcome = parse_detail(r#"{"error": "No job found"}"#);
    app.details.present(&outcome, "Plumber");

    let output = render(&mut app);

    // Narrow card column, so the message wraps
    assert!(output.contains("No job found for"));
    assert!(output.contains("\"Plumber\""));
}
