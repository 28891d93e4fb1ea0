//! Mouse click handling
//!
//! Left-button presses select suggestions and trigger the search button.
//! Presses that land outside the widget close the list and blur the input.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::state::App;
use crate::autocomplete::option_at_row;
use crate::input::InputBinding;
use crate::layout::{Region, region_at};

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let region = region_at(&app.regions, mouse.column, mouse.row);
    handle_click(app, region, mouse);
}

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::SuggestionList) => click_suggestion_list(app, mouse),
        Some(Region::SearchButton) => {
            app.press_search_button();
        }
        Some(Region::InputField) => app.input.focus(),
        Some(Region::Card(_)) | None => {
            let inside = app.regions.root_contains(mouse.column, mouse.row);
            app.suggestions.pointer_down(inside);
            if !inside {
                app.input.blur();
            }
        }
    }
}

fn click_suggestion_list(app: &mut App, mouse: MouseEvent) {
    let Some(popup) = app.regions.suggestions else {
        return;
    };
    // Clicks on the border select nothing but still count as inside
    if let Some(index) = option_at_row(&app.suggestions, popup, mouse.row) {
        app.suggestions.select_by_pointer(index, &mut app.input);
        app.regions.suggestions = None;
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
