//! Suggestion list controller
//!
//! Owns the current candidates, the open/closed state and the active
//! (keyboard highlighted) index. Each widget owns its own controller, so two
//! search fields never share list state.
//!
//! Accessibility wiring follows the listbox pattern: every rendered item has
//! a positional id and a selected flag, the list reports whether it is
//! expanded, and the input's active descendant points at the active item.

use std::ops::Range;

use crossterm::event::{KeyCode, KeyEvent};

use super::highlight::{Highlight, match_range};
use crate::input::InputBinding;

/// Rows shown at once; longer lists scroll to keep the active item in view
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;

/// Snapshot of the list: candidates, active index and visibility
///
/// `active_index` is `None` or a valid index into `suggestions`; a closed
/// list has no suggestions and no active index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub suggestions: Vec<String>,
    pub active_index: Option<usize>,
    pub is_open: bool,
}

/// One rendered option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    /// Positional identifier, `option-<index>`
    pub id: String,
    pub label: String,
    /// Byte range of the highlighted match within `label`
    pub match_range: Option<Range<usize>>,
    /// Escaped markup of the label with the match marked
    pub markup: String,
    pub selected: bool,
}

impl RenderedItem {
    fn new(index: usize, label: &str, query: &str) -> Self {
        let range = match_range(label, query);
        let markup = Highlight::from_range(label, range.clone()).to_markup();
        Self {
            id: option_id(index),
            label: label.to_string(),
            match_range: range,
            markup,
            selected: false,
        }
    }

    pub fn highlight(&self) -> Highlight<'_> {
        Highlight::from_range(&self.label, self.match_range.clone())
    }
}

pub fn option_id(index: usize) -> String {
    format!("option-{}", index)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// How a keystroke was handled by the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// The list is closed or the key is not one of ours
    Ignored,
    /// The list consumed the key
    Handled,
    /// Enter with nothing active: hand off to the commit flow
    Delegate,
}

#[derive(Debug)]
pub struct SuggestionList {
    state: ListState,
    items: Vec<RenderedItem>,
    active_descendant: Option<String>,
    scroll_offset: usize,
    viewport_rows: usize,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            items: Vec::new(),
            active_descendant: None,
            scroll_offset: 0,
            viewport_rows: MAX_VISIBLE_SUGGESTIONS,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn suggestions(&self) -> &[String] {
        &self.state.suggestions
    }

    pub fn items(&self) -> &[RenderedItem] {
        &self.items
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.active_index
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Expanded/collapsed accessibility state
    pub fn is_expanded(&self) -> bool {
        self.state.is_open
    }

    /// Id of the active item, linked from the input
    pub fn active_descendant(&self) -> Option<&str> {
        self.active_descendant.as_deref()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Rows the popup can show; keeps the active item in view
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        if let Some(index) = self.state.active_index {
            self.scroll_into_view(index);
        }
    }

    /// Items currently scrolled into view, with their list index
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &RenderedItem)> {
        self.items
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(self.viewport_rows)
    }

    /// Replace the candidates with a fresh result set for `query`
    pub fn render(&mut self, suggestions: Vec<String>, query: &str) {
        self.state.active_index = None;
        self.active_descendant = None;
        self.scroll_offset = 0;

        if suggestions.is_empty() {
            self.close();
            return;
        }

        self.items = suggestions
            .iter()
            .enumerate()
            .map(|(i, label)| RenderedItem::new(i, label, query))
            .collect();
        self.state.suggestions = suggestions;
        self.open();
    }

    pub fn open(&mut self) {
        if self.state.suggestions.is_empty() {
            return;
        }
        self.state.is_open = true;
    }

    pub fn close(&mut self) {
        self.state = ListState::default();
        self.items.clear();
        self.active_descendant = None;
        self.scroll_offset = 0;
    }

    /// Move the active index, clamped at both ends
    pub fn navigate(&mut self, direction: Direction) {
        if !self.state.is_open || self.items.is_empty() {
            return;
        }

        let last = self.items.len() - 1;
        let next = match (direction, self.state.active_index) {
            (_, None) => 0,
            (Direction::Next, Some(i)) => (i + 1).min(last),
            (Direction::Previous, Some(i)) => i.saturating_sub(1),
        };
        self.set_active(Some(next));
    }

    fn set_active(&mut self, index: Option<usize>) {
        self.state.active_index = index;
        for (i, item) in self.items.iter_mut().enumerate() {
            item.selected = Some(i) == index;
        }

        match index {
            Some(i) => {
                self.scroll_into_view(i);
                self.active_descendant = Some(self.items[i].id.clone());
            }
            None => self.active_descendant = None,
        }
    }

    fn scroll_into_view(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + self.viewport_rows {
            self.scroll_offset = index + 1 - self.viewport_rows;
        }
    }

    /// Commit the suggestion at `index` into the input and close the list
    ///
    /// Returns false (doing nothing) when `index` is out of range.
    pub fn select(&mut self, index: usize, input: &mut impl InputBinding) -> bool {
        let Some(label) = self.state.suggestions.get(index).cloned() else {
            return false;
        };
        input.set_value(&label);
        self.close();
        input.focus();
        true
    }

    /// Pointer-down on an option
    ///
    /// Always consumes the event so the input keeps focus while the
    /// selection completes. A press on a missing option leaves the list as
    /// it was.
    pub fn select_by_pointer(&mut self, index: usize, input: &mut impl InputBinding) -> bool {
        if !self.select(index, input) {
            log::debug!("Pointer selection of missing option {}", index);
        }
        true
    }

    /// Primary-button press somewhere on screen
    pub fn pointer_down(&mut self, inside_root: bool) {
        if !inside_root && self.state.is_open {
            self.close();
        }
    }

    /// Keyboard handling while the input has focus
    pub fn handle_key(&mut self, key: KeyEvent, input: &mut impl InputBinding) -> KeyAction {
        if !self.state.is_open {
            return KeyAction::Ignored;
        }

        match key.code {
            KeyCode::Down => {
                self.navigate(Direction::Next);
                KeyAction::Handled
            }
            KeyCode::Up => {
                self.navigate(Direction::Previous);
                KeyAction::Handled
            }
            KeyCode::Enter => match self.state.active_index {
                Some(index) => {
                    self.select(index, input);
                    KeyAction::Handled
                }
                None => KeyAction::Delegate,
            },
            KeyCode::Esc => {
                self.close();
                KeyAction::Handled
            }
            _ => KeyAction::Ignored,
        }
    }
}

impl Default for SuggestionList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "list_state_tests.rs"]
mod list_state_tests;
