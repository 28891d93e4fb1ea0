use ratatui::layout::{Position, Rect};

use crate::detail::CARD_SLOTS;

/// Clickable UI components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    SearchButton,
    /// Suggestion popup, borders included
    SuggestionList,
    /// Detail card in the given slot
    Card(usize),
}

/// Areas drawn on the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    pub search_button: Option<Rect>,
    pub suggestions: Option<Rect>,
    pub cards: [Option<Rect>; CARD_SLOTS],
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded for the previous frame
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when (x, y) lies in the widget root: the input, its button or
    /// the open suggestion list
    pub fn root_contains(&self, x: u16, y: u16) -> bool {
        let position = Position::new(x, y);
        [self.input, self.search_button, self.suggestions]
            .into_iter()
            .flatten()
            .any(|rect| rect.contains(position))
    }
}
