//! Search input field

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

/// What the suggestion list needs from the input it is attached to
pub trait InputBinding {
    fn value(&self) -> &str;
    /// Replace the whole value, cursor at the end
    fn set_value(&mut self, value: &str);
    /// Give keyboard focus back to the field
    fn focus(&mut self);
}

pub struct InputState {
    pub textarea: TextArea<'static>,
    focused: bool,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Search careers...");

        let mut input = Self {
            textarea,
            focused: true,
        };
        input.apply_focus_style();
        input
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.apply_focus_style();
    }

    fn apply_focus_style(&mut self) {
        let border = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Career ")
                .border_style(Style::default().fg(border)),
        );
        let cursor = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor);
    }
}

impl InputBinding for InputState {
    fn value(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    fn set_value(&mut self, value: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(value);
    }

    fn focus(&mut self) {
        self.focused = true;
        self.apply_focus_style();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
