use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

use super::mouse_click;
use super::state::App;
use crate::autocomplete::KeyAction;
use crate::input::InputBinding;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }
        // Keys always land in the input, even after an outside click
        self.input.focus();

        match self.suggestions.handle_key(key, &mut self.input) {
            KeyAction::Handled => {}
            KeyAction::Delegate => {
                self.commit();
            }
            KeyAction::Ignored if key.code == KeyCode::Enter => {
                self.commit();
            }
            KeyAction::Ignored => self.edit_input(key),
        }
    }

    /// Keys that work regardless of list state
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        // Escape closes an open list first, quits otherwise
        if key.code == KeyCode::Esc && !self.suggestions.is_open() {
            self.quit();
            return true;
        }

        false
    }

    fn edit_input(&mut self, key: KeyEvent) {
        // Single-line field: newlines never reach the textarea
        if matches!(key.code, KeyCode::Enter | KeyCode::Up | KeyCode::Down) {
            return;
        }
        if self.input.textarea.input(key) {
            self.on_input_changed();
        }
    }

    pub fn handle_paste_event(&mut self, text: String) {
        let line = text.lines().next().unwrap_or_default();
        if line.is_empty() {
            return;
        }
        self.input.textarea.insert_str(line);
        self.on_input_changed();
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        mouse_click::handle_mouse(self, mouse);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
