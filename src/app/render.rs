use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::App;
use crate::autocomplete::{render_popup, viewport_rows};
use crate::detail::render_cards;

const SEARCH_BUTTON_WIDTH: u16 = 12;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.clear();

        let screen = frame.area();
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(screen);
        let (input_row, cards_area, help_area) = (layout[0], layout[1], layout[2]);

        let input_row = Layout::horizontal([
            Constraint::Min(10),
            Constraint::Length(SEARCH_BUTTON_WIDTH),
        ])
        .split(input_row);
        let (input_area, button_area) = (input_row[0], input_row[1]);

        frame.render_widget(&self.input.textarea, input_area);
        self.regions.input = Some(input_area);

        render_search_button(frame, button_area);
        self.regions.search_button = Some(button_area);

        self.regions.cards = render_cards(&self.details, frame, cards_area);

        self.render_help_line(frame, help_area);

        // Popup goes last so it draws over the cards
        self.suggestions
            .set_viewport_rows(viewport_rows(input_area, screen));
        self.regions.suggestions = render_popup(&self.suggestions, frame, input_area, screen);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let text = Style::default().fg(Color::DarkGray);

        let hints: &[(&str, &str)] = if self.suggestions.is_open() {
            &[("↑/↓", " move  "), ("Enter", " pick  "), ("Esc", " close")]
        } else {
            &[("Enter", " search  "), ("Esc", " quit")]
        };

        let spans: Vec<Span> = hints
            .iter()
            .flat_map(|(k, desc)| [Span::styled(*k, key), Span::styled(*desc, text)])
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn render_search_button(frame: &mut Frame, area: Rect) {
    let button = Paragraph::new("Search")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(button, area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
