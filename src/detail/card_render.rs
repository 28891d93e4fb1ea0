//! Detail card rendering
//!
//! Draws the visible card slots side by side. Hidden slots leave their
//! column empty so cards keep a stable position.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::renderer::{CARD_SLOTS, CardContent, DetailRenderer};

/// Render the card slots into `area`
///
/// Returns the area of each slot that was drawn, for region tracking.
pub fn render_cards(
    details: &DetailRenderer,
    frame: &mut Frame,
    area: Rect,
) -> [Option<Rect>; CARD_SLOTS] {
    let columns = Layout::horizontal([Constraint::Ratio(1, CARD_SLOTS as u32); CARD_SLOTS])
        .spacing(1)
        .split(area);

    let mut drawn = [None; CARD_SLOTS];
    for (i, slot) in details.slots().iter().enumerate() {
        if !slot.is_visible() {
            continue;
        }
        let Some(content) = slot.content() else {
            continue;
        };

        let column = columns[i];
        let (title, lines) = card_lines(content);
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(paragraph, column);
        drawn[i] = Some(column);
    }
    drawn
}

fn card_lines(content: &CardContent) -> (Line<'_>, Vec<Line<'_>>) {
    match content {
        CardContent::Message(message) => (
            Line::from(" Result "),
            vec![Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Yellow),
            ))],
        ),
        CardContent::Card { heading, fields } => {
            let title = Line::from(Span::styled(
                format!(" {} ", heading),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            let lines = fields
                .iter()
                .map(|field| {
                    Line::from(vec![
                        Span::styled(
                            format!("{}: ", field.label),
                            Style::default()
                                .fg(Color::Gray)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(field.value.as_str()),
                    ])
                })
                .collect();
            (title, lines)
        }
    }
}

#[cfg(test)]
#[path = "card_render_tests.rs"]
mod card_render_tests;
