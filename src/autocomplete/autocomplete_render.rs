//! Suggestion popup rendering
//!
//! Draws the open list directly under the input field. The matched part of
//! each label is drawn highlighted; the active row gets a marker and a
//! contrasting background.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::highlight::Highlight;
use super::list_state::{MAX_VISIBLE_SUGGESTIONS, SuggestionList};
use crate::widgets::popup;

const MAX_POPUP_WIDTH: usize = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
// Border plus the two-column row marker
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;

const ACTIVE_MARKER: &str = "► ";
const INACTIVE_MARKER: &str = "  ";

/// Rows the popup may use under `input_area` within `bounds`
pub fn viewport_rows(input_area: Rect, bounds: Rect) -> usize {
    (popup::rows_below_anchor(input_area, bounds) as usize).min(MAX_VISIBLE_SUGGESTIONS)
}

/// Render the suggestion popup below the input field
///
/// Returns the popup area for region tracking, or `None` when closed.
pub fn render_popup(
    list: &SuggestionList,
    frame: &mut Frame,
    input_area: Rect,
    bounds: Rect,
) -> Option<Rect> {
    if !list.is_open() {
        return None;
    }

    let visible: Vec<_> = list.visible_items().collect();
    if visible.is_empty() {
        return None;
    }

    let max_text_width = list
        .items()
        .iter()
        .map(|item| item.label.width())
        .max()
        .unwrap_or(20)
        .min(MAX_POPUP_WIDTH);
    let popup_width = max_text_width as u16 + POPUP_PADDING;
    let popup_height = visible.len() as u16 + POPUP_BORDER_HEIGHT;

    let popup_area = popup::popup_below_anchor(
        input_area,
        bounds,
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|(_, item)| {
            let (marker, base, matched) = if item.selected {
                let base = Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD);
                (ACTIVE_MARKER, base, base.add_modifier(Modifier::UNDERLINED))
            } else {
                let base = Style::default().fg(Color::White).bg(Color::Black);
                (
                    INACTIVE_MARKER,
                    base,
                    base.fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )
            };

            let mut spans = vec![Span::styled(marker, base)];
            match item.highlight() {
                Highlight::Plain(label) => spans.push(Span::styled(label, base)),
                Highlight::Marked {
                    before,
                    matched: hit,
                    after,
                } => {
                    spans.push(Span::styled(before, base));
                    spans.push(Span::styled(hit, matched));
                    spans.push(Span::styled(after, base));
                }
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let title = format!(" Suggestions ({}) ", list.items().len());
    let widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(widget, popup_area);
    Some(popup_area)
}

/// List index of the option drawn at screen row `row`, if any
pub fn option_at_row(list: &SuggestionList, popup_area: Rect, row: u16) -> Option<usize> {
    let first_row = popup_area.y + 1;
    let last_row = popup_area.bottom().saturating_sub(1);
    if row < first_row || row >= last_row {
        return None;
    }

    let index = list.scroll_offset() + (row - first_row) as usize;
    (index < list.items().len()).then_some(index)
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
