//! Suggestion list: candidate state, keyboard navigation and highlighting

mod autocomplete_render;
mod highlight;
mod list_state;

pub use autocomplete_render::{option_at_row, render_popup, viewport_rows};
pub use highlight::{HIGHLIGHT_CLASS, Highlight, highlight, match_range};
pub use list_state::{
    Direction, KeyAction, ListState, MAX_VISIBLE_SUGGESTIONS, RenderedItem, SuggestionList,
    option_id,
};
