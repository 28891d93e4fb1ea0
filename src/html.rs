//! HTML rendering of the widget for non-interactive output
//!
//! Produces the combobox/listbox markup a browser would show for the current
//! list and card state. Item and card content comes pre-escaped from
//! [`RenderedItem::markup`](crate::autocomplete::RenderedItem) and
//! [`CardContent::to_markup`](crate::detail::CardContent::to_markup); only
//! attribute values are escaped here.

use crate::autocomplete::SuggestionList;
use crate::detail::DetailRenderer;
use crate::sanitize::escape;

pub const LISTBOX_ID: &str = "suggestions";

/// The search input with its combobox attributes
pub fn input_markup(value: &str, list: &SuggestionList) -> String {
    let mut out = format!(
        r#"<input type="text" role="combobox" aria-controls="{}" aria-expanded="{}""#,
        LISTBOX_ID,
        list.is_expanded()
    );
    if let Some(id) = list.active_descendant() {
        out.push_str(&format!(r#" aria-activedescendant="{}""#, escape(id)));
    }
    out.push_str(&format!(r#" value="{}">"#, escape(value)));
    out
}

/// The listbox; hidden with no options while closed
pub fn listbox_markup(list: &SuggestionList) -> String {
    if !list.is_open() {
        return format!(r#"<ul id="{}" role="listbox" hidden></ul>"#, LISTBOX_ID);
    }

    let mut out = format!(r#"<ul id="{}" role="listbox">"#, LISTBOX_ID);
    for item in list.items() {
        out.push_str(&format!(
            r#"<li id="{}" role="option" aria-selected="{}">{}</li>"#,
            escape(&item.id),
            item.selected,
            item.markup
        ));
    }
    out.push_str("</ul>");
    out
}

/// One `<div class="card">` per visible slot, in slot order
pub fn cards_markup(details: &DetailRenderer) -> String {
    details
        .to_markup()
        .into_iter()
        .map(|card| format!(r#"<div class="card">{}</div>"#, card))
        .collect::<Vec<_>>()
        .join("\n")
}
