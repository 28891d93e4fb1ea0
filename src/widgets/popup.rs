use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect directly under `anchor`, clipped to the bottom of `bounds`
pub fn popup_below_anchor(
    anchor: Rect,
    bounds: Rect,
    width: u16,
    height: u16,
    x_offset: u16,
) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let available = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: anchor.x + x_offset,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(available),
    }
}

/// Rows available under `anchor` for a bordered popup's content
pub fn rows_below_anchor(anchor: Rect, bounds: Rect) -> u16 {
    bounds
        .bottom()
        .saturating_sub(anchor.y.saturating_add(anchor.height))
        .saturating_sub(2)
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
