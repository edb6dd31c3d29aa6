pub mod chat;
pub mod wiki;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::ui::format::next_boundary;

/// Spans for a single-line input with a visible caret at `caret` (byte
/// offset). The caret renders as a reversed cell, a trailing space when
/// it sits at the end of the text.
pub(super) fn caret_spans(text: &str, caret: usize, style: Style) -> Vec<Span<'static>> {
    let caret = caret.min(text.len());
    let (before, rest) = text.split_at(caret);
    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), style));
    }
    if rest.is_empty() {
        spans.push(Span::styled(
            " ".to_string(),
            style.add_modifier(Modifier::REVERSED),
        ));
    } else {
        let cursor_len = next_boundary(rest, 0);
        let (under, after) = rest.split_at(cursor_len);
        spans.push(Span::styled(
            under.to_string(),
            style.add_modifier(Modifier::REVERSED),
        ));
        if !after.is_empty() {
            spans.push(Span::styled(after.to_string(), style));
        }
    }
    spans
}

/// A popup rect of the given size, centered in `area` and clamped to it.
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
