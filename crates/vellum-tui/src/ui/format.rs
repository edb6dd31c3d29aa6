//! Text helpers for single-line editing and width-constrained rendering.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Byte offset of the grapheme boundary before `at`. Clamps to 0.
pub fn prev_boundary(text: &str, at: usize) -> usize {
    let at = at.min(text.len());
    text[..at]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the grapheme boundary after `at`. Clamps to the end.
pub fn next_boundary(text: &str, at: usize) -> usize {
    let at = at.min(text.len());
    text[at..]
        .graphemes(true)
        .next()
        .map(|g| at + g.len())
        .unwrap_or(text.len())
}

/// Block content is single-line; pasted newlines collapse to spaces.
pub fn strip_newlines(text: &str) -> String {
    text.split(['\n', '\r'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate to a display width, appending an ellipsis when cut.
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let target = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > target {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}
