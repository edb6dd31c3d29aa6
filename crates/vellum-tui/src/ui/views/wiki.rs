//! The thread wiki page: a chat message turned into an editable block
//! document.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use vellum_core::wiki::{Block as PageBlock, BlockKind, Document, MenuEntry};

use crate::ui::format::fit_width;
use crate::ui::{theme, App, InputMode, ThreadPageState};

use super::caret_spans;

pub fn render_thread_page(f: &mut Frame, app: &App, page: &ThreadPageState, area: Rect) {
    let Some(doc) = app.pages.page(page.thread_id()) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(f, page, chunks[0]);
    render_context(f, page, chunks[1]);
    render_blocks(f, app, page, doc, chunks[2]);
    render_hints(f, app, chunks[3]);

    render_menus(f, page, doc, chunks[2]);
}

fn render_header(f: &mut Frame, page: &ThreadPageState, area: Rect) {
    let message = &page.message;
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("← ", Style::default().fg(theme::TEXT_MUTED)),
            Span::styled(
                format!("Thread from {}", message.author),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", message.display_time()),
                Style::default().fg(theme::TEXT_DIM),
            ),
        ]),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(theme::BORDER_INACTIVE),
        )),
    ]);
    f.render_widget(header, area);
}

fn render_context(f: &mut Frame, page: &ThreadPageState, area: Rect) {
    let message = &page.message;
    let context = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", message.avatar),
                Style::default()
                    .fg(theme::accent(message.color))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                message.author.clone(),
                Style::default().fg(theme::TEXT_PRIMARY),
            ),
            Span::styled(
                format!("  {}", message.display_time()),
                Style::default().fg(theme::TEXT_DIM),
            ),
        ]),
        Line::from(Span::styled(
            format!("   {}", fit_width(&message.content, area.width.saturating_sub(4) as usize)),
            Style::default().fg(theme::TEXT_MUTED),
        )),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(theme::BORDER_INACTIVE),
        )),
    ])
    .style(Style::default().bg(theme::BG_SECONDARY));
    f.render_widget(context, area);
}

fn render_blocks(f: &mut Frame, app: &App, page: &ThreadPageState, doc: &Document, area: Rect) {
    let visible = area.height as usize;
    let skip = scroll_offset(page.selected, doc.len(), visible);

    let lines: Vec<Line> = doc
        .blocks()
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible)
        .map(|(i, block)| block_line(app, page, doc, block, i, area.width as usize))
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

pub(super) fn scroll_offset(selected: usize, total: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        0
    } else {
        selected.saturating_sub(visible - 1).min(total - visible)
    }
}

fn block_line(
    app: &App,
    page: &ThreadPageState,
    doc: &Document,
    block: &PageBlock,
    index: usize,
    width: usize,
) -> Line<'static> {
    let editing = app.input_mode == InputMode::Editing && page.focus.is_focused(&block.id);
    let selected = app.input_mode == InputMode::Normal && index == page.selected;
    let row_bg = if selected {
        Style::default().bg(theme::BG_SELECTED)
    } else {
        Style::default()
    };

    if block.kind == BlockKind::Divider {
        let marker = if selected { "▌" } else { " " };
        let mut spans = vec![Span::styled(
            marker.to_string(),
            row_bg.fg(theme::ACCENT_PRIMARY),
        )];
        spans.push(Span::styled(
            "─".repeat(width.saturating_sub(2)),
            row_bg.fg(theme::BORDER_INACTIVE),
        ));
        return Line::from(spans);
    }

    let (prefix, prefix_style, content_style) = block_decoration(doc, block, row_bg);

    let mut spans = Vec::new();
    let marker = if selected { "▌ " } else { "  " };
    spans.push(Span::styled(
        marker.to_string(),
        row_bg.fg(theme::ACCENT_PRIMARY),
    ));
    if !prefix.is_empty() {
        spans.push(Span::styled(prefix, prefix_style));
    }

    if editing {
        spans.extend(caret_spans(&block.content, page.caret, content_style));
    } else if block.content.is_empty() {
        spans.push(Span::styled(
            placeholder(block.kind).to_string(),
            row_bg.fg(theme::TEXT_DIM),
        ));
    } else {
        spans.push(Span::styled(
            fit_width(&block.content, width.saturating_sub(8)),
            content_style,
        ));
    }

    Line::from(spans)
}

fn block_decoration(
    doc: &Document,
    block: &PageBlock,
    row_bg: Style,
) -> (String, Style, Style) {
    match block.kind {
        BlockKind::Heading1 => (
            String::new(),
            row_bg,
            row_bg
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        BlockKind::Heading2 => (
            String::new(),
            row_bg,
            row_bg
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        BlockKind::Heading3 => (
            String::new(),
            row_bg,
            row_bg.fg(theme::TEXT_MUTED).add_modifier(Modifier::BOLD),
        ),
        BlockKind::BulletList => (
            "• ".to_string(),
            row_bg.fg(theme::TEXT_MUTED),
            row_bg.fg(theme::TEXT_PRIMARY),
        ),
        BlockKind::NumberedList => {
            let ordinal = doc.numbered_ordinal(&block.id).unwrap_or(0);
            (
                format!("{ordinal}. "),
                row_bg.fg(theme::TEXT_MUTED),
                row_bg.fg(theme::TEXT_PRIMARY),
            )
        }
        BlockKind::Todo => {
            let (glyph, content_style) = if block.is_checked() {
                (
                    "☑ ",
                    row_bg
                        .fg(theme::TEXT_MUTED)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("☐ ", row_bg.fg(theme::TEXT_PRIMARY))
            };
            (glyph.to_string(), row_bg.fg(theme::ACCENT_PRIMARY), content_style)
        }
        BlockKind::Quote => (
            "▌ ".to_string(),
            row_bg.fg(theme::ACCENT_PRIMARY),
            row_bg
                .fg(theme::TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
        ),
        BlockKind::Code => (
            String::new(),
            row_bg,
            Style::default()
                .bg(theme::BG_SECONDARY)
                .fg(theme::ACCENT_SUCCESS),
        ),
        BlockKind::Paragraph | BlockKind::Divider => (
            String::new(),
            row_bg,
            row_bg.fg(theme::TEXT_PRIMARY),
        ),
    }
}

fn placeholder(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Heading1 => "Heading 1",
        BlockKind::Heading2 => "Heading 2",
        BlockKind::Heading3 => "Heading 3",
        _ => "Type something...",
    }
}

fn render_menus(f: &mut Frame, page: &ThreadPageState, doc: &Document, blocks_area: Rect) {
    let (block_id, rows): (_, Vec<(String, Style)>) = if let Some(id) = page.menu.action_menu() {
        let rows = MenuEntry::ALL
            .iter()
            .map(|entry| {
                let style = if *entry == MenuEntry::Delete {
                    Style::default().fg(theme::ACCENT_ERROR)
                } else {
                    Style::default().fg(theme::TEXT_PRIMARY)
                };
                (entry.label().to_string(), style)
            })
            .collect();
        (id, rows)
    } else if let Some(id) = page.menu.type_picker() {
        let current = doc.get(id).map(|b| b.kind);
        let rows = BlockKind::ALL
            .iter()
            .map(|kind| {
                let marker = if Some(*kind) == current { "✓ " } else { "  " };
                let style = if Some(*kind) == current {
                    Style::default().fg(theme::ACCENT_PRIMARY)
                } else {
                    Style::default().fg(theme::TEXT_PRIMARY)
                };
                (format!("{marker}{}", kind.label()), style)
            })
            .collect();
        (id, rows)
    } else {
        return;
    };

    let anchor_row = doc.position(block_id).unwrap_or(0);
    let skip = scroll_offset(page.selected, doc.len(), blocks_area.height as usize);
    let y = blocks_area
        .y
        .saturating_add(anchor_row.saturating_sub(skip) as u16)
        .saturating_add(1);

    let height = (rows.len() as u16 + 2).min(blocks_area.height);
    let y = y.min(blocks_area.bottom().saturating_sub(height));
    let width = 22u16.min(blocks_area.width);
    let popup =
        Rect::new(blocks_area.x.saturating_add(4), y, width, height).intersection(blocks_area);
    if popup.height < 3 || popup.width < 6 {
        return;
    }

    f.render_widget(Clear, popup);
    let lines: Vec<Line> = rows
        .into_iter()
        .enumerate()
        .map(|(i, (label, style))| {
            let style = if i == page.menu.cursor() {
                style.bg(theme::BG_SELECTED).add_modifier(Modifier::BOLD)
            } else {
                style
            };
            Line::from(Span::styled(format!(" {label}"), style))
        })
        .collect();

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_ACTIVE))
            .style(Style::default().bg(theme::BG_SECONDARY)),
    );
    f.render_widget(menu, popup);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.input_mode {
        InputMode::Normal => {
            "↑/↓ move · Enter edit · m menu · t turn into · Space toggle to-do · Esc back"
        }
        InputMode::Editing => "Enter new block · Backspace on empty removes · Esc done",
    };
    let bar = Paragraph::new(Line::from(Span::styled(
        format!(" {text}"),
        Style::default().fg(theme::TEXT_DIM),
    )));
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 10, 5), 0);
        assert_eq!(scroll_offset(4, 10, 5), 0);
        assert_eq!(scroll_offset(5, 10, 5), 1);
        assert_eq!(scroll_offset(9, 10, 5), 5);
    }

    #[test]
    fn test_scroll_offset_short_documents_never_scroll() {
        assert_eq!(scroll_offset(3, 4, 10), 0);
        assert_eq!(scroll_offset(0, 1, 0), 0);
    }
}
