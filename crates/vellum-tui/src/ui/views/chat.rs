//! The chat workspace: server rail, channel list, message feed, member
//! list, and the profile popup.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use vellum_core::models::{ChannelKind, Presence, ThreadMessage};

use crate::ui::format::fit_width;
use crate::ui::{theme, App, InputMode};

use super::{caret_spans, centered_rect};

pub fn render_chat(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);

    let mut columns = vec![
        Constraint::Length(4),
        Constraint::Length(22),
        Constraint::Min(30),
    ];
    if app.show_members {
        columns.push(Constraint::Length(26));
    }
    let chunks = Layout::horizontal(columns).split(rows[0]);

    render_server_rail(f, app, chunks[0]);
    render_channel_list(f, app, chunks[1]);
    render_feed(f, app, chunks[2]);
    if app.show_members {
        render_member_list(f, app, chunks[3]);
    }
    render_status_bar(f, app, rows[1]);

    if let Some(member_idx) = app.profile_member {
        render_profile_panel(f, app, member_idx, area);
    }
}

fn render_server_rail(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::default()];
    for (i, server) in app.servers.iter().enumerate() {
        let style = if i == app.active_server {
            Style::default()
                .fg(theme::accent(server.color))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme::accent(server.color))
        };
        lines.push(Line::from(Span::styled(format!(" {} ", server.icon), style)));
        lines.push(Line::default());
    }
    let rail = Paragraph::new(lines).style(Style::default().bg(theme::BG_SIDEBAR));
    f.render_widget(rail, area);
}

fn render_channel_list(f: &mut Frame, app: &App, area: Rect) {
    let server_name = app
        .servers
        .get(app.active_server)
        .map(|s| s.name.as_str())
        .unwrap_or("");

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {server_name}"),
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for category in &app.categories {
        lines.push(Line::from(Span::styled(
            format!(" {}", category.name),
            Style::default().fg(theme::TEXT_DIM),
        )));
        for channel in &category.channels {
            let active = channel.id == app.active_channel;
            let glyph = match channel.kind {
                ChannelKind::Text => "#",
                ChannelKind::Voice => "🔊",
            };
            let mut name_style = if channel.unread || active {
                Style::default().fg(theme::TEXT_PRIMARY)
            } else {
                Style::default().fg(theme::TEXT_MUTED)
            };
            if active {
                name_style = name_style.bg(theme::BG_SELECTED).add_modifier(Modifier::BOLD);
            }
            let mut spans = vec![Span::styled(
                format!("  {glyph} {}", channel.name),
                name_style,
            )];
            if channel.mentions > 0 {
                spans.push(Span::styled(
                    format!(" ({})", channel.mentions),
                    Style::default().fg(theme::ACCENT_ERROR),
                ));
            }
            if channel.kind == ChannelKind::Voice && channel.voice_users > 0 {
                spans.push(Span::styled(
                    format!(" · {}", channel.voice_users),
                    Style::default().fg(theme::TEXT_DIM),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
    }

    let list = Paragraph::new(lines).style(Style::default().bg(theme::BG_SIDEBAR));
    f.render_widget(list, area);
}

fn render_feed(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .split(area);

    render_feed_header(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_typing_indicator(f, app, chunks[2]);
    render_compose(f, app, chunks[3]);
}

fn render_feed_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("# ", Style::default().fg(theme::TEXT_MUTED)),
            Span::styled(
                app.active_channel.clone(),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  Welcome to the conversation",
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(theme::BORDER_INACTIVE),
        )),
    ]);
    f.render_widget(header, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let feed = app.active_feed();
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_start = 0;

    lines.push(Line::from(Span::styled(
        format!("Welcome to #{}", app.active_channel),
        Style::default()
            .fg(theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("This is the start of the #{} channel. Say hello! 👋", app.active_channel),
        Style::default().fg(theme::TEXT_MUTED),
    )));

    for (i, message) in feed.iter().enumerate() {
        let grouped = i > 0 && feed[i - 1].author == message.author;
        let selected = i == app.selected_message_index;
        if !grouped {
            lines.push(Line::default());
        }
        if selected {
            selected_start = lines.len();
        }
        lines.extend(message_lines(message, grouped, selected, area.width as usize));
    }

    let visible = area.height as usize;
    let total = lines.len();
    let skip = if total <= visible {
        0
    } else {
        (total - visible).min(selected_start)
    };
    let visible_lines: Vec<Line> = lines.into_iter().skip(skip).take(visible).collect();
    f.render_widget(Paragraph::new(visible_lines), area);
}

fn message_lines(
    message: &ThreadMessage,
    grouped: bool,
    selected: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let row_bg = if selected {
        Style::default().bg(theme::BG_SELECTED)
    } else {
        Style::default()
    };
    let mut lines = Vec::new();

    if !grouped {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", message.avatar),
                row_bg
                    .fg(theme::accent(message.color))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                message.author.clone(),
                row_bg
                    .fg(theme::accent(message.color))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", message.display_time()), row_bg.fg(theme::TEXT_DIM)),
        ]));
    }

    let marker = if selected { "▌ " } else { "  " };
    lines.push(Line::from(vec![
        Span::styled(marker.to_string(), row_bg.fg(theme::ACCENT_PRIMARY)),
        Span::styled(
            fit_width(&message.content, width.saturating_sub(4)),
            row_bg.fg(theme::TEXT_PRIMARY),
        ),
    ]));

    if !message.reactions.is_empty() {
        let pills = message
            .reactions
            .iter()
            .map(|r| format!("{} {}", r.emoji, r.count))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(Line::from(Span::styled(
            format!("   {pills}"),
            row_bg.fg(theme::TEXT_MUTED),
        )));
    }

    lines
}

fn render_typing_indicator(f: &mut Frame, app: &App, area: Rect) {
    if app.typing_users.is_empty() {
        return;
    }
    let text = match app.typing_users.as_slice() {
        [one] => format!("{one} is typing…"),
        many => format!("{} are typing…", many.join(" and ")),
    };
    let line = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(theme::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC),
    )));
    f.render_widget(line, area);
}

fn render_compose(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let border = if editing {
        theme::BORDER_ACTIVE
    } else {
        theme::BORDER_INACTIVE
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme::BG_INPUT));

    let content = if editing {
        Line::from(caret_spans(
            &app.compose,
            app.compose_caret,
            Style::default().fg(theme::TEXT_PRIMARY),
        ))
    } else if app.compose.is_empty() {
        Line::from(Span::styled(
            format!("Message #{}", app.active_channel),
            Style::default().fg(theme::TEXT_DIM),
        ))
    } else {
        Line::from(Span::styled(
            app.compose.clone(),
            Style::default().fg(theme::TEXT_MUTED),
        ))
    };

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_member_list(f: &mut Frame, app: &App, area: Rect) {
    let online: Vec<_> = app
        .members
        .iter()
        .filter(|m| m.presence == Presence::Online)
        .collect();
    let offline: Vec<_> = app
        .members
        .iter()
        .filter(|m| m.presence == Presence::Offline)
        .collect();

    let mut lines = vec![Line::from(Span::styled(
        format!(" ONLINE — {}", online.len()),
        Style::default().fg(theme::TEXT_DIM),
    ))];
    for member in &online {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", member.avatar),
                Style::default()
                    .fg(theme::accent(member.color))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(member.name.clone(), Style::default().fg(theme::TEXT_PRIMARY)),
            Span::styled(
                format!("  {}", member.role.label()),
                Style::default().fg(theme::TEXT_DIM),
            ),
        ]));
        if let Some(status) = &member.status {
            lines.push(Line::from(Span::styled(
                format!("   {status}"),
                Style::default().fg(theme::TEXT_MUTED),
            )));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(" OFFLINE — {}", offline.len()),
        Style::default().fg(theme::TEXT_DIM),
    )));
    for member in &offline {
        lines.push(Line::from(Span::styled(
            format!(" {} {}", member.avatar, member.name),
            Style::default().fg(theme::TEXT_DIM),
        )));
    }

    let list = Paragraph::new(lines).style(Style::default().bg(theme::BG_SIDEBAR));
    f.render_widget(list, area);
}

fn render_profile_panel(f: &mut Frame, app: &App, member_idx: usize, area: Rect) {
    let Some(member) = app.members.get(member_idx) else {
        return;
    };
    let popup = centered_rect(34, 9, area);
    f.render_widget(Clear, popup);

    let presence = match member.presence {
        Presence::Online => Span::styled("● online", Style::default().fg(theme::ACCENT_SUCCESS)),
        Presence::Offline => Span::styled("○ offline", Style::default().fg(theme::TEXT_DIM)),
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", member.avatar),
                Style::default()
                    .fg(theme::accent(member.color))
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ),
            Span::styled(
                format!(" {}", member.name),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Role: ", Style::default().fg(theme::TEXT_MUTED)),
            Span::styled(member.role.label(), Style::default().fg(theme::TEXT_PRIMARY)),
        ]),
        Line::from(presence),
    ];
    if let Some(status) = &member.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default()
                .fg(theme::TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc to close",
        Style::default().fg(theme::TEXT_DIM),
    )));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_ACTIVE))
            .style(Style::default().bg(theme::BG_SECONDARY)),
    );
    f.render_widget(panel, popup);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match &app.status {
        Some(status) => status.clone(),
        None => match app.input_mode {
            InputMode::Editing => "Enter send · Esc cancel".to_string(),
            InputMode::Normal => {
                "↑/↓ select · Enter thread · i compose · Tab members · p profile · [ ] channels · q quit"
                    .to_string()
            }
        },
    };
    let bar = Paragraph::new(Line::from(Span::styled(
        format!(" {text}"),
        Style::default().fg(theme::TEXT_DIM),
    )));
    f.render_widget(bar, area);
}
