use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::ui::views::{chat, wiki};
use crate::ui::{theme, App, View};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(theme::BG_APP)), area);

    match app.view {
        View::Chat => chat::render_chat(f, app, area),
        View::ThreadPage => {
            if let Some(page) = &app.thread_page {
                wiki::render_thread_page(f, app, page, area);
            }
        }
    }
}
