//! Keyboard event routing for the TUI.
//!
//! `view_handlers` covers the chat workspace; `wiki_handlers` covers the
//! thread page editor.

mod view_handlers;
mod wiki_handlers;

use crossterm::event::KeyEvent;

use crate::ui::{App, View};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    match app.view {
        View::Chat => view_handlers::handle_chat_key(app, key),
        View::ThreadPage => wiki_handlers::handle_thread_page_key(app, key),
    }
}

pub(crate) fn handle_paste(app: &mut App, text: &str) {
    match app.view {
        View::Chat => view_handlers::handle_chat_paste(app, text),
        View::ThreadPage => wiki_handlers::handle_thread_page_paste(app, text),
    }
}
