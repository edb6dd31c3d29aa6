//! Key handling for the chat workspace.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::format::{next_boundary, prev_boundary, strip_newlines};
use crate::ui::{App, InputMode};

pub(super) fn handle_chat_key(app: &mut App, key: KeyEvent) {
    if app.profile_member.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            app.close_profile();
        }
        return;
    }

    match app.input_mode {
        InputMode::Editing => handle_compose_key(app, key),
        InputMode::Normal => handle_browse_key(app, key),
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('i') => app.input_mode = InputMode::Editing,
        KeyCode::Up | KeyCode::Char('k') => app.select_prev_message(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_message(),
        // Enter turns the selected message into an editable thread page
        KeyCode::Enter => {
            if let Some(message) = app.selected_message().cloned() {
                app.open_document(message);
            }
        }
        KeyCode::Tab => app.toggle_members(),
        KeyCode::Char('p') => {
            if let Some(author) = app.selected_message().map(|m| m.author.clone()) {
                app.open_profile(&author);
            }
        }
        KeyCode::Char(']') => app.next_channel(),
        KeyCode::Char('[') => app.prev_channel(),
        KeyCode::Char('}') => app.next_server(),
        KeyCode::Char('{') => app.prev_server(),
        _ => {}
    }
}

fn handle_compose_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Enter => app.send_message(),
        KeyCode::Backspace => {
            if app.compose_caret > 0 {
                let start = prev_boundary(&app.compose, app.compose_caret);
                app.compose.replace_range(start..app.compose_caret, "");
                app.compose_caret = start;
            }
        }
        KeyCode::Delete => {
            let end = next_boundary(&app.compose, app.compose_caret);
            if end > app.compose_caret {
                app.compose.replace_range(app.compose_caret..end, "");
            }
        }
        KeyCode::Left => app.compose_caret = prev_boundary(&app.compose, app.compose_caret),
        KeyCode::Right => app.compose_caret = next_boundary(&app.compose, app.compose_caret),
        KeyCode::Home => app.compose_caret = 0,
        KeyCode::End => app.compose_caret = app.compose.len(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.compose.insert(app.compose_caret, c);
            app.compose_caret += c.len_utf8();
        }
        _ => {}
    }
}

pub(super) fn handle_chat_paste(app: &mut App, text: &str) {
    if app.input_mode != InputMode::Editing {
        return;
    }
    let text = strip_newlines(text);
    app.compose.insert_str(app.compose_caret, &text);
    app.compose_caret += text.len();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::View;

    fn press(app: &mut App, code: KeyCode) {
        handle_chat_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_enter_opens_thread_page_for_selected_message() {
        let mut app = App::new();
        app.selected_message_index = 0;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view, View::ThreadPage);
        assert_eq!(app.thread_page.as_ref().unwrap().thread_id(), "1");
    }

    #[test]
    fn test_compose_round_trip() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.input_mode, InputMode::Editing);

        for c in "hey".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        let before = app.active_feed().len();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active_feed().len(), before + 1);
        assert_eq!(app.active_feed().last().unwrap().content, "hey");
    }

    #[test]
    fn test_profile_panel_captures_keys_until_closed() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('p'));
        assert!(app.profile_member.is_some());

        // q closes the panel instead of quitting
        press(&mut app, KeyCode::Char('q'));
        assert!(app.profile_member.is_none());
        assert!(app.running);
    }

    #[test]
    fn test_paste_collapses_newlines_into_compose() {
        let mut app = App::new();
        app.input_mode = InputMode::Editing;
        handle_chat_paste(&mut app, "one\ntwo");
        assert_eq!(app.compose, "one two");
        assert_eq!(app.compose_caret, app.compose.len());
    }
}
