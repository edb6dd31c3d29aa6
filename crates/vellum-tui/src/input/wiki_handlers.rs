//! Key handling for the thread page editor.
//!
//! Two modes, like the rest of the app: browsing blocks (Normal) and
//! editing the focused block (Editing). Structural keys go through the
//! edit-key interpreter; everything else is plain content editing against
//! the page store.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vellum_core::wiki::{apply_edit_key, BlockKind, EditKey, KeyOutcome, MenuEntry, PageStore};

use crate::ui::format::{next_boundary, prev_boundary, strip_newlines};
use crate::ui::{App, InputMode, ThreadPageState};

pub(super) fn handle_thread_page_key(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        InputMode::Normal => handle_browse_key(app, key),
        InputMode::Editing => handle_edit_key(app, key),
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    let menu_open = app
        .thread_page
        .as_ref()
        .map(|p| !p.menu.is_closed())
        .unwrap_or(false);

    // Esc leaves the page entirely (the host gets its close signal);
    // with a menu open it only closes the menu.
    if key.code == KeyCode::Esc && !menu_open {
        app.close_document();
        return;
    }

    let Some(page) = app.thread_page.as_mut() else {
        return;
    };

    if menu_open {
        match key.code {
            KeyCode::Esc => page.menu.close(),
            KeyCode::Up | KeyCode::Char('k') => page.menu.cursor_prev(),
            KeyCode::Down | KeyCode::Char('j') => page.menu.cursor_next(),
            KeyCode::Enter => activate_menu(&mut app.pages, page),
            _ => {}
        }
        return;
    }

    let thread_id = page.message.id.clone();
    let Some(doc) = app.pages.page(&thread_id) else {
        return;
    };
    let len = doc.len();
    page.selected = page.selected.min(len - 1);
    let block = doc.blocks()[page.selected].clone();

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => page.selected = page.selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => page.selected = (page.selected + 1).min(len - 1),
        KeyCode::Enter => {
            // Dividers carry no text; retype or delete them via the menu.
            if block.kind != BlockKind::Divider {
                page.focus.focus(block.id.clone());
                page.caret = block.content.len();
                app.input_mode = InputMode::Editing;
            }
        }
        KeyCode::Char('m') => page.menu.open_action_menu(block.id.clone()),
        KeyCode::Char('t') => page.menu.open_type_picker(block.id.clone()),
        KeyCode::Char(' ') => app.pages.toggle_checked(&thread_id, &block.id),
        _ => {}
    }
}

fn activate_menu(pages: &mut PageStore, page: &mut ThreadPageState) {
    let thread_id = page.message.id.clone();

    if let Some(entry) = page.menu.selected_entry() {
        let Some(block) = page.menu.action_menu().cloned() else {
            return;
        };
        match entry {
            MenuEntry::TurnInto => {
                page.menu.open_type_picker(block);
                return;
            }
            MenuEntry::MoveUp => pages.move_up(&thread_id, &block),
            MenuEntry::MoveDown => pages.move_down(&thread_id, &block),
            MenuEntry::Delete => {
                if let Some(target) = pages.remove(&thread_id, &block) {
                    if let Some(pos) = pages.page(&thread_id).and_then(|d| d.position(&target)) {
                        page.selected = pos;
                    }
                }
            }
        }
        // Selection follows the block the user acted on.
        if let Some(pos) = pages.page(&thread_id).and_then(|d| d.position(&block)) {
            page.selected = pos;
        }
        page.menu.close();
    } else if let Some(kind) = page.menu.selected_kind() {
        if let Some(block) = page.menu.type_picker().cloned() {
            pages.set_kind(&thread_id, &block, kind);
        }
        page.menu.close();
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    let Some(page) = app.thread_page.as_mut() else {
        return;
    };
    let thread_id = page.message.id.clone();
    let Some(focused) = page.focus.focused().cloned() else {
        app.input_mode = InputMode::Normal;
        return;
    };
    let Some(content) = app
        .pages
        .page(&thread_id)
        .and_then(|d| d.get(&focused))
        .map(|b| b.content.clone())
    else {
        page.focus.blur();
        app.input_mode = InputMode::Normal;
        return;
    };
    page.caret = page.caret.min(content.len());

    match key.code {
        KeyCode::Esc => {
            if let Some(pos) = app.pages.page(&thread_id).and_then(|d| d.position(&focused)) {
                page.selected = pos;
            }
            page.focus.blur();
            app.input_mode = InputMode::Normal;
        }
        // Shift+Enter is left alone: block content is single-line, so it
        // neither splits the block nor inserts anything.
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {}
        KeyCode::Enter => {
            match apply_edit_key(&mut app.pages, &thread_id, &focused, EditKey::Enter) {
                KeyOutcome::Split(id) | KeyOutcome::Removed(id) => page.focus.request(id),
                KeyOutcome::Converted => page.caret = 0,
                KeyOutcome::Blocked | KeyOutcome::Passthrough => {}
            }
        }
        KeyCode::Backspace if content.is_empty() => {
            if let KeyOutcome::Removed(id) =
                apply_edit_key(&mut app.pages, &thread_id, &focused, EditKey::Backspace)
            {
                page.focus.request(id);
            }
        }
        KeyCode::Backspace => {
            if page.caret > 0 {
                let start = prev_boundary(&content, page.caret);
                let mut next = content.clone();
                next.replace_range(start..page.caret, "");
                app.pages.update_content(&thread_id, &focused, next);
                page.caret = start;
            }
        }
        KeyCode::Delete => {
            let end = next_boundary(&content, page.caret);
            if end > page.caret {
                let mut next = content.clone();
                next.replace_range(page.caret..end, "");
                app.pages.update_content(&thread_id, &focused, next);
            }
        }
        KeyCode::Left => page.caret = prev_boundary(&content, page.caret),
        KeyCode::Right => page.caret = next_boundary(&content, page.caret),
        KeyCode::Home => page.caret = 0,
        KeyCode::End => page.caret = content.len(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut next = content.clone();
            next.insert(page.caret, c);
            app.pages.update_content(&thread_id, &focused, next);
            page.caret += c.len_utf8();
        }
        _ => {}
    }
}

pub(super) fn handle_thread_page_paste(app: &mut App, text: &str) {
    if app.input_mode != InputMode::Editing {
        return;
    }
    let Some(page) = app.thread_page.as_mut() else {
        return;
    };
    let thread_id = page.message.id.clone();
    let Some(focused) = page.focus.focused().cloned() else {
        return;
    };
    let Some(content) = app
        .pages
        .page(&thread_id)
        .and_then(|d| d.get(&focused))
        .map(|b| b.content.clone())
    else {
        return;
    };

    let pasted = strip_newlines(text);
    let caret = page.caret.min(content.len());
    let mut next = content;
    next.insert_str(caret, &pasted);
    app.pages.update_content(&thread_id, &focused, next);
    page.caret = caret + pasted.len();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::View;

    fn press(app: &mut App, code: KeyCode) {
        handle_thread_page_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    /// Open the page for feed message `index` and return its thread id.
    fn open_page(app: &mut App, index: usize) -> String {
        let message = app.active_feed()[index].clone();
        let id = message.id.clone();
        app.open_document(message);
        id
    }

    #[test]
    fn test_enter_begins_editing_selected_block() {
        let mut app = App::new();
        open_page(&mut app, 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Editing);
        let page = app.thread_page.as_ref().unwrap();
        assert!(page.focus.focused().is_some());
        assert!(page.caret > 0, "caret lands at the end of the heading");
    }

    #[test]
    fn test_typing_edits_block_content() {
        let mut app = App::new();
        let thread_id = open_page(&mut app, 1);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        for c in "ok".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        let doc = app.pages.page(&thread_id).unwrap();
        assert_eq!(doc.blocks()[1].content, "ok");
    }

    #[test]
    fn test_enter_splits_and_hand_off_lands_next_frame() {
        let mut app = App::new();
        let thread_id = open_page(&mut app, 1);

        // Edit the empty trailing paragraph and press Enter.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        let doc = app.pages.page(&thread_id).unwrap();
        assert_eq!(doc.len(), 3);
        let new_id = doc.blocks()[2].id.clone();

        // The hand-off is pending until the next paint.
        assert!(app.thread_page.as_ref().unwrap().focus.has_pending());
        app.commit_focus();
        let page = app.thread_page.as_ref().unwrap();
        assert!(page.focus.is_focused(&new_id));
        assert_eq!(page.caret, 0);
    }

    #[test]
    fn test_backspace_on_empty_block_merges_up() {
        let mut app = App::new();
        let thread_id = open_page(&mut app, 1);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);

        let first_id = app.pages.page(&thread_id).unwrap().blocks()[0].id.clone();
        assert_eq!(app.pages.page(&thread_id).unwrap().len(), 1);
        app.commit_focus();
        let page = app.thread_page.as_ref().unwrap();
        assert!(page.focus.is_focused(&first_id));
    }

    #[test]
    fn test_shift_enter_is_ignored() {
        let mut app = App::new();
        let thread_id = open_page(&mut app, 1);

        press(&mut app, KeyCode::Enter);
        let before = app.pages.page(&thread_id).unwrap().clone();
        handle_thread_page_key(
            &mut app,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT),
        );
        assert_eq!(app.pages.page(&thread_id).unwrap(), &before);
    }

    #[test]
    fn test_menu_turn_into_applies_kind_and_closes() {
        let mut app = App::new();
        let thread_id = open_page(&mut app, 1);

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Enter); // "Turn into..." swaps to the picker
        {
            let page = app.thread_page.as_ref().unwrap();
            assert!(page.menu.type_picker().is_some());
            assert!(page.menu.action_menu().is_none());
        }

        // Pick "Quote" (index 8 in the kind list).
        for _ in 0..8 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);

        let doc = app.pages.page(&thread_id).unwrap();
        assert_eq!(doc.blocks()[0].kind, BlockKind::Quote);
        assert!(app.thread_page.as_ref().unwrap().menu.is_closed());
    }

    #[test]
    fn test_menu_delete_moves_selection_up() {
        let mut app = App::new();
        let thread_id = open_page(&mut app, 1);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('m'));
        for _ in 0..3 {
            press(&mut app, KeyCode::Down); // Delete row
        }
        press(&mut app, KeyCode::Enter);

        let doc = app.pages.page(&thread_id).unwrap();
        assert_eq!(doc.len(), 1);
        let page = app.thread_page.as_ref().unwrap();
        assert_eq!(page.selected, 0);
        assert!(page.menu.is_closed());
    }

    #[test]
    fn test_space_toggles_todo_checkbox() {
        let mut app = App::new();
        // Message "1" has the seeded design-system page with todos.
        let thread_id = open_page(&mut app, 0);

        // Walk down to the first todo (row 9).
        for _ in 0..9 {
            press(&mut app, KeyCode::Down);
        }
        let doc = app.pages.page(&thread_id).unwrap();
        let todo_id = doc.blocks()[9].id.clone();
        assert_eq!(doc.blocks()[9].checked, Some(true));

        press(&mut app, KeyCode::Char(' '));
        let doc = app.pages.page(&thread_id).unwrap();
        assert_eq!(doc.get(&todo_id).unwrap().checked, Some(false));
    }

    #[test]
    fn test_esc_closes_menu_then_page() {
        let mut app = App::new();
        open_page(&mut app, 1);

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, View::ThreadPage);
        assert!(app.thread_page.as_ref().unwrap().menu.is_closed());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, View::Chat);
        assert!(app.thread_page.is_none());
    }

    #[test]
    fn test_empty_list_item_converts_instead_of_splitting() {
        let mut app = App::new();
        let thread_id = open_page(&mut app, 1);

        // Turn the trailing empty paragraph into a bullet via the picker.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('t'));
        for _ in 0..4 {
            press(&mut app, KeyCode::Down); // Bullet List row
        }
        press(&mut app, KeyCode::Enter);
        let doc = app.pages.page(&thread_id).unwrap();
        assert_eq!(doc.blocks()[1].kind, BlockKind::BulletList);

        // Enter on the empty bullet converts it back to a paragraph.
        press(&mut app, KeyCode::Enter); // begin editing
        press(&mut app, KeyCode::Enter); // structural key
        let doc = app.pages.page(&thread_id).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.blocks()[1].kind, BlockKind::Paragraph);
    }
}
