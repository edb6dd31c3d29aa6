//! Per-block menus: the action menu and the "Turn into..." type picker.
//!
//! Both menus live in one value object so mutual exclusion is enforced in
//! one place: at most one menu is open anywhere, and opening a menu on one
//! block closes whatever was open on another.

use super::block::{BlockId, BlockKind};

/// Rows of the per-block action menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    TurnInto,
    MoveUp,
    MoveDown,
    Delete,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 4] = [
        MenuEntry::TurnInto,
        MenuEntry::MoveUp,
        MenuEntry::MoveDown,
        MenuEntry::Delete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::TurnInto => "Turn into...",
            MenuEntry::MoveUp => "Move up",
            MenuEntry::MoveDown => "Move down",
            MenuEntry::Delete => "Delete",
        }
    }
}

/// Which menu (if any) is open, on which block, and which row is
/// highlighted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    action_menu: Option<BlockId>,
    type_picker: Option<BlockId>,
    cursor: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.action_menu.is_none() && self.type_picker.is_none()
    }

    /// Block whose action menu is open.
    pub fn action_menu(&self) -> Option<&BlockId> {
        self.action_menu.as_ref()
    }

    /// Block whose type picker is open.
    pub fn type_picker(&self) -> Option<&BlockId> {
        self.type_picker.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Open the action menu for `id`, closing any menu open elsewhere.
    pub fn open_action_menu(&mut self, id: BlockId) {
        self.type_picker = None;
        self.action_menu = Some(id);
        self.cursor = 0;
    }

    /// Open the type picker for `id`. Used both for "Turn into..." from
    /// the action menu (which this closes) and for opening the picker
    /// directly.
    pub fn open_type_picker(&mut self, id: BlockId) {
        self.action_menu = None;
        self.type_picker = Some(id);
        self.cursor = 0;
    }

    /// Close both menus (Esc, or attention leaving the block).
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn cursor_next(&mut self) {
        let rows = self.row_count();
        if rows > 0 {
            self.cursor = (self.cursor + 1) % rows;
        }
    }

    pub fn cursor_prev(&mut self) {
        let rows = self.row_count();
        if rows > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(rows - 1);
        }
    }

    /// The action-menu row under the cursor, when the action menu is open.
    pub fn selected_entry(&self) -> Option<MenuEntry> {
        self.action_menu.as_ref()?;
        MenuEntry::ALL.get(self.cursor).copied()
    }

    /// The block kind under the cursor, when the type picker is open.
    pub fn selected_kind(&self) -> Option<BlockKind> {
        self.type_picker.as_ref()?;
        BlockKind::ALL.get(self.cursor).copied()
    }

    fn row_count(&self) -> usize {
        if self.action_menu.is_some() {
            MenuEntry::ALL.len()
        } else if self.type_picker.is_some() {
            BlockKind::ALL.len()
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> BlockId {
        BlockId::new(raw.into())
    }

    #[test]
    fn test_starts_closed() {
        let menu = MenuState::new();
        assert!(menu.is_closed());
        assert_eq!(menu.selected_entry(), None);
        assert_eq!(menu.selected_kind(), None);
    }

    #[test]
    fn test_action_menu_closes_picker_anywhere() {
        let mut menu = MenuState::new();
        menu.open_type_picker(id("b1"));
        menu.open_action_menu(id("b2"));
        assert_eq!(menu.action_menu(), Some(&id("b2")));
        assert_eq!(menu.type_picker(), None);
    }

    #[test]
    fn test_turn_into_swaps_menu_for_picker() {
        let mut menu = MenuState::new();
        menu.open_action_menu(id("b1"));
        menu.open_type_picker(id("b1"));
        assert_eq!(menu.action_menu(), None);
        assert_eq!(menu.type_picker(), Some(&id("b1")));
    }

    #[test]
    fn test_close_drops_both() {
        let mut menu = MenuState::new();
        menu.open_action_menu(id("b1"));
        menu.close();
        assert!(menu.is_closed());
    }

    #[test]
    fn test_cursor_wraps_over_action_entries() {
        let mut menu = MenuState::new();
        menu.open_action_menu(id("b1"));
        assert_eq!(menu.selected_entry(), Some(MenuEntry::TurnInto));

        menu.cursor_prev();
        assert_eq!(menu.selected_entry(), Some(MenuEntry::Delete));
        menu.cursor_next();
        assert_eq!(menu.selected_entry(), Some(MenuEntry::TurnInto));
    }

    #[test]
    fn test_cursor_resets_when_reopened() {
        let mut menu = MenuState::new();
        menu.open_action_menu(id("b1"));
        menu.cursor_next();
        menu.cursor_next();
        menu.open_type_picker(id("b1"));
        assert_eq!(menu.cursor(), 0);
        assert_eq!(menu.selected_kind(), Some(BlockKind::Paragraph));
    }

    #[test]
    fn test_cursor_walks_all_kinds() {
        let mut menu = MenuState::new();
        menu.open_type_picker(id("b1"));
        for expected in BlockKind::ALL {
            assert_eq!(menu.selected_kind(), Some(expected));
            menu.cursor_next();
        }
        assert_eq!(menu.selected_kind(), Some(BlockKind::Paragraph));
    }

    #[test]
    fn test_cursor_keys_ignored_when_closed() {
        let mut menu = MenuState::new();
        menu.cursor_next();
        menu.cursor_prev();
        assert_eq!(menu.cursor(), 0);
    }
}
