//! Block-structured thread pages: a chat message turned into an editable,
//! outline-style document.
//!
//! The pieces, leaves first: [`Block`] is the atomic content unit,
//! [`Document`] the ordered sequence backing one page, [`PageStore`] the
//! session-wide owner and sole mutator, [`keys`] the Enter/Backspace
//! semantics, [`FocusController`] the focus hand-off, and [`MenuState`]
//! the per-block menus.

pub mod block;
pub mod document;
pub mod focus;
pub mod keys;
pub mod menu;
pub mod store;

pub use block::{Block, BlockId, BlockKind};
pub use document::Document;
pub use focus::FocusController;
pub use keys::{apply_edit_key, EditKey, KeyOutcome};
pub use menu::{MenuEntry, MenuState};
pub use store::{IdSource, PageStore, SeedBlock};
