//! Focus hand-off between structural edits and the render layer.

use super::block::BlockId;
use super::document::Document;

/// Tracks which block owns keyboard input.
///
/// Structural operations never grab focus directly: they file a pending
/// request here, and the render layer commits it on its next paint, once
/// the target actually exists on screen. At most one request is pending;
/// a newer one supersedes the old. Opening a page focuses nothing until
/// the user interacts.
#[derive(Debug, Clone, Default)]
pub struct FocusController {
    focused: Option<BlockId>,
    pending: Option<BlockId>,
}

impl FocusController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&BlockId> {
        self.focused.as_ref()
    }

    pub fn is_focused(&self, id: &BlockId) -> bool {
        self.focused.as_ref() == Some(id)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Ask for `id` to receive focus on the next paint.
    pub fn request(&mut self, id: BlockId) {
        self.pending = Some(id);
    }

    /// Focus a block immediately. This is for explicit user selection,
    /// not for hand-offs after structural edits; it discards any pending
    /// request.
    pub fn focus(&mut self, id: BlockId) {
        self.pending = None;
        self.focused = Some(id);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Called by the render layer at paint time: grants the pending
    /// request if its target still exists in `doc`, and returns the newly
    /// focused id.
    pub fn commit(&mut self, doc: &Document) -> Option<BlockId> {
        let id = self.pending.take()?;
        if !doc.contains(&id) {
            return None;
        }
        self.focused = Some(id.clone());
        Some(id)
    }
}
