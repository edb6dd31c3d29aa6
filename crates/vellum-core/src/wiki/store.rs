//! Session-wide owner and sole mutator of thread page documents.
//!
//! Every operation is synchronous and total: an unknown document or block
//! id is absorbed as a no-op instead of surfacing an error, so the editor
//! never fails out from under the user. Structural operations return the
//! block that should receive focus next; the caller hands that to the
//! [`FocusController`](super::FocusController).

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::models::ThreadMessage;

use super::block::{Block, BlockId, BlockKind};
use super::document::Document;

/// Where fresh block ids come from.
///
/// Owned by the store instance, so two stores (or two tests) never share
/// counter state.
#[derive(Debug, Clone)]
pub enum IdSource {
    /// Monotonic `b1`, `b2`, ... ids. Deterministic, used in tests.
    Sequential { next: u64 },
    /// Random UUID v4 ids, used by the app.
    Uuid,
}

impl IdSource {
    pub fn sequential() -> Self {
        IdSource::Sequential { next: 1 }
    }

    fn next_id(&mut self) -> BlockId {
        match self {
            IdSource::Sequential { next } => {
                let id = BlockId::new(format!("b{next}"));
                *next += 1;
                id
            }
            IdSource::Uuid => BlockId::new(Uuid::new_v4().to_string()),
        }
    }
}

impl Default for IdSource {
    fn default() -> Self {
        IdSource::Uuid
    }
}

/// A block requested at page-registration time, before it has an id.
#[derive(Debug, Clone)]
pub struct SeedBlock {
    pub kind: BlockKind,
    pub content: String,
    pub checked: bool,
}

impl SeedBlock {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            checked: false,
        }
    }

    /// A todo block with an explicit checkbox state.
    pub fn todo(content: impl Into<String>, checked: bool) -> Self {
        Self {
            kind: BlockKind::Todo,
            content: content.into(),
            checked,
        }
    }
}

/// Holds every thread page created this session, keyed by the id of the
/// chat message the page grew out of.
#[derive(Debug, Clone)]
pub struct PageStore {
    pages: HashMap<String, Document>,
    ids: IdSource,
}

impl PageStore {
    pub fn new(ids: IdSource) -> Self {
        Self {
            pages: HashMap::new(),
            ids,
        }
    }

    /// The document for `message`, creating the two-block skeleton
    /// (heading seeded from the message text, one empty paragraph) on
    /// first open. Re-opening the same thread within a session returns
    /// the prior content untouched.
    pub fn open(&mut self, message: &ThreadMessage) -> &Document {
        if !self.pages.contains_key(&message.id) {
            debug!(thread_id = %message.id, "seeding thread page");
            let heading = self.fresh_block(BlockKind::Heading1, message.content.clone());
            let body = self.fresh_block(BlockKind::Paragraph, "");
            self.pages
                .insert(message.id.clone(), Document::new(vec![heading, body]));
        }
        &self.pages[&message.id]
    }

    /// Pre-register a page outline for a thread, e.g. the mock seed
    /// pages. An already-registered thread wins, matching [`open`].
    /// Empty outlines are ignored (a document is never empty).
    ///
    /// [`open`]: PageStore::open
    pub fn register(&mut self, thread_id: &str, outline: Vec<SeedBlock>) {
        if outline.is_empty() || self.pages.contains_key(thread_id) {
            return;
        }
        let blocks = outline
            .into_iter()
            .map(|seed| {
                let mut block = self.fresh_block(seed.kind, seed.content);
                if seed.kind == BlockKind::Todo {
                    block.checked = Some(seed.checked);
                }
                block
            })
            .collect();
        self.pages
            .insert(thread_id.to_string(), Document::new(blocks));
    }

    /// Read access for rendering.
    pub fn page(&self, thread_id: &str) -> Option<&Document> {
        self.pages.get(thread_id)
    }

    /// Insert a fresh empty block after `anchor` and return its id as the
    /// next focus target. An unknown anchor appends at the end of the
    /// document.
    pub fn insert_after(
        &mut self,
        thread_id: &str,
        anchor: &BlockId,
        kind: BlockKind,
    ) -> Option<BlockId> {
        let doc = self.pages.get_mut(thread_id)?;
        let block = Block::new(self.ids.next_id(), kind, "");
        let id = block.id.clone();
        let index = doc.position(anchor).map(|i| i + 1).unwrap_or(doc.len());
        doc.insert(index, block);
        Some(id)
    }

    /// Delete a block, keeping at least one in the document. Returns the
    /// id of the block now occupying the slot just above the deleted one
    /// (clamped to the top), which is where focus should land.
    pub fn remove(&mut self, thread_id: &str, id: &BlockId) -> Option<BlockId> {
        let doc = self.pages.get_mut(thread_id)?;
        if doc.len() <= 1 {
            return None;
        }
        let index = doc.position(id)?;
        doc.remove_at(index);
        Some(doc.blocks()[index.saturating_sub(1)].id.clone())
    }

    /// Swap a block with its predecessor. The first block stays put.
    pub fn move_up(&mut self, thread_id: &str, id: &BlockId) {
        if let Some(doc) = self.pages.get_mut(thread_id) {
            if let Some(index) = doc.position(id) {
                if index > 0 {
                    doc.swap(index - 1, index);
                }
            }
        }
    }

    /// Swap a block with its successor. The last block stays put.
    pub fn move_down(&mut self, thread_id: &str, id: &BlockId) {
        if let Some(doc) = self.pages.get_mut(thread_id) {
            if let Some(index) = doc.position(id) {
                if index + 1 < doc.len() {
                    doc.swap(index, index + 1);
                }
            }
        }
    }

    /// Replace a block's text payload. Nothing else changes.
    pub fn update_content(&mut self, thread_id: &str, id: &BlockId, text: impl Into<String>) {
        if let Some(block) = self.block_mut(thread_id, id) {
            block.content = text.into();
        }
    }

    /// Change a block's kind, preserving content verbatim. The checkbox
    /// exists exactly on todo blocks: converting away clears it,
    /// converting to todo starts unchecked unless the block already was
    /// a todo.
    pub fn set_kind(&mut self, thread_id: &str, id: &BlockId, kind: BlockKind) {
        if let Some(block) = self.block_mut(thread_id, id) {
            block.checked = if kind == BlockKind::Todo {
                Some(block.checked.unwrap_or(false))
            } else {
                None
            };
            block.kind = kind;
        }
    }

    /// Flip a todo's checkbox. Other kinds ignore it.
    pub fn toggle_checked(&mut self, thread_id: &str, id: &BlockId) {
        if let Some(block) = self.block_mut(thread_id, id) {
            if let Some(checked) = block.checked {
                block.checked = Some(!checked);
            }
        }
    }

    fn block_mut(&mut self, thread_id: &str, id: &BlockId) -> Option<&mut Block> {
        self.pages.get_mut(thread_id).and_then(|doc| doc.get_mut(id))
    }

    fn fresh_block(&mut self, kind: BlockKind, content: impl Into<String>) -> Block {
        Block::new(self.ids.next_id(), kind, content)
    }
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new(IdSource::default())
    }
}
