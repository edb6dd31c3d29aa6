//! Keyboard semantics for the block editor.
//!
//! Enter continues or splits; Enter on an empty list item converts it back
//! to a paragraph (how a user exits a list); Backspace on an empty block
//! removes it. Plain typing never reaches this module, and Shift+Enter is
//! deliberately absent because block content is single-line.

use super::block::{BlockId, BlockKind};
use super::store::PageStore;

/// The structural keys the editor interprets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Backspace,
}

/// What a structural key did, and where focus should go next.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// An empty list item turned back into a paragraph in place; no block
    /// was added and focus stays where it is.
    Converted,
    /// A new block was inserted after the current one; focus it.
    Split(BlockId),
    /// The block was removed; focus the block named here.
    Removed(BlockId),
    /// Consumed with no structural change (removal blocked because the
    /// document is down to its last block).
    Blocked,
    /// Not a structural key for this block state; fall back to ordinary
    /// content editing.
    Passthrough,
}

/// Apply a structural key to the focused block.
///
/// A `Passthrough` outcome is the only case where the caller should let
/// the key edit text; every other outcome means the key was consumed and
/// no literal character may be inserted.
pub fn apply_edit_key(
    store: &mut PageStore,
    thread_id: &str,
    focused: &BlockId,
    key: EditKey,
) -> KeyOutcome {
    let Some(block) = store.page(thread_id).and_then(|doc| doc.get(focused)) else {
        return KeyOutcome::Passthrough;
    };
    let kind = block.kind;
    let empty = block.is_empty();

    match key {
        EditKey::Enter => {
            let continuation = kind.continues_as();
            if empty && continuation != BlockKind::Paragraph {
                store.set_kind(thread_id, focused, BlockKind::Paragraph);
                KeyOutcome::Converted
            } else {
                match store.insert_after(thread_id, focused, continuation) {
                    Some(id) => KeyOutcome::Split(id),
                    None => KeyOutcome::Blocked,
                }
            }
        }
        EditKey::Backspace if empty => match store.remove(thread_id, focused) {
            Some(id) => KeyOutcome::Removed(id),
            None => KeyOutcome::Blocked,
        },
        EditKey::Backspace => KeyOutcome::Passthrough,
    }
}

#[cfg(test)]
mod tests {
    use crate::wiki::store::{IdSource, SeedBlock};

    use super::*;

    fn store_with(blocks: Vec<SeedBlock>) -> (PageStore, Vec<BlockId>) {
        let mut store = PageStore::new(IdSource::sequential());
        store.register("m1", blocks);
        let ids = store
            .page("m1")
            .unwrap()
            .blocks()
            .iter()
            .map(|b| b.id.clone())
            .collect();
        (store, ids)
    }

    #[test]
    fn test_enter_on_empty_paragraph_splits() {
        let (mut store, ids) = store_with(vec![
            SeedBlock::new(BlockKind::Paragraph, "A"),
            SeedBlock::new(BlockKind::Paragraph, ""),
        ]);

        let outcome = apply_edit_key(&mut store, "m1", &ids[1], EditKey::Enter);
        let doc = store.page("m1").unwrap();
        assert_eq!(doc.len(), 3);
        match outcome {
            KeyOutcome::Split(id) => {
                assert_eq!(doc.position(&id), Some(2));
                assert_eq!(doc.get(&id).unwrap().kind, BlockKind::Paragraph);
            }
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn test_enter_on_empty_list_item_converts_in_place() {
        let (mut store, ids) = store_with(vec![SeedBlock::new(BlockKind::BulletList, "")]);

        let outcome = apply_edit_key(&mut store, "m1", &ids[0], EditKey::Enter);
        assert_eq!(outcome, KeyOutcome::Converted);
        let doc = store.page("m1").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.blocks()[0].kind, BlockKind::Paragraph);
        assert_eq!(doc.blocks()[0].content, "");
    }

    #[test]
    fn test_enter_on_filled_list_item_continues_the_list() {
        let (mut store, ids) = store_with(vec![SeedBlock::todo("task", true)]);

        let outcome = apply_edit_key(&mut store, "m1", &ids[0], EditKey::Enter);
        let doc = store.page("m1").unwrap();
        match outcome {
            KeyOutcome::Split(id) => {
                let block = doc.get(&id).unwrap();
                assert_eq!(block.kind, BlockKind::Todo);
                assert_eq!(block.checked, Some(false));
            }
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn test_enter_on_heading_continues_as_paragraph() {
        let (mut store, ids) = store_with(vec![SeedBlock::new(BlockKind::Heading2, "Title")]);

        let outcome = apply_edit_key(&mut store, "m1", &ids[0], EditKey::Enter);
        let doc = store.page("m1").unwrap();
        match outcome {
            KeyOutcome::Split(id) => assert_eq!(doc.get(&id).unwrap().kind, BlockKind::Paragraph),
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn test_backspace_on_empty_block_removes_it() {
        let (mut store, ids) = store_with(vec![
            SeedBlock::new(BlockKind::Paragraph, "A"),
            SeedBlock::new(BlockKind::Paragraph, ""),
        ]);

        let outcome = apply_edit_key(&mut store, "m1", &ids[1], EditKey::Backspace);
        assert_eq!(outcome, KeyOutcome::Removed(ids[0].clone()));
        let doc = store.page("m1").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.blocks()[0].content, "A");
    }

    #[test]
    fn test_backspace_on_last_block_is_blocked() {
        let (mut store, ids) = store_with(vec![SeedBlock::new(BlockKind::Paragraph, "")]);

        let outcome = apply_edit_key(&mut store, "m1", &ids[0], EditKey::Backspace);
        assert_eq!(outcome, KeyOutcome::Blocked);
        assert_eq!(store.page("m1").unwrap().len(), 1);
    }

    #[test]
    fn test_backspace_with_content_passes_through() {
        let (mut store, ids) = store_with(vec![SeedBlock::new(BlockKind::Paragraph, "text")]);

        let outcome = apply_edit_key(&mut store, "m1", &ids[0], EditKey::Backspace);
        assert_eq!(outcome, KeyOutcome::Passthrough);
    }

    #[test]
    fn test_unknown_block_passes_through() {
        let (mut store, _) = store_with(vec![SeedBlock::new(BlockKind::Paragraph, "")]);
        let ghost = BlockId::new("nope".into());

        let outcome = apply_edit_key(&mut store, "m1", &ghost, EditKey::Enter);
        assert_eq!(outcome, KeyOutcome::Passthrough);
    }
}
