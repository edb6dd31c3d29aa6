use super::block::{Block, BlockId, BlockKind};

/// Ordered sequence of blocks backing one thread page.
///
/// Insertion order is render order, top to bottom. A document is never
/// empty: it is seeded with at least one block and [`PageStore`]
/// refuses to remove the last one.
///
/// [`PageStore`]: super::PageStore
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub(crate) fn new(blocks: Vec<Block>) -> Self {
        debug_assert!(!blocks.is_empty(), "a document always has at least one block");
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| &b.id == id)
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.position(id).is_some()
    }

    /// 1-based rank of a numbered-list block among all numbered-list
    /// blocks in document order. The counter deliberately spans the whole
    /// document: two numbered runs separated by other kinds continue the
    /// same sequence. `None` for blocks of any other kind.
    pub fn numbered_ordinal(&self, id: &BlockId) -> Option<usize> {
        let pos = self.position(id)?;
        if self.blocks[pos].kind != BlockKind::NumberedList {
            return None;
        }
        let preceding = self.blocks[..pos]
            .iter()
            .filter(|b| b.kind == BlockKind::NumberedList)
            .count();
        Some(preceding + 1)
    }

    pub(crate) fn insert(&mut self, index: usize, block: Block) {
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Block {
        self.blocks.remove(index)
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.blocks.swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(kinds: &[(BlockKind, &str)]) -> Document {
        let blocks = kinds
            .iter()
            .enumerate()
            .map(|(i, (kind, content))| {
                Block::new(BlockId::new(format!("b{}", i + 1)), *kind, *content)
            })
            .collect();
        Document::new(blocks)
    }

    fn id(n: usize) -> BlockId {
        BlockId::new(format!("b{n}"))
    }

    #[test]
    fn test_numbered_ordinal_spans_interruptions() {
        let doc = doc(&[
            (BlockKind::NumberedList, "a"),
            (BlockKind::Divider, ""),
            (BlockKind::NumberedList, "b"),
        ]);
        assert_eq!(doc.numbered_ordinal(&id(1)), Some(1));
        assert_eq!(doc.numbered_ordinal(&id(3)), Some(2));
    }

    #[test]
    fn test_numbered_ordinal_none_for_other_kinds() {
        let doc = doc(&[(BlockKind::NumberedList, "a"), (BlockKind::Paragraph, "b")]);
        assert_eq!(doc.numbered_ordinal(&id(2)), None);
    }

    #[test]
    fn test_position_tracks_order() {
        let doc = doc(&[(BlockKind::Heading1, "title"), (BlockKind::Paragraph, "")]);
        assert_eq!(doc.position(&id(1)), Some(0));
        assert_eq!(doc.position(&id(2)), Some(1));
        assert_eq!(doc.position(&BlockId::new("missing".into())), None);
    }
}
