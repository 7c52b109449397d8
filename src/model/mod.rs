//! Chunk and entry data model consumed by the listing view.
//!
//! A `Chunk` describes one contiguous disassembled region. An `Entry`
//! decides how a chunk appears in a single row: collapsed to one line,
//! or as begin/end markers bracketing its body. The view reads these,
//! never writes them.

pub mod text_repr;

use text_repr::TextRepr;

/// Identifier shared by a chunk and the row that displays it.
pub type ChunkId = u64;

/// One contiguous disassembled region.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub id: ChunkId,
    pub addr_begin: u64,
    pub addr_end: u64,
    pub display_name: String,
    pub kind: String,
    pub comment: String,
    /// Rendered body, shown when the chunk is displayed collapsed.
    pub text: Option<TextRepr>,
}

/// How a chunk (or part of it) is rendered in one row.
#[derive(Debug, Clone)]
pub enum Entry {
    /// The whole chunk on one line, body from its text tree.
    ChunkCollapsed { chunk: Chunk },
    /// Opening marker of an expanded chunk.
    ChunkBegin { chunk: Chunk },
    /// Closing marker of an expanded chunk.
    ChunkEnd { chunk: Chunk },
    /// Overlapping region. Rendering policy undecided, rows ignore it.
    Overlap { chunk: Chunk },
    /// Data field inside a chunk. Rendering policy undecided, rows ignore it.
    Field { chunk: Chunk },
}

impl Entry {
    pub fn chunk(&self) -> &Chunk {
        match self {
            Entry::ChunkCollapsed { chunk }
            | Entry::ChunkBegin { chunk }
            | Entry::ChunkEnd { chunk }
            | Entry::Overlap { chunk }
            | Entry::Field { chunk } => chunk,
        }
    }

    pub fn id(&self) -> ChunkId {
        self.chunk().id
    }
}

/// One collapsible chunk plus the rows of its expanded body.
#[derive(Debug, Clone)]
pub struct Block {
    pub chunk: Chunk,
    pub body: Vec<Entry>,
    pub collapsed: bool,
}

/// The listing the viewer displays: an ordered set of blocks with their
/// collapse state. Flattens to the entry sequence the view renders.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    blocks: Vec<Block>,
}

impl Listing {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Flatten to displayable entries. A collapsed block becomes one
    /// `ChunkCollapsed` row; an expanded one becomes begin marker, body,
    /// end marker.
    pub fn entries(&self) -> Vec<Entry> {
        let mut out = Vec::new();
        for block in &self.blocks {
            if block.collapsed {
                out.push(Entry::ChunkCollapsed {
                    chunk: block.chunk.clone(),
                });
            } else {
                out.push(Entry::ChunkBegin {
                    chunk: block.chunk.clone(),
                });
                out.extend(block.body.iter().cloned());
                out.push(Entry::ChunkEnd {
                    chunk: block.chunk.clone(),
                });
            }
        }
        out
    }

    /// Flip the collapse state of the block owning `id`. Returns false
    /// when no block matches (body rows are not collapsible here).
    pub fn toggle_collapse(&mut self, id: ChunkId) -> bool {
        match self.blocks.iter_mut().find(|b| b.chunk.id == id) {
            Some(block) => {
                block.collapsed = !block.collapsed;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(id: ChunkId, begin: u64, end: u64) -> Chunk {
        Chunk {
            id,
            addr_begin: begin,
            addr_end: end,
            display_name: format!("chunk{id}"),
            kind: "Block".into(),
            comment: String::new(),
            text: None,
        }
    }

    fn instruction(id: ChunkId, addr: u64) -> Entry {
        Entry::ChunkCollapsed {
            chunk: chunk(id, addr, addr + 4),
        }
    }

    #[test]
    fn collapsed_block_is_one_entry() {
        let listing = Listing::new(vec![Block {
            chunk: chunk(1, 0x100, 0x120),
            body: vec![instruction(2, 0x100), instruction(3, 0x104)],
            collapsed: true,
        }]);
        let entries = listing.entries();
        assert_eq!(entries.len(), 1);
        assert!(matches!(entries[0], Entry::ChunkCollapsed { .. }));
    }

    #[test]
    fn expanded_block_brackets_its_body() {
        let listing = Listing::new(vec![Block {
            chunk: chunk(1, 0x100, 0x120),
            body: vec![instruction(2, 0x100)],
            collapsed: false,
        }]);
        let entries = listing.entries();
        assert_eq!(entries.len(), 3);
        assert!(matches!(entries[0], Entry::ChunkBegin { .. }));
        assert!(matches!(entries[1], Entry::ChunkCollapsed { .. }));
        assert!(matches!(entries[2], Entry::ChunkEnd { .. }));
        assert_eq!(entries[0].id(), 1);
        assert_eq!(entries[2].id(), 1);
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut listing = Listing::new(vec![Block {
            chunk: chunk(1, 0, 8),
            body: vec![],
            collapsed: false,
        }]);
        assert!(listing.toggle_collapse(1));
        assert_eq!(listing.entries().len(), 1);
        assert!(listing.toggle_collapse(1));
        assert_eq!(listing.entries().len(), 2);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut listing = Listing::new(vec![Block {
            chunk: chunk(1, 0, 8),
            body: vec![],
            collapsed: true,
        }]);
        assert!(!listing.toggle_collapse(99));
        assert_eq!(listing.entries().len(), 1);
    }
}
