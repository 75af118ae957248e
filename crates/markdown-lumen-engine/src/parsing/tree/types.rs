use serde::Serialize;

use crate::parsing::{
    blocks::{Alignment, ListKind},
    inline::InlineNode,
};

/// A fully parsed document: the top-level blocks in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A block-level node. Containers own their children; there are no back
/// references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading {
        level: u8,
        content: Vec<InlineNode>,
    },
    Paragraph {
        content: Vec<InlineNode>,
    },
    List(List),
    /// Quoted blocks; a nested quote is a `Blockquote` child.
    Blockquote {
        children: Vec<Block>,
    },
    /// Literal code. Never inline-parsed.
    CodeBlock {
        language: Option<String>,
        literal: String,
    },
    Table(Table),
    HorizontalRule,
}

/// An ordered or unordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub kind: ListKind,
    /// Ordinal of the first item of an ordered list.
    pub start: Option<u64>,
    pub items: Vec<ListItem>,
}

/// One list item. Sub-lists hang off `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Task-list checkbox state, if the item has a checkbox.
    pub checked: Option<bool>,
    pub content: Vec<InlineNode>,
    pub children: Vec<Block>,
}

/// A pipe table. Cells hold parsed inline content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header_cells: Vec<Vec<InlineNode>>,
    pub rows: Vec<Vec<Vec<InlineNode>>>,
    pub column_alignment: Vec<Alignment>,
}

impl Table {
    /// Alignment of column `i`; columns beyond the header are left-aligned.
    pub fn alignment(&self, i: usize) -> Alignment {
        self.column_alignment.get(i).copied().unwrap_or_default()
    }
}
