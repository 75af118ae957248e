use serde::Serialize;

/// Whether a list is bulleted or numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    /// `-`, `+` or `*` bullets.
    Unordered,
    /// `1.` style ordinals.
    Ordered,
}

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// The CSS `text-align` value for this alignment.
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// The kind of a block token, with the data each kind captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// An ATX heading (`#` .. `######`).
    Heading { level: u8 },
    /// `---`, `***` or `___`, optionally spaced.
    HorizontalRule,
    /// A single list item line.
    ListItem {
        /// Nesting depth: leading indentation / 2.
        depth: usize,
        kind: ListKind,
        /// The ordinal of an ordered item.
        number: Option<u64>,
        /// Task-list checkbox state, if the item has one.
        checked: Option<bool>,
    },
    /// A single `>`-prefixed line.
    Blockquote {
        /// Count of leading `>` markers.
        depth: usize,
    },
    /// A fenced code block, terminated or not.
    CodeFence { language: Option<String> },
    /// A pipe table with its header, body rows and column alignment.
    Table {
        header_cells: Vec<String>,
        rows: Vec<Vec<String>>,
        column_alignment: Vec<Alignment>,
    },
    /// One or more consecutive plain text lines.
    Paragraph,
    /// A whitespace-only line.
    Blank,
}

/// One block-level token produced by the tokenizer.
///
/// Tokens are transient: the tree builder consumes them and they are dropped
/// once the block tree exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockToken {
    pub kind: TokenKind,
    /// Content with the block's own markers stripped (heading hashes, list
    /// bullet, one level of `>`). For code fences this is the literal body.
    pub raw: String,
    /// Zero-based index of the first source line of this token.
    pub line: usize,
    /// Number of source lines this token consumed.
    pub line_count: usize,
}

impl BlockToken {
    /// Index one past the last line consumed by this token.
    pub fn end_line(&self) -> usize {
        self.line + self.line_count
    }
}
