//! # markdown-lumen engine
//!
//! A markdown-to-structured-document compiler.
//!
//! ## Pipeline
//!
//! 1. **Block tokenizer** (`parsing::blocks`): lines to typed block tokens
//! 2. **Inline span parser** (`parsing::inline`): leaf text to inline trees
//! 3. **Tree builder** (`parsing::tree`): tokens to a nested block tree
//! 4. **Document renderer** (`render`): block tree to an output tree
//!
//! Each call runs on fresh data and never fails: malformed input degrades to
//! literal text. The only fallible entry points are in [`io`].

pub mod io;
pub mod parsing;
pub mod render;

pub use io::{IoError, compile_file, read_source};
pub use parsing::{
    Block, Document,
    blocks::{BlockToken, TokenKind, tokenize},
    inline::{InlineNode, MathNode, RawTag, parse_inline},
    parse_document,
    tree::{List, ListItem, Table},
};
pub use render::{OutputNode, OutputTree, escape_html, render_document};

/// Compiles markdown source into an output tree.
pub fn compile(source: &str) -> OutputTree {
    render_document(&parse_document(source))
}
