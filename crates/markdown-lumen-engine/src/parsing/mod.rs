//! # Parsing
//!
//! Stages one to three of the pipeline: block tokenizing, inline parsing and
//! tree building. Every stage is a pure function of its input; nothing here
//! fails, malformed input degrades into literal text.

pub mod blocks;
pub mod inline;
pub mod tree;

#[cfg(test)]
mod tests;

pub use blocks::tokenize;
pub use inline::parse_inline;
pub use tree::{Block, Document, build_tree, parse_blocks};

/// Parses markdown source into a [`Document`].
pub fn parse_document(source: &str) -> Document {
    let blocks = parse_blocks(source);
    log::debug!(
        "parsed {} bytes into {} top-level blocks",
        source.len(),
        blocks.len()
    );
    Document { blocks }
}
