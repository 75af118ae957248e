//! # Block Kinds
//!
//! Block-specific types that own their syntax: delimiters, line patterns and
//! the small amount of per-kind decoding (heading level, list depth, table
//! alignment). The classifier and tokenizer call into these; they never
//! hardcode `#`, `>` or `|` themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::{ListItem, ListMarker};
pub use paragraph::Paragraph;
pub use rule::HorizontalRule;
pub use table::Table;
