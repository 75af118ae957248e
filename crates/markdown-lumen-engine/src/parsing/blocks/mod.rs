//! # Block Tokenizing
//!
//! Stage one of the pipeline: raw text in, an ordered sequence of typed
//! [`BlockToken`]s out.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    [`LineClass`] from local facts only (blank, fence opener, heading, rule,
//!    table row, quote depth, list marker).
//! 2. **Tokenizing** (`tokenizer`): a single forward cursor groups lines into
//!    tokens. Fences and tables look ahead and consume every line they cover.
//!
//! ## Modules
//!
//! - **`types`**: `BlockToken`, `TokenKind`, `ListKind`, `Alignment`
//! - **`kinds`**: block-specific types owning their syntax (fence, heading, rule,
//!   table, blockquote, list item, paragraph)
//! - **`classify`**: `MarkdownLineClassifier` producing `LineClass`
//! - **`tokenizer`**: `BlockTokenizer` and the `tokenize` entry point
//!
//! ## Key Invariants
//!
//! - Every input line is consumed by exactly one token
//! - Fenced code bodies are raw: no block or inline parsing inside
//! - Blockquote lines become one token each; grouping happens in the tree builder

pub mod classify;
pub mod kinds;
pub mod tokenizer;
pub mod types;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use tokenizer::{BlockTokenizer, tokenize};
pub use types::{Alignment, BlockToken, ListKind, TokenKind};
