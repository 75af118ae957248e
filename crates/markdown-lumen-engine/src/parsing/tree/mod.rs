//! # Tree Building
//!
//! Stage three of the pipeline: block tokens in, a nested [`Block`] tree out.
//!
//! ## Modules
//!
//! - **`types`**: `Document`, `Block`, `List`, `ListItem`, `Table`
//! - **`lists`**: `ListStack`, the one place list nesting is decided
//! - **`builder`**: `TreeBuilder`, `build_tree` and `parse_blocks`
//!
//! ## Key Invariants
//!
//! - List depth comes from the token's recorded depth only
//! - Consecutive blockquote tokens form one quote whose interior is parsed by
//!   recursion; nested quotes fall out of the inner pass
//! - Leaf text fields are inline-parsed exactly once, here

pub mod builder;
pub mod lists;
pub mod types;

pub use builder::{TreeBuilder, build_tree, parse_blocks};
pub use lists::ListStack;
pub use types::{Block, Document, List, ListItem, Table};
