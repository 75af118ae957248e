//! # Inline Parsing
//!
//! Stage two of the pipeline: cursor-based inline parsing over the text of a
//! single leaf field (heading text, paragraph, list item, table cell).
//!
//! ## Architecture
//!
//! The parser walks the text left to right. At each position it tries the
//! constructs in a fixed precedence order and falls back to literal text.
//! Container constructs (strong, emphasis, link text, underline,
//! strikethrough, raw tags) parse their contents by recursing, so nesting is
//! just a deeper call.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode`, `MathNode`, `RawTag`
//! - **`kinds`**: inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for character-by-character parsing
//! - **`closers`**: `Closers`, the per-pass index of closers to the right
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans suppress all other parsing inside them: `` `**x**` `` is one
//! `CodeSpan`, not text containing strong.
//!
//! ## Key Invariants
//!
//! - Unmatched delimiters become literal text; parsing never fails
//! - No two `Text` nodes are ever adjacent in a result
//! - A closer search that comes up empty is never repeated for a later
//!   opener of the same kind, so a pass stays linear in its input
//! - Containers nest at most `MAX_NESTING` deep; deeper content is text

pub mod closers;
pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{MAX_NESTING, merge_text, parse_inline};
pub use types::{InlineNode, MathNode, RawTag};
