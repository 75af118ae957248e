//! # Rendering
//!
//! Stage four of the pipeline: a pure walk from the block tree to an abstract
//! output tree of `(kind, attributes, children)` nodes, plus its HTML
//! serialization.
//!
//! ## Modules
//!
//! - **`output`**: `OutputNode`, `OutputTree` and the node builder methods
//! - **`blocks`**: per-block dispatch (`render_document`)
//! - **`inline`**: the mirrored inline pass, LaTeX layout, raw tags
//! - **`highlight`**: the heuristic code highlighter
//! - **`html`**: `escape_html` and the serializer
//!
//! ## Key Invariants
//!
//! - Nesting is read from the tree; the renderer never re-derives it
//! - Text leaves are literal; escaping happens only in `html`

pub mod blocks;
pub mod highlight;
pub mod html;
pub mod inline;
pub mod output;

pub use blocks::render_document;
pub use highlight::Language;
pub use html::escape_html;
pub use output::{OutputNode, OutputTree};
