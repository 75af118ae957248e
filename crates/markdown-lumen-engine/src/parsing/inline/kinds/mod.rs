//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: backtick runs; a raw zone that suppresses other parsing
//! - **`Emphasis`**: `*`/`_` delimiters, closer search, underscore word rule
//! - **`Link`** / **`ImageSize`**: bracket matching, titles, `{WxH}` and `=WxH`
//! - **`Decoration`**: `<u>` underline and `~~` strikethrough
//! - **`RawTags`**: the `<font>`, `<up>`, `<down>` allow-list
//! - **`Latex`**: `$` delimiter and the macro table
//!
//! The parser calls these constants; it never hardcodes delimiters.

pub mod code_span;
pub mod emphasis;
pub mod latex;
pub mod link;
pub mod markup;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use latex::Latex;
pub use link::{ImageSize, Link};
pub use markup::{Decoration, RawTags};
