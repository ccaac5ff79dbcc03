//! # Inline Parsing
//!
//! Stage-based inline tokenization over a sequence of [`InlineSpan`]s.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-eligible blocks (paragraphs, headings, quotes, list items). Code
//! blocks never reach it.
//!
//! Tokenizing starts from a single `Text` span. Each stage rewrites only the
//! `Text` spans it is given and passes styled spans through:
//!
//! 1. `**` bold, 2. `*` italic, 3. `` ` `` code (delimiter splitting)
//! 4. `![alt](src)` images, 5. `[label](href)` links (pattern extraction)
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum and its `SpanKind` discriminant
//! - **`kinds`**: Inline-specific types with owned delimiters (DelimitedStyle, Reference)
//! - **`delimiter`**: `split_delimiter()`
//! - **`links`**: `split_images()`, `split_links()` and the raw extractors
//! - **`parser`**: the fixed `PIPELINE`, `tokenize()` and `parse_inline()`
//!
//! ## Stage Precedence
//!
//! There is no raw zone: bold runs before code, so `**` inside backticks
//! still becomes bold and the backticks no longer pair up.

pub mod delimiter;
pub mod kinds;
pub mod links;
pub mod parser;
pub mod types;

pub use delimiter::split_delimiter;
pub use links::{extract_images, extract_links, split_images, split_links};
pub use parser::{PIPELINE, Stage, parse_inline, run_stages, tokenize};
pub use types::{InlineSpan, SpanKind};
