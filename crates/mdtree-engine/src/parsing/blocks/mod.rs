//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed, non-empty `Block`s carrying their byte spans
//!
//! 2. **Classification** (`classify`): each block's text is mapped to exactly
//!    one `BlockType` by prefix and per-line rules
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, BlockQuote, lists)
//! - **`segment`**: `Block`, the lazy `Segments` iterator and `segment()`
//! - **`classify`**: `classify()` precedence rules
//!
//! ## Key Invariants
//!
//! - Blocks never contain the blank-line separator and are never empty
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Classification is a pure function of the block text

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use segment::{BLANK_LINE, Block, Segments, segment};
pub use types::BlockType;
