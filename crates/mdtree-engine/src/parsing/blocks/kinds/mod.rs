//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The classifier and
//! the tree builder call these; neither hardcodes `#`, ```` ``` ````, `> `,
//! or list markers.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FencedCode};
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
