//! # Document Tree
//!
//! The output of parsing: a `DocumentNode` tree built bottom-up from
//! classified blocks and their inline spans, rendered to HTML by a read-only
//! traversal.
//!
//! ## Block Mapping
//!
//! | Block           | Subtree                                   |
//! |-----------------|-------------------------------------------|
//! | `Heading(n)`    | `h<n>` > inline leaves                    |
//! | `Code`          | `pre` > `code` leaf (verbatim)            |
//! | `Quote`         | `blockquote` > inline leaves              |
//! | `UnorderedList` | `ul` > `li` per line > inline leaves      |
//! | `OrderedList`   | `ol` > `li` per line > inline leaves      |
//! | `Paragraph`     | `p` > inline leaves                       |
//!
//! Every block is a child of one `div` root.

pub mod attributes;
pub mod builder;
pub mod node;
pub mod render;

pub use attributes::Attributes;
pub use builder::{ROOT_TAG, build_block, build_document, span_to_node};
pub use node::DocumentNode;
pub use render::{render, render_with};
