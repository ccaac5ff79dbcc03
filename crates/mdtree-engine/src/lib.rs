pub mod error;
pub mod options;
pub mod parsing;
pub mod tree;

// Re-export key types for easier usage
pub use error::{SpanError, StructuralError};
pub use options::{ParseOptions, QuoteJoin};
pub use parsing::{
    blocks::{Block, BlockType, classify, segment},
    inline::{InlineSpan, SpanKind, tokenize},
    markdown_to_html, parse_document, parse_document_with,
};
pub use tree::{Attributes, DocumentNode, render, render_with};
