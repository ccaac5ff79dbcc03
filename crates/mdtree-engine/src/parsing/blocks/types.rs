use serde::Serialize;

/// The kind of a block, derived purely from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockType {
    /// An ATX heading; the level is always within `1..=6`.
    Heading(u8),
    /// A fenced code block. Contents are verbatim; no inline parsing inside.
    Code,
    /// Every line starts with `> `.
    Quote,
    /// Every line starts with `* ` or `- `.
    UnorderedList,
    /// Lines are numbered `1. `, `2. `, ... in order.
    OrderedList,
    /// Default when no other block rule matches.
    Paragraph,
}

impl BlockType {
    /// The tag of the container this block becomes in the document tree.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Heading(1) => "h1",
            Self::Heading(2) => "h2",
            Self::Heading(3) => "h3",
            Self::Heading(4) => "h4",
            Self::Heading(5) => "h5",
            Self::Heading(_) => "h6",
            Self::Code => "pre",
            Self::Quote => "blockquote",
            Self::UnorderedList => "ul",
            Self::OrderedList => "ol",
            Self::Paragraph => "p",
        }
    }
}
