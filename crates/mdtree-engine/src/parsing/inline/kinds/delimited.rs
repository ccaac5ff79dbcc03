use crate::parsing::inline::types::InlineSpan;

/// Inline styles written as `<delim>content<delim>`.
///
/// The delimiter constants live here; the tokenizer never hardcodes `**`,
/// `*` or `` ` ``.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimitedStyle {
    Bold,
    Italic,
    Code,
}

impl DelimitedStyle {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
    pub const CODE: &'static str = "`";

    pub fn delimiter(self) -> &'static str {
        match self {
            Self::Bold => Self::BOLD,
            Self::Italic => Self::ITALIC,
            Self::Code => Self::CODE,
        }
    }

    /// Wraps `content` in the span variant for this style.
    pub fn span(self, content: String) -> InlineSpan {
        match self {
            Self::Bold => InlineSpan::Bold(content),
            Self::Italic => InlineSpan::Italic(content),
            Self::Code => InlineSpan::Code(content),
        }
    }
}
