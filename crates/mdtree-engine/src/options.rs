use serde::{Deserialize, Serialize};

/// How the lines of a block quote are rejoined once their `> ` prefixes are removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteJoin {
    /// Keep the original line breaks.
    #[default]
    Newline,
    /// Fold the quote onto a single line.
    Space,
}

impl QuoteJoin {
    pub fn separator(self) -> &'static str {
        match self {
            Self::Newline => "\n",
            Self::Space => " ",
        }
    }
}

/// Knobs for building and rendering a document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub quote_join: QuoteJoin,
    /// Escape text and attribute values when rendering.
    pub escape_html: bool,
    /// Turn a code fence info string into `class="language-<info>"`.
    pub code_language_class: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            quote_join: QuoteJoin::Newline,
            escape_html: false,
            code_language_class: true,
        }
    }
}
