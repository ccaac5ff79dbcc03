use crate::parsing::span::Span;

use super::{classify::classify, types::BlockType};

/// The blank-line separator between blocks.
pub const BLANK_LINE: &str = "\n\n";

/// A trimmed, non-empty slice of the source document between blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    text: &'a str,
    span: Span,
}

impl<'a> Block<'a> {
    /// Trims the piece `span` of `source`, returning `None` if nothing is left.
    fn from_piece(source: &'a str, span: Span) -> Option<Self> {
        let piece = span.slice(source)?;
        let start_trimmed = piece.trim_start();
        let text = start_trimmed.trim_end();
        if text.is_empty() {
            return None;
        }
        let start = span.start + (piece.len() - start_trimmed.len());
        Some(Self {
            text,
            span: Span {
                start,
                end: start + text.len(),
            },
        })
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte span of the trimmed text in the source document.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn block_type(&self) -> BlockType {
        classify(self.text)
    }
}

/// Lazy iterator over the blocks of a document, in document order.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    source: &'a str,
    /// Start of the next unread piece; `None` once the source is exhausted.
    cursor: Option<usize>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        loop {
            let start = self.cursor?;
            let rest = &self.source[start..];
            let (len, next) = match rest.find(BLANK_LINE) {
                Some(i) => (i, Some(start + i + BLANK_LINE.len())),
                None => (rest.len(), None),
            };
            self.cursor = next;

            let piece = Span {
                start,
                end: start + len,
            };
            if let Some(block) = Block::from_piece(self.source, piece) {
                return Some(block);
            }
        }
    }
}

/// Splits a document into blocks on blank lines, dropping pieces that are blank.
pub fn segment(source: &str) -> Segments<'_> {
    Segments {
        source,
        cursor: Some(0),
    }
}
