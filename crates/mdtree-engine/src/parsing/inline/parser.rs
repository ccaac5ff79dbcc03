use super::{
    delimiter::split_delimiter,
    kinds::DelimitedStyle,
    links::{split_images, split_links},
    types::InlineSpan,
};

/// One pass of the inline tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Delimited(DelimitedStyle),
    Images,
    Links,
}

impl Stage {
    pub fn apply(self, spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
        match self {
            Self::Delimited(style) => split_delimiter(spans, style),
            Self::Images => split_images(spans),
            Self::Links => split_links(spans),
        }
    }
}

/// The fixed stage order. Earlier stages own a character run: `**` is split
/// before `*`, so `**bold**` never becomes two italics.
pub const PIPELINE: [Stage; 5] = [
    Stage::Delimited(DelimitedStyle::Bold),
    Stage::Delimited(DelimitedStyle::Italic),
    Stage::Delimited(DelimitedStyle::Code),
    Stage::Images,
    Stage::Links,
];

/// Runs `spans` through every stage of [`PIPELINE`].
///
/// Only text spans are examined, so tokenizing already styled output
/// returns it unchanged.
pub fn tokenize(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    run_stages(spans, &PIPELINE)
}

/// Runs `spans` through `stages` in order.
pub fn run_stages(spans: Vec<InlineSpan>, stages: &[Stage]) -> Vec<InlineSpan> {
    stages.iter().fold(spans, |spans, stage| stage.apply(spans))
}

/// Tokenizes one run of inline markdown, e.g. a paragraph or list item.
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    tokenize(vec![InlineSpan::text(text)])
}
