use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies one block's text. Total: every input gets exactly one [`BlockType`].
///
/// Rules are tried in precedence order, first match wins:
/// heading, code, quote, unordered list, ordered list, paragraph.
///
/// A block opening with `1. ` whose later lines are not numbered in sequence
/// is a paragraph; the other rules are not consulted again.
pub fn classify(block: &str) -> BlockType {
    if block.is_empty() {
        return BlockType::Paragraph;
    }
    if let Some(level) = Heading::level(block) {
        return BlockType::Heading(level);
    }
    if CodeFence::matches(block) {
        return BlockType::Code;
    }
    if BlockQuote::matches(block) {
        return BlockType::Quote;
    }
    if UnorderedList::matches(block) {
        return BlockType::UnorderedList;
    }
    if OrderedList::starts(block) && OrderedList::is_sequential(block) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}
