use crate::{
    options::ParseOptions,
    parsing::{
        blocks::{
            Block, BlockType,
            kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
            segment,
        },
        inline::{InlineSpan, parse_inline},
    },
};

use super::{attributes::Attributes, node::DocumentNode};

/// Tag of the top-level container holding every block.
pub const ROOT_TAG: &str = "div";

/// Converts one inline span into its leaf node.
pub fn span_to_node(span: InlineSpan) -> DocumentNode {
    match span {
        InlineSpan::Text(content) => DocumentNode::text(content),
        InlineSpan::Bold(content) => DocumentNode::leaf("b", content),
        InlineSpan::Italic(content) => DocumentNode::leaf("i", content),
        InlineSpan::Code(content) => DocumentNode::leaf("code", content),
        InlineSpan::Link { content, target } => {
            let attrs = Attributes::from([("href", target)]);
            DocumentNode::leaf("a", content).with_attrs(attrs)
        }
        InlineSpan::Image { content, target } => {
            let attrs = Attributes::from([("src", target), ("alt", content)]);
            DocumentNode::leaf("img", "").with_attrs(attrs)
        }
    }
}

fn inline_children(text: &str) -> Vec<DocumentNode> {
    parse_inline(text).into_iter().map(span_to_node).collect()
}

fn list_item(text: &str) -> DocumentNode {
    DocumentNode::container("li", inline_children(text))
}

fn code_block(text: &str, options: &ParseOptions) -> DocumentNode {
    let fenced = CodeFence::split(text, options.code_language_class);
    let mut code = DocumentNode::leaf("code", fenced.body);
    if let Some(info) = fenced.info {
        let class = format!("language-{info}");
        code = code.with_attrs(Attributes::from([("class", class)]));
    }
    DocumentNode::container(BlockType::Code.tag(), vec![code])
}

/// Builds the subtree for one block.
pub fn build_block(block: &Block<'_>, options: &ParseOptions) -> DocumentNode {
    let text = block.as_str();
    let block_type = block.block_type();
    log::trace!("block {:?} classified as {block_type:?}", block.span());

    let children = match block_type {
        BlockType::Code => return code_block(text, options),
        BlockType::Heading(level) => inline_children(Heading::strip(text, level)),
        BlockType::Quote => inline_children(&BlockQuote::content(text, options.quote_join)),
        BlockType::UnorderedList => UnorderedList::items(text).map(list_item).collect(),
        BlockType::OrderedList => OrderedList::items(text).map(list_item).collect(),
        BlockType::Paragraph => inline_children(text),
    };
    DocumentNode::container(block_type.tag(), children)
}

/// Builds the unvalidated tree: one [`ROOT_TAG`] container with a child per block.
pub fn build_document(source: &str, options: &ParseOptions) -> DocumentNode {
    let children: Vec<_> = segment(source)
        .map(|block| build_block(&block, options))
        .collect();
    log::debug!("built document tree with {} blocks", children.len());
    DocumentNode::container(ROOT_TAG, children)
}
