pub mod blocks;
pub mod inline;
pub mod span;

#[cfg(test)]
mod tests;

use crate::{
    error::StructuralError,
    options::ParseOptions,
    tree::{DocumentNode, build_document, render_with},
};

/// Parses a markdown document into a validated tree using default options.
pub fn parse_document(markdown: &str) -> Result<DocumentNode, StructuralError> {
    parse_document_with(markdown, &ParseOptions::default())
}

/// Parses a markdown document into a validated tree.
///
/// Fails if the tree holds a node that could not be rendered, e.g. a list
/// item whose text tokenizes to nothing, or a document with no blocks.
pub fn parse_document_with(
    markdown: &str,
    options: &ParseOptions,
) -> Result<DocumentNode, StructuralError> {
    let doc = build_document(markdown, options);
    if let Err(err) = doc.validate() {
        log::debug!("document tree rejected: {err}");
        return Err(err);
    }
    Ok(doc)
}

/// Convenience: parse then render in one call.
pub fn markdown_to_html(markdown: &str, options: &ParseOptions) -> Result<String, StructuralError> {
    let doc = parse_document_with(markdown, options)?;
    render_with(&doc, options)
}
