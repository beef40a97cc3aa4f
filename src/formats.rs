//! Format trait and implementations for portfolio source documents.
//!
//! A format tells the document loader which tree-sitter grammar to parse with and which query
//! picks out the headings that divide the page into sections.

pub mod markdown;

/// Grammar and heading query for one kind of source document.
pub trait Format {
    /// Tree-sitter grammar used to parse the document.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing each heading node as `@heading`.
    fn section_query(&self) -> &str;
    /// Heading depth of a captured node, or `None` if the node is not a heading.
    fn heading_level(&self, node: &tree_sitter::Node<'_>) -> Option<usize>;
    /// Child node holding the heading text, if the heading has any.
    fn heading_text<'t>(&self, node: &tree_sitter::Node<'t>) -> Option<tree_sitter::Node<'t>>;
}
