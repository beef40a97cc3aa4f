//! Markdown format implementation using tree-sitter-md.
//!
//! Only ATX-style headings (`#` syntax) divide the page; setext underlines are left as body text.

use crate::formats::Format;

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn section_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }

    fn heading_level(&self, node: &tree_sitter::Node<'_>) -> Option<usize> {
        let mut walker = node.walk();
        let level = node.children(&mut walker).find_map(|child| {
            child
                .kind()
                .strip_prefix("atx_h")
                .and_then(|rest| rest.strip_suffix("_marker"))
                .and_then(|digit| digit.parse::<usize>().ok())
        });
        level
    }

    fn heading_text<'t>(&self, node: &tree_sitter::Node<'t>) -> Option<tree_sitter::Node<'t>> {
        let mut walker = node.walk();
        let inline = node
            .children(&mut walker)
            .find(|child| child.kind() == "inline");
        inline
    }
}
