//! Syntax tree to XmlNode conversion
//!
//! Elements that cannot be converted (no tag name) are dropped wherever they are:
//!
//!     - The first top-level element that converts becomes the root. If none does, the
//!       document is empty.
//!     - Any further top-level elements (only possible in malformed input) are ignored.
//!     - A nested element that cannot be converted is dropped, and its siblings and
//!       ancestors are built as usual.

use super::location::extract_range;
use crate::xml::ast::{ParseError, ParseResult, XmlDocument, XmlNode};
use crate::xml::parsing::{ElementSyntax, SyntaxNode, SyntaxTree};

/// Build a document from the first convertible top-level element of a syntax tree
pub fn build_document(tree: &SyntaxTree) -> ParseResult<XmlDocument> {
    let mut elements = tree.elements();
    let root = elements
        .by_ref()
        .find_map(|element| match convert_element(element) {
            Ok(node) => Some(node),
            Err(error) => {
                tracing::debug!(%error, "skipping top-level element");
                None
            }
        })
        .ok_or(ParseError::EmptyDocument)?;

    let ignored = elements.count();
    if ignored > 0 {
        tracing::debug!(ignored, "ignoring extra top-level elements");
    }

    Ok(XmlDocument::new(root))
}

/// Convert one element and, recursively, the elements nested in its content
pub fn convert_element(element: &ElementSyntax) -> ParseResult<XmlNode> {
    let range = extract_range(element);
    let name = element
        .names()
        .first()
        .map(|token| token.text().to_string())
        .ok_or(ParseError::MissingName { range })?;

    let Some(content) = element.content() else {
        return Ok(XmlNode::new(name, range));
    };

    let children = convert_children(content.children());
    Ok(XmlNode::new(name, range)
        .with_text_content(content.text())
        .with_children(children))
}

fn convert_children(nodes: &[SyntaxNode]) -> Vec<XmlNode> {
    nodes
        .iter()
        .filter_map(SyntaxNode::as_element)
        .filter_map(|child| match convert_element(child) {
            Ok(node) => Some(node),
            Err(error) => {
                tracing::debug!(%error, "dropping nested element");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::ast::{Position, Range};
    use crate::xml::parsing::parse_syntax;

    fn build(source: &str) -> ParseResult<XmlDocument> {
        build_document(&parse_syntax(source).expect("syntax tree"))
    }

    #[test]
    fn test_root_with_children() {
        let doc = build("<a><b/><c>x</c></a>").expect("document");
        let root = doc.root();
        assert_eq!(root.tag_name, "a");
        assert_eq!(root.text_content, "<b/><c>x</c>");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[1].text_content, "x");
    }

    #[test]
    fn test_self_closing_root_has_no_content() {
        let doc = build("<a/>").expect("document");
        assert_eq!(doc.root().text_content, "");
        assert!(doc.root().children.is_empty());
        assert_eq!(
            doc.root().range,
            Range::new(Position::new(0, 0), Position::new(0, 2))
        );
    }

    #[test]
    fn test_no_element_is_empty_document() {
        assert_eq!(build(""), Err(ParseError::EmptyDocument));
        assert_eq!(build("<?xml version=\"1.0\"?>\n<!-- c -->"), Err(ParseError::EmptyDocument));
        assert_eq!(build("just text"), Err(ParseError::EmptyDocument));
    }

    #[test]
    fn test_only_first_root_is_kept() {
        let doc = build("<a/><b/>").expect("document");
        assert_eq!(doc.root().tag_name, "a");
    }

    #[test]
    fn test_nameless_child_is_dropped() {
        let doc = build("<a><b/><>x</ ><c/></a>").expect("document");
        let tags: Vec<&str> = doc
            .root()
            .children
            .iter()
            .map(|n| n.tag_name.as_str())
            .collect();
        assert_eq!(tags, vec!["b", "c"]);
        assert_eq!(doc.root().text_content, "<b/><>x</ ><c/>");
    }

    #[test]
    fn test_nameless_root_is_skipped() {
        let doc = build("<>x</ ><a/><b/>").expect("document");
        assert_eq!(doc.root().tag_name, "a");
        assert_eq!(
            doc.root().range,
            Range::new(Position::new(0, 7), Position::new(0, 9))
        );
    }

    #[test]
    fn test_only_nameless_roots_is_empty_document() {
        assert_eq!(build("<>x</ >"), Err(ParseError::EmptyDocument));
        assert_eq!(build("<>x</ >\n< />"), Err(ParseError::EmptyDocument));
    }

    #[test]
    fn test_nameless_element_reports_its_range() {
        let tree = parse_syntax("<>x</ >").expect("syntax tree");
        let element = tree.elements().next().expect("element");
        assert_eq!(
            convert_element(element),
            Err(ParseError::MissingName {
                range: Range::new(Position::new(0, 0), Position::new(0, 6))
            })
        );
    }

    #[test]
    fn test_end_tag_name_is_not_authoritative() {
        let doc = build("<a>x</b>").expect("document");
        assert_eq!(doc.root().tag_name, "a");
    }
}
