//! Element tree types
//!
//! An [`XmlNode`] is an element reduced to what editor tooling needs: its tag name, where it
//! is, its literal content text and its child elements. Everything else in the source
//! (attributes, comments, processing instructions, stray text) is visible only through
//! `text_content`. Parents own their children outright; there are no back references and
//! nothing is mutated after construction.

use serde::{Deserialize, Serialize};

use super::range::Range;

/// A single element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlNode {
    /// The element's first name token
    pub tag_name: String,
    pub range: Range,
    /// Nested elements in document order
    pub children: Vec<XmlNode>,
    /// Literal text between the start and end tag, nested markup included
    pub text_content: String,
}

impl XmlNode {
    pub fn new(tag_name: impl Into<String>, range: Range) -> Self {
        Self {
            tag_name: tag_name.into(),
            range,
            children: Vec::new(),
            text_content: String::new(),
        }
    }

    pub fn with_text_content(mut self, text_content: impl Into<String>) -> Self {
        self.text_content = text_content.into();
        self
    }

    pub fn with_children(mut self, children: Vec<XmlNode>) -> Self {
        self.children = children;
        self
    }

    /// First direct child with the given tag name
    pub fn child(&self, tag_name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.tag_name == tag_name)
    }

    /// All nested elements in pre-order, not including `self`
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Pre-order iterator over the nodes below an [`XmlNode`]
pub struct Descendants<'a> {
    stack: Vec<&'a XmlNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A parsed document: exactly one root element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlDocument {
    pub root_tag: XmlNode,
}

impl XmlDocument {
    pub fn new(root_tag: XmlNode) -> Self {
        Self { root_tag }
    }

    pub fn root(&self) -> &XmlNode {
        &self.root_tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::ast::Position;

    fn node(tag: &str, children: Vec<XmlNode>) -> XmlNode {
        XmlNode::new(tag, Range::default()).with_children(children)
    }

    #[test]
    fn test_child_lookup_by_tag() {
        let root = node("beans", vec![node("bean", vec![]), node("alias", vec![])]);
        assert_eq!(root.child("alias").map(|n| n.tag_name.as_str()), Some("alias"));
        assert!(root.child("missing").is_none());
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let root = node(
            "a",
            vec![
                node("b", vec![node("c", vec![]), node("d", vec![])]),
                node("e", vec![]),
            ],
        );
        let tags: Vec<&str> = root.descendants().map(|n| n.tag_name.as_str()).collect();
        assert_eq!(tags, vec!["b", "c", "d", "e"]);
        assert_eq!(node("leaf", vec![]).descendants().count(), 0);
    }

    #[test]
    fn test_json_shape() {
        let range = Range::new(Position::new(0, 0), Position::new(0, 6));
        let document = XmlDocument::new(XmlNode::new("a", range).with_text_content("x"));
        let value = serde_json::to_value(&document).expect("serialize");

        assert_eq!(value["root_tag"]["tag_name"], "a");
        assert_eq!(value["root_tag"]["range"]["end"]["character"], 6);
        assert_eq!(value["root_tag"]["text_content"], "x");
        assert!(value["root_tag"]["children"].as_array().expect("array").is_empty());
    }
}
