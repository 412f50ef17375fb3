//! Fluent assertions for documents and nodes
//!
//! Checking a tree node by node with `assert_eq!` gets long quickly. These helpers let a test
//! describe the expected shape in one chained expression, and failures name the path to the
//! node that did not match:
//!
//! ```rust-example
//! use xmlnodes::xml::testing::assert_document;
//!
//! assert_document(&doc)
//!     .root_tag("beans")
//!     .root(|root| {
//!         root.child_count(2)
//!             .child(1, |bean| {
//!                 bean.tag("bean").text_trimmed("Content").starts_at(10, 4);
//!             });
//!     });
//! ```

use crate::xml::ast::{Position, Range, XmlDocument, XmlNode};

// ============================================================================
// Entry Points
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_document(doc: &XmlDocument) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

/// Create an assertion builder for a single node
pub fn assert_node(node: &XmlNode) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: node.tag_name.clone(),
    }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a XmlDocument,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the root element's tag name
    pub fn root_tag(self, expected: &str) -> Self {
        assert_eq!(
            self.doc.root_tag.tag_name, expected,
            "Expected root tag <{}>, found <{}>",
            expected, self.doc.root_tag.tag_name
        );
        self
    }

    /// Run assertions on the root element
    pub fn root<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(NodeAssertion {
            node: &self.doc.root_tag,
            context: "root".to_string(),
        });
        self
    }

    /// Assert the tags of the deepest-first chain of nodes at a position
    pub fn nodes_at(self, line: usize, character: usize, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .doc
            .nodes_at(Position::new(line, character))
            .iter()
            .map(|node| node.tag_name.as_str())
            .collect();
        assert_eq!(
            actual, expected,
            "Expected nodes at {}:{} to be {:?}, found {:?}",
            line, character, expected, actual
        );
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a XmlNode,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn tag(self, expected: &str) -> Self {
        assert_eq!(
            self.node.tag_name, expected,
            "{}: Expected tag <{}>, found <{}>",
            self.context, expected, self.node.tag_name
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_children(self.node)
        );
        self
    }

    /// Assert the tag names of all children, in order
    pub fn child_tags(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .node
            .children
            .iter()
            .map(|child| child.tag_name.as_str())
            .collect();
        assert_eq!(
            actual, expected,
            "{}: Expected children {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    /// Run assertions on a child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.node.children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            self.node.children.len()
        );
        let child = &self.node.children[index];
        assertion(NodeAssertion {
            node: child,
            context: format!("{}/{}[{}]", self.context, child.tag_name, index),
        });
        self
    }

    /// Assert the exact text content
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.node.text_content, expected,
            "{}: Expected text content {:?}, found {:?}",
            self.context, expected, self.node.text_content
        );
        self
    }

    /// Assert the text content with surrounding whitespace removed
    pub fn text_trimmed(self, expected: &str) -> Self {
        let actual = self.node.text_content.trim();
        assert_eq!(
            actual, expected,
            "{}: Expected trimmed text content {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn starts_at(self, line: usize, character: usize) -> Self {
        let expected = Position::new(line, character);
        assert_eq!(
            self.node.range.start, expected,
            "{}: Expected range to start at {}, found {}",
            self.context, expected, self.node.range.start
        );
        self
    }

    pub fn ends_at(self, line: usize, character: usize) -> Self {
        let expected = Position::new(line, character);
        assert_eq!(
            self.node.range.end, expected,
            "{}: Expected range to end at {}, found {}",
            self.context, expected, self.node.range.end
        );
        self
    }

    pub fn range(self, expected: Range) -> Self {
        assert_eq!(
            self.node.range, expected,
            "{}: Expected range {}, found {}",
            self.context, expected, self.node.range
        );
        self
    }
}

fn summarize_children(node: &XmlNode) -> String {
    node.children
        .iter()
        .map(|child| format!("<{}>", child.tag_name))
        .collect::<Vec<_>>()
        .join(", ")
}
