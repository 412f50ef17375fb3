//! Treeviz formatter for XML documents
//!
//! One line per element, nesting drawn with tree connectors, two columns per level:
//!
//! ```text
//! ⧉ beans
//! ├─ ◇ bean
//! └─ ◇ bean: Content
//! ```
//!
//! Labels are the tag name, followed by the trimmed first line of the text content for
//! elements with no nested elements. Labels longer than the configured width are truncated.
//! With line numbers on, each line is prefixed by the 1-based line the element starts on.

use super::registry::{FormatError, Formatter};
use crate::xml::ast::{XmlDocument, XmlNode};

const ROOT_ICON: &str = "⧉";
const ELEMENT_ICON: &str = "◇";

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn label(node: &XmlNode) -> String {
    let text = node.text_content.trim().lines().next().unwrap_or_default();
    if node.children.is_empty() && !text.is_empty() {
        format!("{}: {}", node.tag_name, text)
    } else {
        node.tag_name.clone()
    }
}

struct Options {
    show_line_numbers: bool,
    label_width: usize,
}

impl Options {
    fn line_number(&self, node: &XmlNode) -> String {
        if self.show_line_numbers {
            format!("{:02} ", node.range.start.line + 1)
        } else {
            String::new()
        }
    }
}

fn format_node(
    node: &XmlNode,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    options: &Options,
) -> String {
    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };

    let mut output = format!(
        "{}{}{} {} {}\n",
        options.line_number(node),
        prefix,
        connector,
        ELEMENT_ICON,
        truncate(&label(node), options.label_width)
    );

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        output.push_str(&format_node(child, &child_prefix, i, child_count, options));
    }

    output
}

fn format_document(doc: &XmlDocument, options: &Options) -> String {
    let root = doc.root();
    let mut output = format!(
        "{}{} {}\n",
        options.line_number(root),
        ROOT_ICON,
        truncate(&label(root), options.label_width)
    );

    let child_count = root.children.len();
    for (i, child) in root.children.iter().enumerate() {
        output.push_str(&format_node(child, "", i, child_count, options));
    }

    output
}

/// Render a document as a tree, one element per line
pub fn to_treeviz_str(doc: &XmlDocument, show_line_numbers: bool, label_width: usize) -> String {
    format_document(
        doc,
        &Options {
            show_line_numbers,
            label_width,
        },
    )
}

/// Formatter implementation for treeviz format
#[derive(Debug, Clone)]
pub struct TreevizFormatter {
    pub show_line_numbers: bool,
    pub label_width: usize,
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self {
            show_line_numbers: false,
            label_width: 30,
        }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &XmlDocument) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc, self.show_line_numbers, self.label_width))
    }

    fn description(&self) -> &str {
        "Visual tree representation with one element per line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::building::parse_xml_document;

    #[test]
    fn test_nested_connectors() {
        let doc = parse_xml_document("<a><b><c/></b><d>text</d></a>").expect("document");
        let output = to_treeviz_str(&doc, false, 30);
        assert_eq!(output, "⧉ a\n├─ ◇ b\n│ └─ ◇ c\n└─ ◇ d: text\n");
    }

    #[test]
    fn test_line_numbers() {
        let doc = parse_xml_document("<a>\n  <b/>\n</a>").expect("document");
        let output = to_treeviz_str(&doc, true, 30);
        assert_eq!(output, "01 ⧉ a\n02 └─ ◇ b\n");
    }

    #[test]
    fn test_labels_are_truncated() {
        let doc = parse_xml_document("<a>a rather long piece of text</a>").expect("document");
        let output = to_treeviz_str(&doc, false, 10);
        assert_eq!(output, "⧉ a: a rathe...\n");
    }
}
