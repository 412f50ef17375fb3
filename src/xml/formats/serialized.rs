//! JSON and YAML renderings of a document, via serde

use super::registry::{FormatError, Formatter};
use crate::xml::ast::XmlDocument;

/// Serialize a document as JSON
pub fn to_json(doc: &XmlDocument, pretty: bool) -> Result<String, FormatError> {
    let result = if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    };
    result.map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// Serialize a document as YAML
pub fn to_yaml(doc: &XmlDocument) -> Result<String, FormatError> {
    serde_yaml::to_string(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
}

#[derive(Debug, Clone)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &XmlDocument) -> Result<String, FormatError> {
        to_json(doc, self.pretty)
    }

    fn description(&self) -> &str {
        "Document tree as JSON"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &XmlDocument) -> Result<String, FormatError> {
        to_yaml(doc)
    }

    fn description(&self) -> &str {
        "Document tree as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::building::parse_xml_document;

    #[test]
    fn test_compact_json() {
        let doc = parse_xml_document("<a>x</a>").expect("document");
        let json = to_json(&doc, false).expect("json");
        assert_eq!(
            json,
            r#"{"root_tag":{"tag_name":"a","range":{"start":{"line":0,"character":0},"end":{"line":0,"character":7}},"children":[],"text_content":"x"}}"#
        );
    }

    #[test]
    fn test_json_reads_back() {
        let doc = parse_xml_document("<a>\n  <b>y</b>\n</a>").expect("document");
        let json = to_json(&doc, true).expect("json");
        let back: XmlDocument = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, doc);
    }

    #[test]
    fn test_yaml_mentions_tags() {
        let doc = parse_xml_document("<a><b/></a>").expect("document");
        let yaml = to_yaml(&doc).expect("yaml");
        assert!(yaml.contains("tag_name: a"));
        assert!(yaml.contains("tag_name: b"));
    }
}
