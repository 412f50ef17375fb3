//! # xmlnodes
//!
//! Turns raw XML text into a small, position-annotated tree of tagged elements.
//!
//! The tree is meant for editor tooling: every [`XmlNode`](xml::ast::XmlNode) carries the
//! zero-based line/character range of the element it was built from, so a cursor position can
//! be mapped back to the element under it. Attributes, comments, processing instructions and
//! whitespace are not represented as nodes.
//!
//! Layout
//!
//! src/xml
//!   ├── lexing     logos tokenizer (content and tag modes)
//!   ├── parsing    chumsky grammar producing the lenient syntax tree
//!   ├── building   syntax tree to XmlNode conversion
//!   ├── ast        Position, Range, XmlNode, XmlDocument, lookup
//!   ├── formats    treeviz / json / yaml output
//!   └── config     layered configuration for the binary
//!
//! The entry point is [`parse_xml_document`].

pub mod xml;

pub use xml::ast::{ParseError, Position, Range, XmlDocument, XmlNode};
pub use xml::building::parse_xml_document;
