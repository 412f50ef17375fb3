//! Document building
//!
//!     Turns the syntax tree into the [`XmlDocument`] that tooling works with. Two things
//!     happen here:
//!
//!         1. Element syntax nodes are converted into [`XmlNode`](crate::xml::ast::XmlNode)s,
//!            keeping tag names, content text and nested elements and discarding the rest.
//!         2. Token positions (1-based lines) become zero-based ranges.
//!
//!     See [location] for the range conversion and [builder] for the tree walk.

pub mod builder;
pub mod location;

pub use builder::{build_document, convert_element};
pub use location::extract_range;

use crate::xml::ast::{ParseError, ParseResult, XmlDocument};
use crate::xml::parsing::parse_syntax;

/// Parse XML text into a document
///
/// Syntax errors do not fail the call: the document is built from whatever tree the
/// parser recovered. The call fails when that tree has no top-level element with a tag
/// name, or with [`ParseError::Syntax`] when elements nest deeper than
/// [`MAX_NESTING_DEPTH`](crate::xml::parsing::MAX_NESTING_DEPTH).
pub fn parse_xml_document(text: &str) -> ParseResult<XmlDocument> {
    let tree = parse_syntax(text).map_err(|errors| ParseError::Syntax {
        message: errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    })?;
    build_document(&tree)
}
