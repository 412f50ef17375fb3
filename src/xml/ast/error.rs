//! Error types for document construction

use super::range::Range;
use thiserror::Error;

/// Why a document could not be produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No top-level element with a tag name
    #[error("empty document: no root element found")]
    EmptyDocument,

    /// An element with no tag name, from [`convert_element`](crate::xml::building::convert_element)
    #[error("element at {range} has no tag name")]
    MissingName { range: Range },

    /// The input nests too deeply, or the parser produced no tree at all
    #[error("syntax error: {message}")]
    Syntax { message: String },
}

/// Type alias for document construction results
pub type ParseResult<T> = Result<T, ParseError>;
