//! AST definitions and utilities for XML documents
//!
//! ## Modules
//!
//! - `range` - Position and Range types (zero-based, editor coordinates)
//! - `node` - XmlNode and XmlDocument
//! - `lookup` - Position-based node lookup
//! - `error` - Error types for document construction

pub mod error;
pub mod lookup;
pub mod node;
pub mod range;

pub use error::{ParseError, ParseResult};
pub use node::{Descendants, XmlDocument, XmlNode};
pub use range::{Position, Range};
