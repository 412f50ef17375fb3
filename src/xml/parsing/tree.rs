//! Syntax tree produced by the grammar
//!
//! This is a concrete-ish tree: it keeps every token that matters for structure (tag names,
//! the tokens that open and close an element, every content token) but drops attributes.
//! Node kinds form a closed enum; [`SyntaxNode::as_element`] is the only way to get at
//! element structure.

use super::diagnostics::SyntaxError;
use crate::xml::lexing::{SyntaxToken, Token};

/// Anything carrying a first and last token
///
/// Token positions follow the tokenizer's convention (1-based line, 0-based column).
pub trait TokenSpan {
    fn start_token(&self) -> &SyntaxToken;
    fn stop_token(&self) -> &SyntaxToken;
}

/// A node among the children of the document or of an element's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    Element(ElementSyntax),
    /// Text or whitespace
    CharData(SyntaxToken),
    Reference(SyntaxToken),
    CData(SyntaxToken),
    Comment(SyntaxToken),
    ProcessingInstruction(SyntaxToken),
    /// XML declaration or DOCTYPE
    Declaration(SyntaxToken),
    /// A token with no place in the grammar at this point
    Unexpected(SyntaxToken),
}

impl SyntaxNode {
    /// Wrap a single non-element token in the node kind it belongs to
    pub fn from_token(token: SyntaxToken) -> Self {
        match token.kind {
            Token::Text | Token::SeaWs => SyntaxNode::CharData(token),
            Token::EntityRef | Token::CharRef => SyntaxNode::Reference(token),
            Token::CData => SyntaxNode::CData(token),
            Token::Comment => SyntaxNode::Comment(token),
            Token::ProcessingInstruction => SyntaxNode::ProcessingInstruction(token),
            Token::XmlDecl | Token::Doctype => SyntaxNode::Declaration(token),
            _ => SyntaxNode::Unexpected(token),
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, SyntaxNode::Element(_))
    }

    pub fn as_element(&self) -> Option<&ElementSyntax> {
        match self {
            SyntaxNode::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            SyntaxNode::Element(_) => "Element",
            SyntaxNode::CharData(_) => "CharData",
            SyntaxNode::Reference(_) => "Reference",
            SyntaxNode::CData(_) => "CData",
            SyntaxNode::Comment(_) => "Comment",
            SyntaxNode::ProcessingInstruction(_) => "ProcessingInstruction",
            SyntaxNode::Declaration(_) => "Declaration",
            SyntaxNode::Unexpected(_) => "Unexpected",
        }
    }

    /// The wrapped token for leaf nodes, the element otherwise
    fn leaf(&self) -> Result<&SyntaxToken, &ElementSyntax> {
        match self {
            SyntaxNode::Element(element) => Err(element),
            SyntaxNode::CharData(token)
            | SyntaxNode::Reference(token)
            | SyntaxNode::CData(token)
            | SyntaxNode::Comment(token)
            | SyntaxNode::ProcessingInstruction(token)
            | SyntaxNode::Declaration(token)
            | SyntaxNode::Unexpected(token) => Ok(token),
        }
    }
}

impl TokenSpan for SyntaxNode {
    fn start_token(&self) -> &SyntaxToken {
        match self.leaf() {
            Ok(token) => token,
            Err(element) => element.start_token(),
        }
    }

    fn stop_token(&self) -> &SyntaxToken {
        match self.leaf() {
            Ok(token) => token,
            Err(element) => element.stop_token(),
        }
    }
}

/// How far an element got before its tokens ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementForm {
    /// `<a/>`
    SelfClosing,
    /// `<a>...</a>` (the end tag may still be malformed)
    Closed,
    /// `<a>...` with no end tag
    Unclosed,
    /// `<a` with neither `>` nor `/>`
    Unterminated,
}

/// An element: start tag, optional content, optional end tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSyntax {
    pub(crate) open: SyntaxToken,
    pub(crate) start_name: Option<SyntaxToken>,
    pub(crate) end_name: Option<SyntaxToken>,
    pub(crate) content: Option<ContentSyntax>,
    pub(crate) stop: SyntaxToken,
    pub(crate) form: ElementForm,
}

impl ElementSyntax {
    /// Name tokens in source order: the start tag's, then the end tag's
    pub fn names(&self) -> Vec<&SyntaxToken> {
        self.start_name.iter().chain(self.end_name.iter()).collect()
    }

    pub fn start_name(&self) -> Option<&SyntaxToken> {
        self.start_name.as_ref()
    }

    pub fn end_name(&self) -> Option<&SyntaxToken> {
        self.end_name.as_ref()
    }

    /// Content between the start and end tag; `None` for self-closing or unterminated tags
    pub fn content(&self) -> Option<&ContentSyntax> {
        self.content.as_ref()
    }

    pub fn form(&self) -> ElementForm {
        self.form
    }
}

impl TokenSpan for ElementSyntax {
    fn start_token(&self) -> &SyntaxToken {
        &self.open
    }

    fn stop_token(&self) -> &SyntaxToken {
        &self.stop
    }
}

/// Everything between a start tag and its end tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSyntax {
    pub(crate) children: Vec<SyntaxNode>,
    pub(crate) text: String,
}

impl ContentSyntax {
    /// Build content from its children, slicing the literal text out of `source`
    pub(crate) fn new(children: Vec<SyntaxNode>, source: &str) -> Self {
        let text = match (children.first(), children.last()) {
            (Some(first), Some(last)) => {
                let span = first.start_token().span.start..last.stop_token().span.end;
                source.get(span).unwrap_or_default().to_string()
            }
            _ => String::new(),
        };
        Self { children, text }
    }

    /// Literal source text of the content, nested markup included
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn start_token(&self) -> Option<&SyntaxToken> {
        self.children.first().map(TokenSpan::start_token)
    }

    pub fn stop_token(&self) -> Option<&SyntaxToken> {
        self.children.last().map(TokenSpan::stop_token)
    }
}

/// Result of parsing a whole document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub(crate) children: Vec<SyntaxNode>,
    pub(crate) errors: Vec<SyntaxError>,
}

impl SyntaxTree {
    /// Top-level nodes in document order
    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// Top-level elements in document order
    pub fn elements(&self) -> impl Iterator<Item = &ElementSyntax> {
        self.children.iter().filter_map(SyntaxNode::as_element)
    }

    /// Problems the grammar recovered from; never printed, only collected
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
