//! Syntax diagnostics
//!
//! The grammar accepts any token sequence, so malformed input never aborts parsing. What was
//! wrong with it is recorded here instead: a walk over the finished tree reports missing
//! names, unterminated or unclosed tags, mismatched end tags and stray tokens.

use chumsky::error::Simple;
use std::fmt;
use std::ops::Range;

use super::tree::{ElementForm, ElementSyntax, SyntaxNode, TokenSpan};
use crate::xml::lexing::{SyntaxToken, Token};

/// A recovered syntax problem, located by the token it was found at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub span: Range<usize>,
    /// 1-based
    pub line: usize,
    /// 0-based, in characters
    pub column: usize,
}

impl SyntaxError {
    pub fn at(token: &SyntaxToken, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: token.span.clone(),
            line: token.line,
            column: token.column,
        }
    }

    /// Convert a chumsky error; the position of the end of input is `eoi`
    pub(crate) fn from_parser_error(error: &Simple<SyntaxToken>, eoi: (usize, usize)) -> Self {
        match error.found() {
            Some(token) => Self::at(token, format!("unexpected '{}'", token.text())),
            None => Self {
                message: "unexpected end of input".to_string(),
                span: error.span(),
                line: eoi.0,
                column: eoi.1,
            },
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Deepest element nesting the parser accepts
pub const MAX_NESTING_DEPTH: usize = 128;

/// Reject token streams whose elements nest deeper than [`MAX_NESTING_DEPTH`]
///
/// Counts levels the way the grammar opens them: a start tag ended by `>` opens one, any end
/// tag closes the innermost. The count never falls below the grammar's real depth.
pub(crate) fn check_nesting(tokens: &[SyntaxToken]) -> Result<(), SyntaxError> {
    let mut depth = 0usize;
    let mut start_tag: Option<&SyntaxToken> = None;

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            Token::Open => {
                let is_end_tag = tokens
                    .get(index + 1)
                    .is_some_and(|next| next.kind == Token::Slash);
                if is_end_tag {
                    depth = depth.saturating_sub(1);
                    start_tag = None;
                } else {
                    start_tag = Some(token);
                }
            }
            Token::Close => {
                if let Some(open) = start_tag.take() {
                    depth += 1;
                    if depth > MAX_NESTING_DEPTH {
                        return Err(SyntaxError::at(
                            open,
                            format!("elements nested deeper than {MAX_NESTING_DEPTH} levels"),
                        ));
                    }
                }
            }
            kind if kind.is_tag_junk() => {}
            _ => start_tag = None,
        }
    }

    Ok(())
}

/// Collect diagnostics for a document's top-level nodes
pub(crate) fn check_document(children: &[SyntaxNode]) -> Vec<SyntaxError> {
    let mut errors = Vec::new();
    let mut seen_root = false;

    for node in children {
        match node {
            SyntaxNode::Element(element) => {
                if seen_root {
                    errors.push(SyntaxError::at(
                        element.start_token(),
                        format!("extra top-level element {}", describe(element)),
                    ));
                }
                seen_root = true;
                check_element(element, &mut errors);
            }
            SyntaxNode::CharData(token) if token.kind == Token::Text => {
                errors.push(SyntaxError::at(token, "text outside of the root element"));
            }
            SyntaxNode::Reference(token) => {
                errors.push(SyntaxError::at(
                    token,
                    "reference outside of the root element",
                ));
            }
            SyntaxNode::Unexpected(token) => errors.push(unexpected(token)),
            _ => {}
        }
    }

    errors
}

fn check_element(element: &ElementSyntax, errors: &mut Vec<SyntaxError>) {
    if element.start_name().is_none() {
        errors.push(SyntaxError::at(
            element.start_token(),
            "element is missing a tag name",
        ));
    }

    match element.form() {
        ElementForm::SelfClosing => {}
        ElementForm::Unterminated => errors.push(SyntaxError::at(
            element.stop_token(),
            format!("start tag of {} is not terminated", describe(element)),
        )),
        ElementForm::Unclosed => errors.push(SyntaxError::at(
            element.start_token(),
            format!("{} is never closed", describe(element)),
        )),
        ElementForm::Closed => {
            match (element.start_name(), element.end_name()) {
                (Some(start), Some(end)) if start.text() != end.text() => {
                    errors.push(SyntaxError::at(
                        end,
                        format!(
                            "end tag </{}> does not match start tag <{}>",
                            end.text(),
                            start.text()
                        ),
                    ))
                }
                (_, None) => errors.push(SyntaxError::at(
                    element.stop_token(),
                    "end tag is missing a tag name",
                )),
                _ => {}
            }
            if element.stop_token().kind != Token::Close {
                errors.push(SyntaxError::at(
                    element.stop_token(),
                    "end tag is not terminated",
                ));
            }
        }
    }

    for node in element.content().map(|c| c.children()).unwrap_or_default() {
        match node {
            SyntaxNode::Element(child) => check_element(child, errors),
            SyntaxNode::Unexpected(token) => errors.push(unexpected(token)),
            _ => {}
        }
    }
}

fn unexpected(token: &SyntaxToken) -> SyntaxError {
    SyntaxError::at(token, format!("unexpected '{}'", token.text()))
}

fn describe(element: &ElementSyntax) -> String {
    match element.start_name() {
        Some(name) => format!("<{}>", name.text()),
        None => "unnamed element".to_string(),
    }
}
