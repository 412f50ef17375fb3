//! Parser combinators for the XML grammar
//!
//! ```text
//! document := (element | any-token)* EOF
//! element  := '<' (not '/') Name? tag-junk* ( '/>' | '>' content end-tag? )?
//! end-tag  := '<' '/' Name? tag-junk* '>'?
//! content  := (element | chardata | reference | CDATA | PI | COMMENT | declaration | invalid)*
//! ```
//!
//! Every rule past the opening `<` is optional, so an element that has started is always
//! produced. Attributes are matched as tag junk and discarded. End tag names are not checked
//! against start tag names here; that is a diagnostics concern.

use chumsky::prelude::*;
use std::sync::Arc;

use super::tree::{ContentSyntax, ElementForm, ElementSyntax, SyntaxNode};
use crate::xml::lexing::{SyntaxToken, Token};

/// Type alias for parser error
pub(crate) type ParserError = Simple<SyntaxToken>;

/// Helper: match a single token of the given kind
fn kind(expected: Token) -> impl Parser<SyntaxToken, SyntaxToken, Error = ParserError> + Clone {
    filter(move |token: &SyntaxToken| token.kind == expected)
}

/// Attribute names, `=`, values and garbage between a tag name and its terminator
fn tag_junk() -> impl Parser<SyntaxToken, Vec<SyntaxToken>, Error = ParserError> + Clone {
    filter(|token: &SyntaxToken| token.kind.is_tag_junk()).repeated()
}

struct EndTag {
    slash: SyntaxToken,
    name: Option<SyntaxToken>,
    junk: Vec<SyntaxToken>,
    close: Option<SyntaxToken>,
}

impl EndTag {
    fn stop_token(&self) -> &SyntaxToken {
        self.close
            .as_ref()
            .or(self.junk.last())
            .or(self.name.as_ref())
            .unwrap_or(&self.slash)
    }
}

fn end_tag() -> impl Parser<SyntaxToken, EndTag, Error = ParserError> + Clone {
    kind(Token::Open)
        .ignore_then(kind(Token::Slash))
        .then(kind(Token::Name).or_not())
        .then(tag_junk())
        .then(kind(Token::Close).or_not())
        .map(|(((slash, name), junk), close)| EndTag {
            slash,
            name,
            junk,
            close,
        })
}

enum Body {
    SelfClosing(SyntaxToken),
    Open {
        close: SyntaxToken,
        content: ContentSyntax,
        end: Option<EndTag>,
    },
}

fn assemble(
    open: SyntaxToken,
    start_name: Option<SyntaxToken>,
    junk: Vec<SyntaxToken>,
    body: Option<Body>,
) -> ElementSyntax {
    let tag_stop = junk
        .last()
        .or(start_name.as_ref())
        .unwrap_or(&open)
        .clone();

    let (content, end_name, stop, form) = match body {
        None => (None, None, tag_stop, ElementForm::Unterminated),
        Some(Body::SelfClosing(token)) => (None, None, token, ElementForm::SelfClosing),
        Some(Body::Open {
            close: _,
            content,
            end: Some(end),
        }) => {
            let stop = end.stop_token().clone();
            (Some(content), end.name, stop, ElementForm::Closed)
        }
        Some(Body::Open {
            close,
            content,
            end: None,
        }) => {
            let stop = content.stop_token().cloned().unwrap_or(close);
            (Some(content), None, stop, ElementForm::Unclosed)
        }
    };

    ElementSyntax {
        open,
        start_name,
        end_name,
        content,
        stop,
        form,
    }
}

/// Build the recursive element parser
///
/// `source` is needed to slice the literal text of each content block.
pub(crate) fn element(
    source: Arc<str>,
) -> impl Parser<SyntaxToken, ElementSyntax, Error = ParserError> + Clone {
    recursive(move |element| {
        let content = choice((
            element.map(SyntaxNode::Element),
            filter(|token: &SyntaxToken| token.kind.is_content()).map(SyntaxNode::from_token),
        ))
        .repeated()
        .map(move |children| ContentSyntax::new(children, &source));

        let body = choice((
            kind(Token::SlashClose).map(Body::SelfClosing),
            kind(Token::Close)
                .then(content)
                .then(end_tag().or_not())
                .map(|((close, content), end)| Body::Open {
                    close,
                    content,
                    end,
                }),
        ))
        .or_not();

        kind(Token::Open)
            .then_ignore(kind(Token::Slash).not().rewind())
            .then(kind(Token::Name).or_not())
            .then(tag_junk())
            .then(body)
            .map(|(((open, start_name), junk), body)| assemble(open, start_name, junk, body))
    })
}

/// Parse a document: elements where they start, every other token as a leaf node
pub(crate) fn document(
    source: Arc<str>,
) -> impl Parser<SyntaxToken, Vec<SyntaxNode>, Error = ParserError> {
    choice((
        element(source).map(SyntaxNode::Element),
        any::<SyntaxToken, ParserError>().map(SyntaxNode::from_token),
    ))
    .repeated()
    .then_ignore(end())
}
