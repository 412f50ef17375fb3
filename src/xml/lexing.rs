//! Lexer module for XML text
//!
//! Tokenization is handled by logos. Since XML is context sensitive (whitespace and `=` mean
//! different things inside and outside a tag) the lexer alternates between two logos enums:
//! content mode until a `<`, tag mode until a `>` or `/>`.
//!
//! The lexer never fails. Input that neither mode recognizes comes out as [`Token::Invalid`],
//! so every byte of the source (except whitespace inside tags) is covered by some token.

pub mod location;
pub mod tokens;

pub use location::SourceLocation;
pub use tokens::{ContentToken, Markup, SyntaxToken, TagToken, Token};

use logos::{Lexer, Logos};
use std::ops::Range;

enum Mode<'s> {
    Content(Lexer<'s, ContentToken>),
    Tag(Lexer<'s, TagToken>),
}

/// Tokenize a string, collecting token kinds with their byte spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut tokens = Vec::new();
    let mut mode = Mode::Content(ContentToken::lexer(source));

    loop {
        mode = match mode {
            Mode::Content(mut lexer) => {
                let Some(result) = lexer.next() else { break };
                let token = result.map(Token::from).unwrap_or(Token::Invalid);
                tokens.push((token, lexer.span()));
                if token == Token::Open {
                    Mode::Tag(lexer.morph())
                } else {
                    Mode::Content(lexer)
                }
            }
            Mode::Tag(mut lexer) => {
                let Some(result) = lexer.next() else { break };
                let token = result.map(Token::from).unwrap_or(Token::Invalid);
                tokens.push((token, lexer.span()));
                if token.ends_tag() {
                    Mode::Content(lexer.morph())
                } else {
                    Mode::Tag(lexer)
                }
            }
        };
    }

    tokens
}

/// Main lexer function: tokens with text and 1-based line / 0-based column positions
pub fn lex(source: &str) -> Vec<SyntaxToken> {
    let location = SourceLocation::new(source);
    let tokens: Vec<SyntaxToken> = tokenize_with_spans(source)
        .into_iter()
        .map(|(kind, span)| {
            let (line, column) = location.line_column(span.start);
            let text = String::from_utf8_lossy(&source.as_bytes()[span.clone()]);
            SyntaxToken::new(kind, text, span, line, column)
        })
        .collect();

    tracing::trace!(tokens = tokens.len(), "lexed source");
    tokens
}
