//! Parser module for XML text
//!
//! Builds a [`SyntaxTree`] from the token stream produced by [`crate::xml::lexing`]. The grammar
//! lives in [`grammar`] and is written with chumsky; it recovers from malformed input by
//! construction, so callers always get a tree. What was wrong with the input is collected in
//! [`SyntaxTree::errors`] and logged at debug level, never printed.

pub mod diagnostics;
pub mod grammar;
pub mod tree;

pub use diagnostics::{SyntaxError, MAX_NESTING_DEPTH};
pub use tree::{ContentSyntax, ElementForm, ElementSyntax, SyntaxNode, SyntaxTree, TokenSpan};

use chumsky::{Parser, Stream};
use std::ops::Range;
use std::sync::Arc;

use crate::xml::lexing::{lex, SourceLocation, SyntaxToken};

/// Wrap tokens in a chumsky stream spanned by their byte ranges
pub(crate) fn token_stream(
    tokens: Vec<SyntaxToken>,
    eoi: usize,
) -> Stream<'static, SyntaxToken, Range<usize>, impl Iterator<Item = (SyntaxToken, Range<usize>)>>
{
    Stream::from_iter(
        eoi..eoi,
        tokens.into_iter().map(|token| {
            let span = token.span.clone();
            (token, span)
        }),
    )
}

/// Parse source text into a syntax tree
///
/// Returns `Err` when elements nest deeper than [`diagnostics::MAX_NESTING_DEPTH`], or when
/// the grammar produced no tree at all.
pub fn parse_syntax(source: &str) -> Result<SyntaxTree, Vec<SyntaxError>> {
    let tokens = lex(source);
    if let Err(error) = diagnostics::check_nesting(&tokens) {
        tracing::debug!(%error, "refusing deeply nested input");
        return Err(vec![error]);
    }

    let (children, parse_errors) =
        grammar::document(Arc::from(source)).parse_recovery(token_stream(tokens, source.len()));

    let eoi = SourceLocation::new(source).line_column(source.len());
    let mut errors: Vec<SyntaxError> = parse_errors
        .iter()
        .map(|error| SyntaxError::from_parser_error(error, eoi))
        .collect();

    let Some(children) = children else {
        tracing::debug!(errors = errors.len(), "grammar produced no syntax tree");
        return Err(errors);
    };

    errors.extend(diagnostics::check_document(&children));
    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "recovered from syntax errors");
    }

    Ok(SyntaxTree { children, errors })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_syntax_finds_elements() {
        let tree = parse_syntax("<!-- head -->\n<a><b/></a>\n").expect("tree");
        assert_eq!(tree.children().len(), 4);
        assert_eq!(tree.elements().count(), 1);
        assert!(!tree.has_errors());
    }

    #[test]
    fn test_empty_source_yields_empty_tree() {
        let tree = parse_syntax("").expect("tree");
        assert!(tree.children().is_empty());
        assert!(!tree.has_errors());
    }

    #[test]
    fn test_garbage_still_yields_a_tree() {
        let tree = parse_syntax("</ > = \"x\" <").expect("tree");
        assert_eq!(tree.elements().count(), 0);
        assert!(tree.has_errors());
    }

    #[test]
    fn test_deep_nesting_is_refused() {
        let depth = 10_000;
        let source = "<a>".repeat(depth) + &"</a>".repeat(depth);
        let errors = parse_syntax(&source).expect_err("too deep");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span, 384..385);
    }
}
