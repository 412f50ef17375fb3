//! Token position to AST range conversion
//!
//! Tokens carry 1-based lines and 0-based columns. Everything in [`crate::xml::ast`] is
//! zero-based, so this is the only place that knows about the mismatch.

use crate::xml::ast::{Position, Range};
use crate::xml::lexing::SyntaxToken;
use crate::xml::parsing::TokenSpan;

/// Zero-based position at the start of a token
pub fn token_position(token: &SyntaxToken) -> Position {
    Position::new(token.line.saturating_sub(1), token.column)
}

/// Range of a syntax node: from the start of its first token to the start of its last
///
/// The end is where the last token begins, not where it ends; for `<a>x</a>` the range
/// ends at the final `>`.
pub fn extract_range(node: &impl TokenSpan) -> Range {
    Range::new(
        token_position(node.start_token()),
        token_position(node.stop_token()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::lexing::Token;

    struct Span(SyntaxToken, SyntaxToken);

    impl TokenSpan for Span {
        fn start_token(&self) -> &SyntaxToken {
            &self.0
        }

        fn stop_token(&self) -> &SyntaxToken {
            &self.1
        }
    }

    fn token(kind: Token, text: &str, line: usize, column: usize) -> SyntaxToken {
        SyntaxToken::new(kind, text.to_string(), 0..text.len(), line, column)
    }

    #[test]
    fn test_line_is_made_zero_based_and_column_kept() {
        let span = Span(
            token(Token::Open, "<", 11, 4),
            token(Token::Close, ">", 13, 10),
        );
        let range = extract_range(&span);
        assert_eq!(range.start, Position::new(10, 4));
        assert_eq!(range.end, Position::new(12, 10));
    }

    #[test]
    fn test_single_token_span() {
        let open = token(Token::Open, "<", 1, 0);
        let span = Span(open.clone(), open);
        assert_eq!(
            extract_range(&span),
            Range::new(Position::new(0, 0), Position::new(0, 0))
        );
    }
}
