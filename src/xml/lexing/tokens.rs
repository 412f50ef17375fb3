//! Token definitions for XML text
//!
//! XML needs two lexer modes: between tags almost anything is character data, while inside a
//! tag whitespace is insignificant and names, `=` and quoted strings are the only content.
//! Each mode is its own logos enum ([`ContentToken`], [`TagToken`]); the lexer loop switches
//! between them with `Lexer::morph` and folds both into the mode-independent [`Token`].

use logos::{Lexer, Logos};
use serde::Serialize;
use std::ops::Range;

/// Markup opened by `<!` or `<?`, told apart by what follows the opener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Comment,
    CData,
    Doctype,
    XmlDecl,
    ProcessingInstruction,
}

/// Tokens recognized between tags
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentToken {
    #[token("<!", bang_markup)]
    #[token("<?", question_markup)]
    Markup(Markup),

    #[regex(r"&[:A-Z_a-z][:A-Z_a-z0-9.\-]*;")]
    EntityRef,

    #[regex(r"&#[0-9]+;|&#x[0-9a-fA-F]+;")]
    CharRef,

    // Same length as a whitespace-only Text match; whitespace wins
    #[regex(r"[ \t\r\n]+", priority = 3)]
    SeaWs,

    #[regex(r"[^<&]+")]
    Text,

    #[token("<")]
    Open,
}

/// Tokens recognized inside a start or end tag
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TagToken {
    #[token(">")]
    Close,

    #[token("/>")]
    SlashClose,

    #[token("/")]
    Slash,

    #[token("=")]
    Equals,

    #[regex(r#""[^<"]*"|'[^<']*'"#)]
    String,

    #[regex(r"[:A-Z_a-z\u{C0}-\u{10FFFF}][:A-Z_a-z0-9.\-\u{B7}\u{C0}-\u{10FFFF}]*")]
    Name,

    // A `<` inside a tag means the tag was never terminated; it opens the next one
    #[token("<")]
    Open,
}

/// Classify `<!...`: comment, CDATA section, or DOCTYPE (and other declarations)
fn bang_markup(lex: &mut Lexer<ContentToken>) -> Markup {
    let remainder = lex.remainder();
    if remainder.starts_with("--") {
        consume_through(lex, 2, "-->");
        Markup::Comment
    } else if remainder.starts_with("[CDATA[") {
        consume_through(lex, 7, "]]>");
        Markup::CData
    } else {
        consume_through(lex, 0, ">");
        Markup::Doctype
    }
}

/// Classify `<?...`: the XML declaration needs whitespace after `xml`, so `<?xml-stylesheet`
/// is an ordinary processing instruction
fn question_markup(lex: &mut Lexer<ContentToken>) -> Markup {
    let is_declaration = lex
        .remainder()
        .strip_prefix("xml")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    consume_through(lex, 0, "?>");
    if is_declaration {
        Markup::XmlDecl
    } else {
        Markup::ProcessingInstruction
    }
}

/// Extend the current token through the first `terminator` at or after `skip` bytes, or to the
/// end of input when it never appears
fn consume_through(lex: &mut Lexer<ContentToken>, skip: usize, terminator: &str) {
    let remainder = &lex.remainder()[skip..];
    let consumed = remainder
        .find(terminator)
        .map(|index| skip + index + terminator.len())
        .unwrap_or(skip + remainder.len());
    lex.bump(consumed);
}

/// Mode-independent token kinds handed to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Token {
    Comment,
    CData,
    Doctype,
    XmlDecl,
    ProcessingInstruction,
    EntityRef,
    CharRef,
    SeaWs,
    Text,
    Open,
    Close,
    SlashClose,
    Slash,
    Equals,
    String,
    Name,
    /// Input neither mode could match
    Invalid,
}

impl Token {
    /// Text or whitespace between tags
    pub fn is_chardata(&self) -> bool {
        matches!(self, Token::Text | Token::SeaWs)
    }

    /// Entity or character reference
    pub fn is_reference(&self) -> bool {
        matches!(self, Token::EntityRef | Token::CharRef)
    }

    /// Markup that is neither an element nor character data
    pub fn is_misc(&self) -> bool {
        matches!(
            self,
            Token::Comment
                | Token::CData
                | Token::Doctype
                | Token::XmlDecl
                | Token::ProcessingInstruction
        )
    }

    /// Tokens that may appear between a tag's name and its terminator
    pub fn is_tag_junk(&self) -> bool {
        matches!(
            self,
            Token::Name | Token::Equals | Token::String | Token::Invalid
        )
    }

    /// Tokens a content block consumes directly (everything but nested tags)
    pub fn is_content(&self) -> bool {
        self.is_chardata() || self.is_reference() || self.is_misc() || *self == Token::Invalid
    }

    /// Tokens that hand control back to content mode
    pub fn ends_tag(&self) -> bool {
        matches!(self, Token::Close | Token::SlashClose)
    }
}

impl From<ContentToken> for Token {
    fn from(token: ContentToken) -> Self {
        match token {
            ContentToken::Markup(Markup::Comment) => Token::Comment,
            ContentToken::Markup(Markup::CData) => Token::CData,
            ContentToken::Markup(Markup::Doctype) => Token::Doctype,
            ContentToken::Markup(Markup::XmlDecl) => Token::XmlDecl,
            ContentToken::Markup(Markup::ProcessingInstruction) => Token::ProcessingInstruction,
            ContentToken::EntityRef => Token::EntityRef,
            ContentToken::CharRef => Token::CharRef,
            ContentToken::SeaWs => Token::SeaWs,
            ContentToken::Text => Token::Text,
            ContentToken::Open => Token::Open,
        }
    }
}

impl From<TagToken> for Token {
    fn from(token: TagToken) -> Self {
        match token {
            TagToken::Close => Token::Close,
            TagToken::SlashClose => Token::SlashClose,
            TagToken::Slash => Token::Slash,
            TagToken::Equals => Token::Equals,
            TagToken::String => Token::String,
            TagToken::Name => Token::Name,
            TagToken::Open => Token::Open,
        }
    }
}

/// A token with its literal text and source position
///
/// `line` is 1-based and `column` is 0-based (counted in characters). That is the usual
/// convention of grammar-driven parsers; conversion to zero-based editor positions happens
/// in [`crate::xml::building::extract_range`] and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SyntaxToken {
    pub kind: Token,
    pub text: String,
    pub span: Range<usize>,
    pub line: usize,
    pub column: usize,
}

impl SyntaxToken {
    pub fn new(
        kind: Token,
        text: impl Into<String>,
        span: Range<usize>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            line,
            column,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
