//! Token kinds produced by the lexer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single lexical token. Carries literal text but not position,
/// position lives alongside it in a `Spanned<Token>` (see `token_stream`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    Identifier(String),
    StringLiteral(String),
    Number(String),
    Boolean(bool),

    OpenBrace,    // {
    CloseBrace,   // }
    OpenBracket,  // [
    CloseBracket, // ]
    Equals,       // =
    Comma,        // ,
    Dot,          // .

    Newline,
    Comment(String),
    Eof,
}

impl Token {
    /// Whitespace/comments are skipped by the parser but tracked by the
    /// lexer so line numbers stay accurate even when filtered out.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, Self::Newline | Self::Comment(_))
    }

    pub fn is_significant(&self) -> bool {
        !self.is_ignorable()
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "identifier",
            Self::StringLiteral(_) => "string literal",
            Self::Number(_) => "number literal",
            Self::Boolean(_) => "boolean literal",
            Self::OpenBrace => "'{'",
            Self::CloseBrace => "'}'",
            Self::OpenBracket => "'['",
            Self::CloseBracket => "']'",
            Self::Equals => "'='",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::Newline => "newline",
            Self::Comment(_) => "comment",
            Self::Eof => "end of file",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(s) => write!(f, "{s}"),
            Self::StringLiteral(s) => write!(f, "\"{s}\""),
            Self::Number(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            _ => write!(f, "{}", self.describe()),
        }
    }
}
