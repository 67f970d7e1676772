//! Byte-stream-to-token-stream lexer.
//!
//! Implements the grammar described in spec.md §4.1: identifiers,
//! double-quoted strings (escapes only, `${...}` preserved as opaque
//! content), decimal numbers, bare booleans, `#`/`//` line comments,
//! `/* */` block comments, and the punctuation set `{ } [ ] = , .`.

use crate::config::constants::{MAX_IDENTIFIER_LENGTH, MAX_STRING_LENGTH};
use crate::lexical::error::LexError;
use crate::log_debug;
use crate::tokens::token::Token;
use crate::tokens::token_stream::SpannedToken;
use crate::utils::{Position, Span};

pub struct Lexer {
    chars: Vec<char>,
    pos: Position,
    idx: usize,
}

impl Lexer {
    pub fn new(src: &str) -> Self {
        Self {
            chars: src.chars().collect(),
            pos: Position::start(),
            idx: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.idx).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.idx + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.idx += 1;
        self.pos = self.pos.advance(ch);
        Some(ch)
    }

    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, LexError> {
        let mut out = Vec::new();
        loop {
            let start = self.pos;
            let Some(ch) = self.peek() else {
                out.push(SpannedToken::new(Token::Eof, Span::new(start, start)));
                break;
            };

            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.bump();
                continue;
            }
            if ch == '\n' {
                self.bump();
                out.push(SpannedToken::new(Token::Newline, Span::new(start, self.pos)));
                continue;
            }
            if ch == '#' {
                self.skip_line_comment(start, &mut out);
                continue;
            }
            if ch == '/' && self.peek_at(1) == Some('/') {
                self.skip_line_comment(start, &mut out);
                continue;
            }
            if ch == '/' && self.peek_at(1) == Some('*') {
                self.skip_block_comment(start, &mut out)?;
                continue;
            }

            let tok = match ch {
                '{' => {
                    self.bump();
                    Token::OpenBrace
                }
                '}' => {
                    self.bump();
                    Token::CloseBrace
                }
                '[' => {
                    self.bump();
                    Token::OpenBracket
                }
                ']' => {
                    self.bump();
                    Token::CloseBracket
                }
                '=' => {
                    self.bump();
                    Token::Equals
                }
                ',' => {
                    self.bump();
                    Token::Comma
                }
                '.' => {
                    self.bump();
                    Token::Dot
                }
                '"' => self.lex_string(start)?,
                c if c == '-' || c.is_ascii_digit() => self.lex_number(start),
                c if c.is_alphabetic() || c == '_' => self.lex_identifier(start)?,
                c => return Err(LexError::UnexpectedCharacter { ch: c, span: Span::new(start, self.pos) }),
            };
            out.push(SpannedToken::new(tok, Span::new(start, self.pos)));
        }
        log_debug!("lexed token stream", "tokens" => out.len());
        Ok(out)
    }

    fn skip_line_comment(&mut self, start: Position, out: &mut Vec<SpannedToken>) {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.bump();
        }
        out.push(SpannedToken::new(Token::Comment(text), Span::new(start, self.pos)));
    }

    fn skip_block_comment(&mut self, start: Position, out: &mut Vec<SpannedToken>) -> Result<(), LexError> {
        self.bump(); // '/'
        self.bump(); // '*'
        let mut text = String::new();
        loop {
            match self.peek() {
                None => return Err(LexError::UnterminatedString { span: Span::new(start, self.pos) }),
                Some('*') if self.peek_at(1) == Some('/') => {
                    self.bump();
                    self.bump();
                    break;
                }
                Some(c) => {
                    text.push(c);
                    self.bump();
                }
            }
        }
        out.push(SpannedToken::new(Token::Comment(text), Span::new(start, self.pos)));
        Ok(())
    }

    fn lex_string(&mut self, start: Position) -> Result<Token, LexError> {
        self.bump(); // opening quote
        let mut content = String::new();
        loop {
            if content.len() > MAX_STRING_LENGTH {
                return Err(LexError::StringTooLong { limit: MAX_STRING_LENGTH, span: Span::new(start, self.pos) });
            }
            match self.peek() {
                None => return Err(LexError::UnterminatedString { span: Span::new(start, self.pos) }),
                Some('"') => {
                    self.bump();
                    break;
                }
                Some('\\') => {
                    let esc_start = self.pos;
                    self.bump();
                    match self.peek() {
                        Some('"') => {
                            content.push('"');
                            self.bump();
                        }
                        Some('\\') => {
                            content.push('\\');
                            self.bump();
                        }
                        Some('n') => {
                            content.push('\n');
                            self.bump();
                        }
                        Some('t') => {
                            content.push('\t');
                            self.bump();
                        }
                        Some(other) => {
                            return Err(LexError::InvalidEscape {
                                escape: other,
                                span: Span::new(esc_start, self.pos),
                            })
                        }
                        None => return Err(LexError::UnterminatedString { span: Span::new(start, self.pos) }),
                    }
                }
                Some(c) => {
                    // `${...}` interpolation markers have no special meaning
                    // to the lexer, preserved verbatim as opaque content.
                    content.push(c);
                    self.bump();
                }
            }
        }
        Ok(Token::StringLiteral(content))
    }

    fn lex_number(&mut self, _start: Position) -> Token {
        let mut text = String::new();
        if self.peek() == Some('-') {
            text.push('-');
            self.bump();
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if self.peek() == Some('.') && self.peek_at(1).map(|c| c.is_ascii_digit()).unwrap_or(false) {
            text.push('.');
            self.bump();
            while let Some(c) = self.peek() {
                if c.is_ascii_digit() {
                    text.push(c);
                    self.bump();
                } else {
                    break;
                }
            }
        }
        Token::Number(text)
    }

    fn lex_identifier(&mut self, start: Position) -> Result<Token, LexError> {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if text.len() > MAX_IDENTIFIER_LENGTH {
            return Err(LexError::IdentifierTooLong {
                limit: MAX_IDENTIFIER_LENGTH,
                span: Span::new(start, self.pos),
            });
        }
        Ok(match text.as_str() {
            "true" => Token::Boolean(true),
            "false" => Token::Boolean(false),
            _ => Token::Identifier(text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token> {
        Lexer::new(src)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.value)
            .filter(|t| t.is_significant())
            .collect()
    }

    #[test]
    fn lexes_block_skeleton() {
        let toks = tokens(r#"resource "aws_alb_listener" "l" { protocol = "HTTP" }"#);
        assert_eq!(
            toks,
            vec![
                Token::Identifier("resource".into()),
                Token::StringLiteral("aws_alb_listener".into()),
                Token::StringLiteral("l".into()),
                Token::OpenBrace,
                Token::Identifier("protocol".into()),
                Token::Equals,
                Token::StringLiteral("HTTP".into()),
                Token::CloseBrace,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn lexes_bare_booleans_and_numbers() {
        let toks = tokens("enabled = true\nport = -1\nratio = 0.5");
        assert!(toks.contains(&Token::Boolean(true)));
        assert!(toks.contains(&Token::Number("-1".into())));
        assert!(toks.contains(&Token::Number("0.5".into())));
    }

    #[test]
    fn preserves_interpolation_markers_verbatim() {
        let toks = tokens(r#"name = "${var.x}""#);
        assert_eq!(toks[2], Token::StringLiteral("${var.x}".into()));
    }

    #[test]
    fn skips_comments() {
        let toks = tokens("# line\nfoo = 1 // trailing\n/* block\ncomment */\nbar = 2");
        assert_eq!(
            toks,
            vec![
                Token::Identifier("foo".into()),
                Token::Equals,
                Token::Number("1".into()),
                Token::Identifier("bar".into()),
                Token::Equals,
                Token::Number("2".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let err = Lexer::new(r#"x = "abc"#).tokenize().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
    }

    #[test]
    fn invalid_escape_is_an_error() {
        let err = Lexer::new(r#"x = "a\qb""#).tokenize().unwrap_err();
        assert!(matches!(err, LexError::InvalidEscape { escape: 'q', .. }));
    }

    #[test]
    fn overlong_identifier_is_an_error() {
        let src = format!("{} = 1", "a".repeat(crate::config::constants::MAX_IDENTIFIER_LENGTH + 1));
        let err = Lexer::new(&src).tokenize().unwrap_err();
        assert!(matches!(err, LexError::IdentifierTooLong { .. }));
    }

    #[test]
    fn overlong_string_is_an_error() {
        let src = format!(r#"x = "{}""#, "a".repeat(crate::config::constants::MAX_STRING_LENGTH + 1));
        let err = Lexer::new(&src).tokenize().unwrap_err();
        assert!(matches!(err, LexError::StringTooLong { .. }));
    }
}
