//! Span-accurate token stream for the parser.
//!
//! Holds every token (including whitespace/comments) for accurate span
//! bookkeeping, but exposes only the significant ones to the parser via
//! an index array, the way the teacher's `TokenStream` separates
//! `all_tokens` from `significant_indices`.

use crate::tokens::token::Token;
use crate::utils::{Span, Spanned};

pub type SpannedToken = Spanned<Token>;

#[derive(Debug, Clone)]
pub struct TokenStream {
    all_tokens: Vec<SpannedToken>,
    significant_indices: Vec<usize>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<SpannedToken>) -> Self {
        let significant_indices = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.value.is_significant())
            .map(|(i, _)| i)
            .collect();
        Self {
            all_tokens: tokens,
            significant_indices,
            position: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.significant_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.significant_indices.is_empty()
    }

    fn at(&self, idx: usize) -> Option<&SpannedToken> {
        self.significant_indices
            .get(idx)
            .and_then(|&i| self.all_tokens.get(i))
    }

    /// The token at the current position, without consuming it.
    pub fn peek(&self) -> &SpannedToken {
        self.at(self.position)
            .unwrap_or_else(|| self.all_tokens.last().expect("token stream always has EOF"))
    }

    pub fn peek_ahead(&self, n: usize) -> Option<&SpannedToken> {
        self.at(self.position + n)
    }

    /// Consume and return the current token, advancing the position.
    pub fn advance(&mut self) -> SpannedToken {
        let tok = self.peek().clone();
        if self.position < self.significant_indices.len() {
            self.position += 1;
        }
        tok
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(self.significant_indices.len());
    }

    pub fn at_eof(&self) -> bool {
        matches!(self.peek().value, Token::Eof)
    }

    /// Span of the current token, used to anchor error messages even
    /// when the stream is at EOF.
    pub fn current_span(&self) -> Span {
        self.peek().span
    }
}
