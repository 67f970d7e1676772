#[macro_use]
pub mod logging;

pub mod config;
pub mod evaluator;
pub mod grammar;
pub mod lexical;
pub mod scope;
pub mod syntax;
pub mod tokens;
pub mod utils;
pub mod value;

use grammar::ast::Block;
use lexical::LexError;
use syntax::ParseError;

/// Either stage's error, as returned by `parse_source` (spec.md §7: both
/// are non-fatal to the overall run, the driver records them and moves
/// on, but the compiler itself just reports what went wrong).
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Parse a single source document into its top-level blocks.
///
/// A lex failure aborts immediately (the lexer has no recovery mode);
/// a parse failure still returns whatever blocks were recovered
/// alongside the accumulated errors (spec.md §4.2).
pub fn parse_source(src: &str) -> (Vec<Block>, Vec<CompileError>) {
    let tokens = match lexical::Lexer::new(src).tokenize() {
        Ok(tokens) => tokens,
        Err(err) => return (Vec::new(), vec![CompileError::Lex(err)]),
    };
    let (blocks, parse_errors) = syntax::parse(tokens::TokenStream::new(tokens));
    (blocks, parse_errors.into_iter().map(CompileError::Parse).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_source_round_trips_block_structure() {
        let (blocks, errors) = parse_source(
            r#"resource "aws_alb_listener" "l" { protocol = "HTTP" }
               variable "v" { default = 1 }"#,
        );
        assert!(errors.is_empty());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].labels, vec!["aws_alb_listener", "l"]);
        assert_eq!(blocks[1].block_type, "variable");
    }
}
