//! Recursive-descent parser: token stream to block tree (spec.md §4.2).
//!
//! Tolerates trailing commas and blank lines inside lists/maps, skips
//! comments (already filtered out of the significant token view by
//! `TokenStream`), and recovers from a malformed block body by skipping
//! to the matching close brace and continuing with the next sibling,
//! so a single file can surface more than one error.

use crate::config::constants::MAX_NESTING_DEPTH;
use crate::grammar::ast::{Attribute, Block, Expression};
use crate::log_warning;
use crate::logging::codes;
use crate::syntax::error::{ParseError, ParseResult};
use crate::tokens::{Token, TokenStream};
use crate::value::Value;

pub struct Parser {
    tokens: TokenStream,
    depth: usize,
    /// Count of `{` tokens consumed (by a block body or a map literal)
    /// that haven't yet been matched by their `}`. Left non-zero when an
    /// error unwinds out of `parse_block`/`parse_map` via `?`, so
    /// `recover_to_top_level` knows exactly how many closing braces it
    /// still needs to consume to get back to the top level.
    brace_depth: usize,
    errors: Vec<ParseError>,
}

/// Parses a full document, returning the successfully-recovered blocks
/// alongside any errors encountered (spec.md §4.2 recovery semantics).
pub fn parse(tokens: TokenStream) -> (Vec<Block>, Vec<ParseError>) {
    let mut parser = Parser {
        tokens,
        depth: 0,
        brace_depth: 0,
        errors: Vec::new(),
    };
    let blocks = parser.parse_top_level();
    (blocks, parser.errors)
}

impl Parser {
    fn parse_top_level(&mut self) -> Vec<Block> {
        let mut blocks = Vec::new();
        while !self.tokens.at_eof() {
            match self.parse_block() {
                Ok(block) => blocks.push(block),
                Err(err) => {
                    self.errors.push(err.clone());
                    log_warning!(codes::parser::RECOVERED, &format!("{err}"));
                    self.recover_to_top_level();
                }
            }
        }
        blocks
    }

    /// Skip tokens until every brace opened by the failed attempt (per
    /// `self.brace_depth`) has been matched by its `}`, or we hit EOF, so
    /// a malformed block doesn't poison the rest of the document and its
    /// following sibling parses normally (spec.md §4.2).
    fn recover_to_top_level(&mut self) {
        let mut opened = self.brace_depth;
        self.brace_depth = 0;
        self.depth = 0;
        loop {
            match &self.tokens.peek().value {
                Token::Eof => return,
                Token::OpenBrace => {
                    opened += 1;
                    self.tokens.advance();
                }
                Token::CloseBrace => {
                    self.tokens.advance();
                    if opened == 0 {
                        continue;
                    }
                    opened -= 1;
                    if opened == 0 {
                        return;
                    }
                }
                _ => {
                    if opened == 0 {
                        // Never opened a brace at all, just drop one token
                        // at a time until we find something block-shaped.
                        self.tokens.advance();
                        if matches!(self.tokens.peek().value, Token::Identifier(_) | Token::Eof) {
                            return;
                        }
                    } else {
                        self.tokens.advance();
                    }
                }
            }
        }
    }

    fn parse_block(&mut self) -> ParseResult<Block> {
        let start = self.tokens.current_span();
        let block_type = self.expect_identifier("block type")?;

        let mut labels = Vec::new();
        loop {
            match &self.tokens.peek().value {
                Token::StringLiteral(s) => {
                    labels.push(s.clone());
                    self.tokens.advance();
                }
                Token::Identifier(s) => {
                    labels.push(s.clone());
                    self.tokens.advance();
                }
                _ => break,
            }
        }

        self.expect(Token::OpenBrace)?;
        self.brace_depth += 1;
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            let span = self.tokens.current_span();
            self.depth -= 1;
            return Err(ParseError::MaxNestingDepth { span });
        }
        let (attributes, children) = self.parse_body()?;
        self.depth -= 1;
        let close = self.tokens.current_span();
        self.expect(Token::CloseBrace)?;
        self.brace_depth -= 1;

        Ok(Block {
            block_type,
            labels,
            attributes,
            children,
            range: start.merge(close),
        })
    }

    fn parse_body(&mut self) -> ParseResult<(Vec<Attribute>, Vec<Block>)> {
        let mut attributes: Vec<Attribute> = Vec::new();
        let mut children = Vec::new();

        loop {
            match &self.tokens.peek().value {
                Token::CloseBrace | Token::Eof => break,
                Token::Identifier(_) => {
                    // Lookahead: `name = expr` is an attribute, anything
                    // else starting with an identifier is a nested block.
                    if self.peek_is_attribute() {
                        let attr = self.parse_attribute()?;
                        if let Some(existing) = attributes.iter_mut().find(|a| a.name == attr.name) {
                            *existing = attr;
                        } else {
                            attributes.push(attr);
                        }
                    } else {
                        children.push(self.parse_block()?);
                    }
                }
                other => {
                    let span = self.tokens.current_span();
                    return Err(ParseError::UnexpectedToken {
                        expected: "attribute or nested block".to_string(),
                        found: other.to_string(),
                        span,
                    });
                }
            }
        }

        Ok((attributes, children))
    }

    /// True if the upcoming `identifier` is immediately followed by `=`
    /// (an attribute), rather than more labels and a `{` (a nested block).
    fn peek_is_attribute(&self) -> bool {
        matches!(self.tokens.peek_ahead(1).map(|t| &t.value), Some(Token::Equals))
    }

    fn parse_attribute(&mut self) -> ParseResult<Attribute> {
        let start = self.tokens.current_span();
        let name = self.expect_identifier("attribute name")?;
        self.expect(Token::Equals)?;
        let expr = self.parse_expression()?;
        let end = self.tokens.current_span();
        Ok(Attribute {
            name,
            expr,
            range: start.merge(end),
        })
    }

    fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            let span = self.tokens.current_span();
            self.depth -= 1;
            return Err(ParseError::MaxNestingDepth { span });
        }
        let result = self.parse_expression_inner();
        self.depth -= 1;
        result
    }

    fn parse_expression_inner(&mut self) -> ParseResult<Expression> {
        let tok = self.tokens.peek().value.clone();
        match tok {
            Token::Boolean(b) => {
                self.tokens.advance();
                Ok(Expression::Literal(Value::Bool(b)))
            }
            Token::Number(text) => {
                self.tokens.advance();
                Ok(Expression::Literal(
                    Value::parse_number(&text).unwrap_or(Value::Unknown),
                ))
            }
            Token::StringLiteral(text) => {
                self.tokens.advance();
                Ok(Expression::Literal(Value::String(text)))
            }
            Token::Identifier(name) => {
                self.tokens.advance();
                let mut path = vec![name];
                while matches!(self.tokens.peek().value, Token::Dot) {
                    self.tokens.advance();
                    let segment = self.expect_identifier("reference segment")?;
                    path.push(segment);
                }
                if path.len() == 1 {
                    Ok(Expression::Identifier(path.into_iter().next().unwrap()))
                } else {
                    Ok(Expression::Reference(path))
                }
            }
            Token::OpenBracket => self.parse_list(),
            Token::OpenBrace => self.parse_map(),
            other => {
                let span = self.tokens.current_span();
                Err(ParseError::UnexpectedToken {
                    expected: "expression".to_string(),
                    found: other.to_string(),
                    span,
                })
            }
        }
    }

    fn parse_list(&mut self) -> ParseResult<Expression> {
        self.expect(Token::OpenBracket)?;
        let mut items = Vec::new();
        loop {
            if matches!(self.tokens.peek().value, Token::CloseBracket) {
                break;
            }
            items.push(self.parse_expression()?);
            if matches!(self.tokens.peek().value, Token::Comma) {
                self.tokens.advance();
                continue;
            }
            break;
        }
        self.expect(Token::CloseBracket)?;
        Ok(Expression::List(items))
    }

    fn parse_map(&mut self) -> ParseResult<Expression> {
        self.expect(Token::OpenBrace)?;
        self.brace_depth += 1;
        let mut entries = Vec::new();
        loop {
            if matches!(self.tokens.peek().value, Token::CloseBrace) {
                break;
            }
            let name = self.expect_identifier("map key")?;
            self.expect(Token::Equals)?;
            let value = self.parse_expression()?;
            entries.push((name, value));
            if matches!(self.tokens.peek().value, Token::Comma) {
                self.tokens.advance();
                continue;
            }
        }
        self.expect(Token::CloseBrace)?;
        self.brace_depth -= 1;
        Ok(Expression::Map(entries))
    }

    fn expect(&mut self, expected: Token) -> ParseResult<()> {
        let found = self.tokens.peek().value.clone();
        if found == expected {
            self.tokens.advance();
            Ok(())
        } else {
            let span = self.tokens.current_span();
            Err(ParseError::UnexpectedToken {
                expected: expected.describe().to_string(),
                found: found.to_string(),
                span,
            })
        }
    }

    fn expect_identifier(&mut self, what: &str) -> ParseResult<String> {
        match self.tokens.peek().value.clone() {
            Token::Identifier(s) => {
                self.tokens.advance();
                Ok(s)
            }
            other => {
                let span = self.tokens.current_span();
                Err(ParseError::UnexpectedToken {
                    expected: what.to_string(),
                    found: other.to_string(),
                    span,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::Lexer;

    fn parse_src(src: &str) -> (Vec<Block>, Vec<ParseError>) {
        let tokens = Lexer::new(src).tokenize().unwrap();
        parse(TokenStream::new(tokens))
    }

    #[test]
    fn parses_simple_resource_block() {
        let (blocks, errors) = parse_src(r#"resource "aws_alb_listener" "l" { protocol = "HTTP" }"#);
        assert!(errors.is_empty());
        assert_eq!(blocks.len(), 1);
        let b = &blocks[0];
        assert_eq!(b.block_type, "resource");
        assert_eq!(b.labels, vec!["aws_alb_listener", "l"]);
        assert_eq!(b.attributes.len(), 1);
        assert_eq!(b.attributes[0].name, "protocol");
        assert_eq!(b.attributes[0].expr, Expression::Literal(Value::String("HTTP".into())));
    }

    #[test]
    fn parses_nested_repeated_children() {
        let (blocks, errors) = parse_src(
            r#"resource "aws_alb_listener" "l" {
                protocol = "HTTP"
                default_action {
                    type = "redirect"
                    redirect { port = "443" }
                    redirect { port = "8443" }
                }
            }"#,
        );
        assert!(errors.is_empty());
        let default_action = &blocks[0].children[0];
        assert_eq!(default_action.children_of_type("redirect").count(), 2);
    }

    #[test]
    fn parses_list_and_reference_expressions() {
        let (blocks, errors) = parse_src(
            r#"resource "aws_security_group_rule" "r" {
                cidr_blocks = ["10.0.0.0/16", "0.0.0.0/0"]
                other = var.blocks
            }"#,
        );
        assert!(errors.is_empty());
        let attrs = &blocks[0].attributes;
        assert!(matches!(attrs[0].expr, Expression::List(ref items) if items.len() == 2));
        assert_eq!(attrs[1].expr, Expression::Reference(vec!["var".into(), "blocks".into()]));
    }

    #[test]
    fn duplicate_attribute_keeps_the_later_definition() {
        let (blocks, _) = parse_src(r#"locals { x = 1 x = 2 }"#);
        assert_eq!(blocks[0].attributes.len(), 1);
        assert_eq!(blocks[0].attributes[0].expr, Expression::Literal(Value::parse_number("2").unwrap()));
    }

    #[test]
    fn trailing_comma_in_list_is_tolerated() {
        let (blocks, errors) = parse_src(r#"locals { x = [1, 2,] }"#);
        assert!(errors.is_empty());
        assert!(matches!(blocks[0].attributes[0].expr, Expression::List(ref items) if items.len() == 2));
    }

    #[test]
    fn map_literal_on_rhs() {
        let (blocks, errors) = parse_src(r#"locals { tags = { Name = "x" Env = "prod" } }"#);
        assert!(errors.is_empty());
        assert!(matches!(blocks[0].attributes[0].expr, Expression::Map(ref entries) if entries.len() == 2));
    }

    #[test]
    fn block_range_contains_every_attribute_and_child_range() {
        let (blocks, errors) = parse_src(
            r#"resource "aws_alb_listener" "l" {
                protocol = "HTTP"
                default_action { type = "redirect" }
            }"#,
        );
        assert!(errors.is_empty());
        let block = &blocks[0];
        for attr in &block.attributes {
            assert!(block.range.contains(&attr.range));
        }
        for child in &block.children {
            assert!(block.range.contains(&child.range));
        }
    }

    #[test]
    fn recovers_from_malformed_block_and_keeps_parsing_siblings() {
        let (blocks, errors) = parse_src(
            r#"resource "broken" "b" { x = }
               resource "ok" "o" { y = 1 }"#,
        );
        assert!(!errors.is_empty());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].block_type, "resource");
        assert_eq!(blocks[0].labels[0], "ok");
    }
}
