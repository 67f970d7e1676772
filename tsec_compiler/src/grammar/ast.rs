//! AST node definitions corresponding to spec.md §3's Block/Attribute/Expression grammar.

use crate::utils::Span;
use crate::value::Value;

/// An expression as written in source, before evaluation (spec.md §3).
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Value),
    /// A bare identifier token, rarely appears as an RHS root (only when
    /// it isn't `true`/`false`, which lex directly to `Literal(Bool)`).
    Identifier(String),
    /// `var.blocks`, `aws_security_group.sg.id`, etc.
    Reference(Vec<String>),
    List(Vec<Expression>),
    Map(Vec<(String, Expression)>),
}

/// A `name = expression` assignment within a block.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub expr: Expression,
    pub range: Span,
}

/// A hierarchical, labeled, brace-delimited block (spec.md §3).
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub block_type: String,
    pub labels: Vec<String>,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Block>,
    pub range: Span,
}

impl Block {
    /// First label, the one rule dispatch matches against (spec.md §4.6).
    pub fn first_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }

    /// Block name used in human-readable messages, the second label by
    /// convention (`resource "TYPE" "NAME"`), falling back to the type.
    pub fn name(&self) -> &str {
        self.labels.get(1).map(String::as_str).unwrap_or(&self.block_type)
    }

    /// Attribute lookup by name. Absence is distinct from a `Null` value
    /// (spec.md §4.7); this returns `None` for absence.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// All direct children of a given block type (e.g. `redirect {}`),
    /// preserving source order; a block may have several (spec.md §3).
    pub fn children_of_type<'a>(&'a self, block_type: &'a str) -> impl Iterator<Item = &'a Block> {
        self.children.iter().filter(move |c| c.block_type == block_type)
    }

    /// Depth-first pre-order walk over this block and all its descendants.
    pub fn walk(&self) -> Vec<&Block> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Span;

    fn block(block_type: &str, labels: &[&str]) -> Block {
        Block {
            block_type: block_type.to_string(),
            labels: labels.iter().map(|s| s.to_string()).collect(),
            attributes: vec![],
            children: vec![],
            range: Span::dummy(),
        }
    }

    #[test]
    fn walk_visits_self_then_children_pre_order() {
        let mut root = block("resource", &["aws_alb_listener", "l"]);
        root.children.push(block("redirect", &[]));
        root.children.push(block("redirect", &[]));
        let visited: Vec<&str> = root.walk().iter().map(|b| b.block_type.as_str()).collect();
        assert_eq!(visited, vec!["resource", "redirect", "redirect"]);
    }

    #[test]
    fn children_of_type_finds_repeated_siblings() {
        let mut root = block("resource", &["x", "y"]);
        root.children.push(block("redirect", &[]));
        root.children.push(block("other", &[]));
        root.children.push(block("redirect", &[]));
        assert_eq!(root.children_of_type("redirect").count(), 2);
    }
}
