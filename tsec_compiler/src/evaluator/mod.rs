//! Resolves an `Expression` against a `Scope` to a `Value` (spec.md §4.4).
//!
//! A pure function: it never mutates the scope. Termination is
//! guaranteed because the grammar has no recursive expressions; the
//! only recursion is `Scope::resolve`'s own cycle-guarded lookup of
//! `var`/`local` bindings, which this module calls back into.

use crate::grammar::ast::Expression;
use crate::scope::Scope;
use crate::value::Value;

pub fn eval(expr: &Expression, scope: &Scope) -> Value {
    match expr {
        Expression::Literal(v) => v.clone(),
        Expression::Identifier(name) => match name.as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::Unknown,
        },
        Expression::Reference(path) => scope.resolve(path),
        Expression::List(items) => Value::List(items.iter().map(|e| eval(e, scope)).collect()),
        Expression::Map(entries) => Value::Map(
            entries
                .iter()
                .map(|(k, e)| (k.clone(), eval(e, scope)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::Lexer;
    use crate::syntax::parse;
    use crate::tokens::TokenStream;

    fn eval_attr(src: &str) -> Value {
        let tokens = Lexer::new(src).tokenize().unwrap();
        let (blocks, _) = parse(TokenStream::new(tokens));
        let scope = crate::scope::build(&blocks);
        eval(&blocks[0].attributes[0].expr, &scope)
    }

    #[test]
    fn evaluates_literal_list() {
        let v = eval_attr(r#"locals { x = [1, 2, 3] }"#);
        assert_eq!(v.as_list().map(|l| l.len()), Some(3));
    }

    #[test]
    fn evaluates_reference_through_scope() {
        let v = eval_attr(
            r#"locals { x = var.blocks }
               variable "blocks" { default = ["0.0.0.0/0"] }"#,
        );
        assert!(v.contains(|x| x.ends_with("/0")));
    }

    #[test]
    fn evaluates_map_literal() {
        let v = eval_attr(r#"locals { x = { a = 1 b = 2 } }"#);
        assert_eq!(v.get("a").cloned(), Some(Value::parse_number("1").unwrap()));
    }
}
