//! Lexical scope construction: the pre-scan that wires up `var.*`,
//! `local.*` and resource/data placeholder bindings (spec.md §3, §4.4).

mod builder;

pub use builder::build;

use crate::config::constants::MAX_REFERENCE_DEPTH;
use crate::evaluator::eval;
use crate::grammar::ast::Expression;
use crate::log_debug;
use crate::value::Value;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

type Root = (String, String);

/// Lexical environment mapping reference-path prefixes to values.
///
/// Built once per scan by pre-scanning the block tree. `var.NAME` and
/// `local.K` bindings are stored as unevaluated expressions and resolved
/// lazily (with memoization and a cycle guard), since a variable default
/// may itself reference another variable or local.
pub struct Scope {
    bindings: HashMap<Root, Expression>,
    /// `TYPE.NAME` roots contributed by resource/data blocks, always
    /// `Unknown`, never evaluated (spec.md §3, §9: static resource
    /// outputs have no defined value).
    placeholders: HashSet<Root>,
    cache: RefCell<HashMap<Root, Value>>,
    in_progress: RefCell<HashSet<Root>>,
    depth: Cell<usize>,
}

impl Scope {
    fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            placeholders: HashSet::new(),
            cache: RefCell::new(HashMap::new()),
            in_progress: RefCell::new(HashSet::new()),
            depth: Cell::new(0),
        }
    }

    /// Resolve a reference path of at least two segments. Unresolvable,
    /// cyclic, or over-deep paths all come back as `Unknown`; the
    /// evaluator never fails outright (spec.md §4.4, §7).
    pub fn resolve(&self, path: &[String]) -> Value {
        if path.len() < 2 {
            return Value::Unknown;
        }
        let root: Root = (path[0].clone(), path[1].clone());
        let remaining = &path[2..];

        if let Some(cached) = self.cache.borrow().get(&root) {
            return descend(cached, remaining);
        }
        if self.placeholders.contains(&root) {
            self.cache.borrow_mut().insert(root.clone(), Value::Unknown);
            return Value::Unknown;
        }
        let Some(expr) = self.bindings.get(&root) else {
            return Value::Unknown;
        };

        if self.in_progress.borrow().contains(&root) {
            log_debug!("reference cycle detected, resolving to Unknown",
                "root" => format!("{}.{}", root.0, root.1));
            return Value::Unknown;
        }
        if self.depth.get() >= MAX_REFERENCE_DEPTH {
            return Value::Unknown;
        }

        self.in_progress.borrow_mut().insert(root.clone());
        self.depth.set(self.depth.get() + 1);
        let value = eval(expr, self);
        self.depth.set(self.depth.get() - 1);
        self.in_progress.borrow_mut().remove(&root);

        self.cache.borrow_mut().insert(root.clone(), value.clone());
        descend(&value, remaining)
    }
}

/// Walk remaining path segments into a Map (by key) or List (by numeric
/// index), per spec.md §4.4.
fn descend(value: &Value, remaining: &[String]) -> Value {
    let mut current = value.clone();
    for segment in remaining {
        current = match &current {
            Value::Map(_) => current.get(segment).cloned().unwrap_or(Value::Unknown),
            Value::List(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get(i).cloned())
                .unwrap_or(Value::Unknown),
            _ => Value::Unknown,
        };
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::ast::Block;
    use crate::lexical::Lexer;
    use crate::syntax::parse;
    use crate::tokens::TokenStream;

    fn blocks(src: &str) -> Vec<Block> {
        let tokens = Lexer::new(src).tokenize().unwrap();
        parse(TokenStream::new(tokens)).0
    }

    #[test]
    fn resolves_variable_default() {
        let b = blocks(r#"variable "blocks" { default = ["0.0.0.0/0"] }"#);
        let scope = build(&b);
        let v = scope.resolve(&["var".into(), "blocks".into()]);
        assert!(v.contains(|x| x.ends_with("/0")));
    }

    #[test]
    fn resolves_local() {
        let b = blocks(r#"locals { region = "us-east-1" }"#);
        let scope = build(&b);
        assert_eq!(scope.resolve(&["local".into(), "region".into()]), Value::String("us-east-1".into()));
    }

    #[test]
    fn variable_referencing_local_resolves_transitively() {
        let b = blocks(
            r#"locals { default_region = "us-west-2" }
               variable "region" { default = local.default_region }"#,
        );
        let scope = build(&b);
        assert_eq!(scope.resolve(&["var".into(), "region".into()]), Value::String("us-west-2".into()));
    }

    #[test]
    fn cyclic_variable_references_resolve_to_unknown() {
        let b = blocks(
            r#"variable "a" { default = var.b }
               variable "b" { default = var.a }"#,
        );
        let scope = build(&b);
        assert_eq!(scope.resolve(&["var".into(), "a".into()]), Value::Unknown);
    }

    #[test]
    fn resource_reference_is_a_placeholder_unknown() {
        let b = blocks(r#"resource "aws_security_group" "sg" {}"#);
        let scope = build(&b);
        assert_eq!(scope.resolve(&["aws_security_group".into(), "sg".into(), "id".into()]), Value::Unknown);
    }

    #[test]
    fn missing_binding_resolves_to_unknown() {
        let b = blocks(r#"locals { x = 1 }"#);
        let scope = build(&b);
        assert_eq!(scope.resolve(&["var".into(), "nope".into()]), Value::Unknown);
    }
}
