//! Walks the block tree and dispatches matching rules (spec.md §4.6).

use crate::context::Context;
use crate::registry::CheckRegistry;
use crate::results::Finding;
use tsec_compiler::grammar::Block;
use tsec_compiler::scope::Scope;

/// Scan every block (depth-first pre-order, including nested blocks) in
/// `roots` against every registered check, in registration (code) order.
///
/// Ordering is stable given identical inputs: pre-order block visits
/// crossed with sorted-by-code checks, but callers must not depend on
/// anything finer-grained than that (spec.md §4.6).
pub fn scan(roots: &[Block], registry: &CheckRegistry, scope: &Scope) -> Vec<Finding> {
    let ctx = Context::new(scope, roots);
    let checks = registry.all_checks();
    let mut findings = Vec::new();

    for root in roots {
        for block in root.walk() {
            for check in &checks {
                if !check.applies_to(block) {
                    continue;
                }
                findings.extend(check.evaluate(block, &ctx));
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{Check, Provider};
    use crate::results::Severity;
    use tsec_compiler::scope::build as build_scope;

    fn parse(src: &str) -> Vec<Block> {
        tsec_compiler::parse_source(src).0
    }

    #[test]
    fn dispatches_only_to_matching_type_and_label() {
        let blocks = parse(
            r#"resource "aws_s3_bucket" "a" {}
               resource "aws_iam_user" "b" {}"#,
        );
        let scope = build_scope(&blocks);
        let mut registry = CheckRegistry::new();
        registry.register(Check::new(
            "TEST001",
            "matches only aws_s3_bucket",
            Provider::Aws,
            vec!["resource"],
            vec!["aws_s3_bucket"],
            Box::new(|check, block, _| {
                vec![Finding::new(check.code.clone(), &check.description, Severity::Info, "hit", block.range)]
            }),
        ));

        let findings = scan(&blocks, &registry, &scope);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn scanning_twice_yields_identical_results() {
        let blocks = parse(r#"resource "aws_s3_bucket" "a" {}"#);
        let scope = build_scope(&blocks);
        let mut registry = CheckRegistry::new();
        registry.register(Check::new(
            "TEST002",
            "d",
            Provider::General,
            vec![],
            vec![],
            Box::new(|check, block, _| vec![Finding::new(check.code.clone(), "d", Severity::Info, "m", block.range)]),
        ));

        let first = scan(&blocks, &registry, &scope);
        let second = scan(&blocks, &registry, &scope);
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].rule_id, second[0].rule_id);
        assert_eq!(first[0].range, second[0].range);
    }
}
