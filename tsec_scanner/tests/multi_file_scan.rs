//! Exercises the driver's multi-file merge behavior (spec.md §4.8): a
//! variable declared in one file must be visible when referenced from
//! another.

use std::io::Write;
use tsec_scanner::{Check, CheckRegistry, Finding, Provider, Severity};

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn variable_declared_in_one_file_resolves_from_another() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(
        &dir,
        "a.tsec",
        r#"resource "aws_security_group_rule" "r" {
            type = "ingress"
            cidr_blocks = var.blocks
        }"#,
    );
    let b = write_file(&dir, "b.tsec", r#"variable "blocks" { default = ["0.0.0.0/0"] }"#);

    let mut registry = CheckRegistry::new();
    registry.register(Check::new(
        "OPENINGRESS",
        "flags fully open ingress cidrs",
        Provider::Aws,
        vec!["resource"],
        vec!["aws_security_group_rule"],
        Box::new(|check, block, ctx| {
            let Some(attr) = block.attribute("cidr_blocks") else { return vec![] };
            let value = ctx.evaluate(attr);
            if value.contains(|v| v.ends_with("/0")) {
                vec![Finding::new(check.code.clone(), &check.description, Severity::Warning, "open to the world", attr.range)]
            } else {
                vec![]
            }
        }),
    ));

    let findings = tsec_scanner::scan_paths(&[a, b], &registry);
    let warnings: Vec<&Finding> = findings.iter().filter(|f| f.rule_id == "OPENINGRESS").collect();
    assert_eq!(warnings.len(), 1);
}
