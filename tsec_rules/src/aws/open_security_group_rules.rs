//! `aws_security_group_rule` ingress/egress openness (AWS006/AWS007).
//!
//! Grounded on tfsec's `checks/aws_open_security_group_rules.go`: gate on
//! the `type` attribute (`"ingress"` / `"egress"`), then flag any
//! `cidr_blocks`/`ipv6_cidr_blocks` entry ending in `/0`. AWS007 mirrors
//! AWS006 for the egress direction (SPEC_FULL.md supplement; the
//! original registers both from the same file).

use tsec_compiler::grammar::{Attribute, Block};
use tsec_scanner::{Check, Context, Finding, Provider, Severity};

const INGRESS_CODE: &str = "AWS006";
const INGRESS_DESC: &str = "An ingress security group rule allows traffic from `/0`.";
const EGRESS_CODE: &str = "AWS007";
const EGRESS_DESC: &str = "An egress security group rule allows traffic to `/0`.";

fn fully_open_cidr<'a>(attr: &'a Attribute, ctx: &Context) -> Option<&'a Attribute> {
    let value = ctx.evaluate(attr);
    if value.contains(|v| v.ends_with("/0")) {
        Some(attr)
    } else {
        None
    }
}

fn open_rule_finding(code: &str, description: &str, block: &Block, attr: &Attribute, direction: &str) -> Finding {
    Finding::new(
        code,
        description,
        Severity::Warning,
        format!("Resource '{}' defines a fully open {direction} security group rule.", block.name()),
        attr.range,
    )
}

pub fn open_ingress() -> Check {
    Check::new(
        INGRESS_CODE,
        INGRESS_DESC,
        Provider::Aws,
        vec!["resource"],
        vec!["aws_security_group_rule"],
        Box::new(|_check, block, ctx| {
            let Some(type_attr) = block.attribute("type") else { return vec![] };
            if !ctx.evaluate(type_attr).equals("ingress") {
                return vec![];
            }

            if let Some(attr) = block.attribute("cidr_blocks") {
                if let Some(attr) = fully_open_cidr(attr, ctx) {
                    return vec![open_rule_finding(INGRESS_CODE, INGRESS_DESC, block, attr, "ingress")];
                }
            }
            if let Some(attr) = block.attribute("ipv6_cidr_blocks") {
                if let Some(attr) = fully_open_cidr(attr, ctx) {
                    return vec![open_rule_finding(INGRESS_CODE, INGRESS_DESC, block, attr, "ingress").with_value_range(attr.range)];
                }
            }
            vec![]
        }),
    )
}

pub fn open_egress() -> Check {
    Check::new(
        EGRESS_CODE,
        EGRESS_DESC,
        Provider::Aws,
        vec!["resource"],
        vec!["aws_security_group_rule"],
        Box::new(|_check, block, ctx| {
            let Some(type_attr) = block.attribute("type") else { return vec![] };
            if !ctx.evaluate(type_attr).equals("egress") {
                return vec![];
            }

            if let Some(attr) = block.attribute("cidr_blocks") {
                if let Some(attr) = fully_open_cidr(attr, ctx) {
                    return vec![open_rule_finding(EGRESS_CODE, EGRESS_DESC, block, attr, "egress").with_value_range(attr.range)];
                }
            }
            if let Some(attr) = block.attribute("ipv6_cidr_blocks") {
                if let Some(attr) = fully_open_cidr(attr, ctx) {
                    return vec![open_rule_finding(EGRESS_CODE, EGRESS_DESC, block, attr, "egress").with_value_range(attr.range)];
                }
            }
            vec![]
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsec_scanner::CheckRegistry;

    fn scan(src: &str) -> Vec<Finding> {
        let mut registry = CheckRegistry::new();
        registry.register(open_ingress());
        registry.register(open_egress());
        tsec_scanner::scan_source(src, &registry)
    }

    #[test]
    fn flags_fully_open_ingress_literal_cidr() {
        let src = r#"resource "aws_security_group_rule" "r" {
            type = "ingress"
            cidr_blocks = ["0.0.0.0/0"]
        }"#;
        let findings = scan(src);
        assert!(findings.iter().any(|f| f.rule_id == INGRESS_CODE));
    }

    #[test]
    fn narrow_ingress_cidr_is_not_flagged() {
        let src = r#"resource "aws_security_group_rule" "r" {
            type = "ingress"
            cidr_blocks = ["10.0.0.0/16"]
        }"#;
        let findings = scan(src);
        assert!(!findings.iter().any(|f| f.rule_id == INGRESS_CODE));
    }

    #[test]
    fn egress_direction_is_independent_of_ingress() {
        let src = r#"resource "aws_security_group_rule" "r" {
            type = "egress"
            cidr_blocks = ["0.0.0.0/0"]
        }"#;
        let findings = scan(src);
        assert!(findings.iter().any(|f| f.rule_id == EGRESS_CODE));
        assert!(!findings.iter().any(|f| f.rule_id == INGRESS_CODE));
    }
}
