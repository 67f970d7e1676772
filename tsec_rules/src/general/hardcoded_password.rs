//! Hardcoded password-shaped attribute on any resource (GEN001).
//!
//! Unlike the provider-specific checks this carries no `required_types`
//! or `required_labels` gate (spec.md §4.6 treats an empty gate list as
//! "matches everything"); it is provider-agnostic by construction,
//! the SPEC_FULL.md supplement's General-provider exemplar. Loosely
//! grounded on the shape of tfsec's `aws_iam_password_policy_checks.go`
//! (a non-empty literal where a secret doesn't belong), generalized
//! from one resource type to any attribute literally named `password`.

use tsec_scanner::{Check, Finding, Provider, Severity};

const CODE: &str = "GEN001";
const DESCRIPTION: &str = "A resource sets a password to a hardcoded literal value.";

pub fn hardcoded_password() -> Check {
    Check::new(
        CODE,
        DESCRIPTION,
        Provider::General,
        vec![],
        vec![],
        Box::new(|_check, block, ctx| {
            let Some(attr) = block.attribute("password") else { return vec![] };
            let value = ctx.evaluate(attr);
            let Some(text) = value.as_string() else { return vec![] };
            if text.is_empty() {
                return vec![];
            }
            vec![Finding::new(
                CODE,
                DESCRIPTION,
                Severity::Warning,
                format!("Resource '{}' sets 'password' to a hardcoded value.", block.name()),
                attr.range,
            )]
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsec_scanner::CheckRegistry;

    fn scan(src: &str) -> Vec<Finding> {
        let mut registry = CheckRegistry::new();
        registry.register(hardcoded_password());
        tsec_scanner::scan_source(src, &registry)
    }

    #[test]
    fn flags_hardcoded_literal_on_any_resource_type() {
        let findings = scan(r#"resource "azurerm_virtual_machine" "vm" { password = "hunter2" }"#);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn empty_password_is_not_flagged() {
        let findings = scan(r#"resource "azurerm_virtual_machine" "vm" { password = "" }"#);
        assert!(findings.is_empty());
    }

    #[test]
    fn reference_to_a_variable_is_still_flagged_as_a_string() {
        let findings = scan(
            r#"variable "pw" { default = "hunter2" }
               resource "azurerm_virtual_machine" "vm" { password = var.pw }"#,
        );
        assert_eq!(findings.len(), 1);
    }
}
