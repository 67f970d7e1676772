//! `aws_kms_key` without `enable_key_rotation` (or set false) (AWS005).
//!
//! Grounded on tfsec's `aws_no_kms_key_autorotate_test.go`: flag a
//! `aws_kms_key` resource whenever `enable_key_rotation` is absent or
//! resolves to `false` (including the quoted-string form, via
//! `Value::is_false`).

use tsec_scanner::{Check, Finding, Provider, Severity};

const CODE: &str = "AWS005";
const DESCRIPTION: &str = "A KMS key does not have rotation enabled.";

pub fn no_auto_rotate() -> Check {
    Check::new(
        CODE,
        DESCRIPTION,
        Provider::Aws,
        vec!["resource"],
        vec!["aws_kms_key"],
        Box::new(|_check, block, ctx| {
            let rotation_enabled = match block.attribute("enable_key_rotation") {
                Some(attr) => ctx.evaluate(attr).is_true(),
                None => false,
            };
            if rotation_enabled {
                return vec![];
            }
            vec![Finding::new(
                CODE,
                DESCRIPTION,
                Severity::Error,
                format!("Resource '{}' does not have KMS key rotation enabled.", block.name()),
                block.range,
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
        registry.register(no_auto_rotate());
        tsec_scanner::scan_source(src, &registry)
    }

    #[test]
    fn flags_missing_rotation_attribute() {
        assert_eq!(scan(r#"resource "aws_kms_key" "kms_key" {}"#).len(), 1);
    }

    #[test]
    fn flags_rotation_disabled() {
        let findings = scan(r#"resource "aws_kms_key" "kms_key" { enable_key_rotation = false }"#);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn rotation_enabled_is_not_flagged() {
        let findings = scan(r#"resource "aws_kms_key" "kms_key" { enable_key_rotation = true }"#);
        assert!(findings.is_empty());
    }
}
