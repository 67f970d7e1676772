//! `azurerm_data_lake_store` with encryption explicitly disabled (AZU001).
//!
//! Grounded on tfsec's `azurerm_unencrypted_data_lake_store_test.go`:
//! flag only when `encryption_state` is explicitly `"Disabled"`; an
//! absent attribute means Azure's own default (enabled) applies, unlike
//! the KMS/shielded-nodes checks where absence itself is the finding.

use tsec_scanner::{Check, Finding, Provider, Severity};

const CODE: &str = "AZU001";
const DESCRIPTION: &str = "A Data Lake Store has encryption explicitly disabled.";

pub fn unencrypted_data_lake_store() -> Check {
    Check::new(
        CODE,
        DESCRIPTION,
        Provider::Azure,
        vec!["resource"],
        vec!["azurerm_data_lake_store"],
        Box::new(|_check, block, ctx| {
            let Some(attr) = block.attribute("encryption_state") else { return vec![] };
            if !ctx.evaluate(attr).equals("Disabled") {
                return vec![];
            }
            vec![Finding::new(
                CODE,
                DESCRIPTION,
                Severity::Error,
                format!("Resource '{}' has encryption disabled.", block.name()),
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
        registry.register(unencrypted_data_lake_store());
        tsec_scanner::scan_source(src, &registry)
    }

    #[test]
    fn flags_explicit_disabled() {
        let findings = scan(r#"resource "azurerm_data_lake_store" "my-lake-store" { encryption_state = "Disabled" }"#);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn explicit_enabled_is_not_flagged() {
        let findings = scan(r#"resource "azurerm_data_lake_store" "my-lake-store" { encryption_state = "Enabled" }"#);
        assert!(findings.is_empty());
    }

    #[test]
    fn absent_attribute_is_not_flagged() {
        let findings = scan(r#"resource "azurerm_data_lake_store" "my-lake-store" {}"#);
        assert!(findings.is_empty());
    }
}
