//! `google_container_cluster` without shielded nodes (GCP001).
//!
//! Grounded on tfsec's `gke_shielded_nodes_disabled_test.go`: flag a
//! GKE cluster whenever `enable_shielded_nodes` is absent or resolves
//! to `false`, including the quoted-string form used in the test table
//! (`enable_shielded_nodes = "false"`).

use tsec_scanner::{Check, Finding, Provider, Severity};

const CODE: &str = "GCP001";
const DESCRIPTION: &str = "A GKE cluster does not have shielded nodes enabled.";

pub fn shielded_nodes_disabled() -> Check {
    Check::new(
        CODE,
        DESCRIPTION,
        Provider::Gcp,
        vec!["resource"],
        vec!["google_container_cluster"],
        Box::new(|_check, block, ctx| {
            let shielded = match block.attribute("enable_shielded_nodes") {
                Some(attr) => ctx.evaluate(attr).is_true(),
                None => false,
            };
            if shielded {
                return vec![];
            }
            vec![Finding::new(
                CODE,
                DESCRIPTION,
                Severity::Warning,
                format!("Resource '{}' does not have shielded GKE nodes enabled.", block.name()),
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
        registry.register(shielded_nodes_disabled());
        tsec_scanner::scan_source(src, &registry)
    }

    #[test]
    fn flags_quoted_false() {
        let findings = scan(r#"resource "google_container_cluster" "gke" { enable_shielded_nodes = "false" }"#);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn flags_missing_attribute() {
        assert_eq!(scan(r#"resource "google_container_cluster" "gke" {}"#).len(), 1);
    }

    #[test]
    fn quoted_true_is_not_flagged() {
        let findings = scan(r#"resource "google_container_cluster" "gke" { enable_shielded_nodes = "true" }"#);
        assert!(findings.is_empty());
    }
}
