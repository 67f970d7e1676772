//! The concrete rule set scanned against every document (spec.md §3, §9).
//!
//! Owns the process-wide [`CheckRegistry`] singleton so `tsec_scanner`
//! itself stays generic over what rules exist; this crate depends on
//! `tsec_scanner`, never the other way around, which is what keeps
//! `registry()` out of `tsec_scanner` despite it being the natural home
//! for a "the" registry.

mod aws;
mod azure;
mod gcp;
mod general;

use std::sync::OnceLock;
use tsec_scanner::CheckRegistry;

static REGISTRY: OnceLock<CheckRegistry> = OnceLock::new();

/// The process-wide registry of every concrete check, built once and
/// shared for the remainder of the run (spec.md §4.5).
pub fn registry() -> &'static CheckRegistry {
    REGISTRY.get_or_init(|| {
        let mut registry = CheckRegistry::new();
        aws::register_all(&mut registry);
        azure::register_all(&mut registry);
        gcp::register_all(&mut registry);
        general::register_all(&mut registry);
        registry
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contains_every_provider() {
        let checks = registry().all_checks();
        assert!(checks.iter().any(|c| c.provider == tsec_scanner::Provider::Aws));
        assert!(checks.iter().any(|c| c.provider == tsec_scanner::Provider::Azure));
        assert!(checks.iter().any(|c| c.provider == tsec_scanner::Provider::Gcp));
        assert!(checks.iter().any(|c| c.provider == tsec_scanner::Provider::General));
    }

    #[test]
    fn registry_is_idempotent_across_calls() {
        let first_len = registry().all_checks().len();
        let second_len = registry().all_checks().len();
        assert_eq!(first_len, second_len);
    }
}
