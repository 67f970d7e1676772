//! The process-wide check registry (spec.md §4.5).
//!
//! Populated once during initialization (by `tsec_rules::registry()`,
//! the crate that owns the concrete rule set) and read-only thereafter.
//! Registration is a single-threaded explicit call list rather than
//! ctor/inventory-macro side effects (spec.md §9): whichever crate
//! assembles the final rule set builds one of these directly.

use crate::check::Check;
use std::collections::HashSet;

pub struct CheckRegistry {
    checks: Vec<Check>,
    codes: HashSet<String>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            codes: HashSet::new(),
        }
    }

    /// Register a check. Duplicate codes are a programmer error and
    /// panic immediately; this only ever runs during process
    /// initialization, never mid-scan (spec.md §4.5, §8).
    pub fn register(&mut self, check: Check) {
        if !self.codes.insert(check.code.clone()) {
            panic!("duplicate check code registered: {}", check.code);
        }
        self.checks.push(check);
    }

    /// A snapshot of all registered checks, sorted by code for
    /// deterministic iteration independent of registration order
    /// (SPEC_FULL.md §4.5 supplement).
    pub fn all_checks(&self) -> Vec<&Check> {
        let mut checks: Vec<&Check> = self.checks.iter().collect();
        checks.sort_by(|a, b| a.code.cmp(&b.code));
        checks
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}
