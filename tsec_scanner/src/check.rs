//! The rule / `Check` descriptor (spec.md §3, §4.7).

use crate::context::Context;
use crate::results::Finding;
use serde::{Deserialize, Serialize};
use tsec_compiler::grammar::Block;

/// Coarse cloud-vendor grouping tag (spec.md §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    Aws,
    Azure,
    Gcp,
    General,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Aws => "AWS",
            Provider::Azure => "Azure",
            Provider::Gcp => "GCP",
            Provider::General => "General",
        }
    }
}

/// A rule's predicate: a pure function of (check, block, context) to a
/// list of findings. Stored as a boxed closure inside the descriptor,
/// no runtime introspection needed (spec.md §9).
pub type Predicate = Box<dyn Fn(&Check, &Block, &Context) -> Vec<Finding> + Send + Sync>;

/// A registered rule descriptor (spec.md §3).
pub struct Check {
    pub code: String,
    pub description: String,
    pub provider: Provider,
    pub required_types: Vec<String>,
    pub required_labels: Vec<String>,
    predicate: Predicate,
}

impl Check {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        provider: Provider,
        required_types: Vec<&str>,
        required_labels: Vec<&str>,
        predicate: Predicate,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            provider,
            required_types: required_types.into_iter().map(String::from).collect(),
            required_labels: required_labels.into_iter().map(String::from).collect(),
            predicate,
        }
    }

    /// True if this check applies to `block` at all, per spec.md §4.6
    /// steps 1-2: type gate, then first-label gate.
    pub fn applies_to(&self, block: &Block) -> bool {
        if !self.required_types.is_empty() && !self.required_types.iter().any(|t| t == &block.block_type) {
            return false;
        }
        if !self.required_labels.is_empty() {
            let Some(first) = block.first_label() else { return false };
            if !self.required_labels.iter().any(|l| l == first) {
                return false;
            }
        }
        true
    }

    pub fn evaluate(&self, block: &Block, ctx: &Context) -> Vec<Finding> {
        (self.predicate)(self, block, ctx)
    }
}
