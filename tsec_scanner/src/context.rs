//! Evaluation context threaded through every rule predicate (spec.md §4.7).

use tsec_compiler::evaluator::eval;
use tsec_compiler::grammar::{Attribute, Block};
use tsec_compiler::scope::Scope;
use tsec_compiler::value::Value;

/// Holds the scope for the current scan and a reference to the full,
/// merged block list, so predicates can do cross-reference queries
/// beyond their own block (spec.md §4.6, §4.7).
pub struct Context<'a> {
    scope: &'a Scope,
    blocks: &'a [Block],
}

impl<'a> Context<'a> {
    pub fn new(scope: &'a Scope, blocks: &'a [Block]) -> Self {
        Self { scope, blocks }
    }

    /// Resolve an attribute's expression to a value.
    pub fn evaluate(&self, attr: &Attribute) -> Value {
        eval(&attr.expr, self.scope)
    }

    /// Every top-level block in the (possibly multi-file) document.
    pub fn all_blocks(&self) -> &[Block] {
        self.blocks
    }

    /// Find a top-level `variable "NAME" { ... }` block by name, lets a
    /// predicate walk straight to the declaration instead of only its
    /// resolved value, e.g. to report against the variable's own range.
    pub fn find_variable(&self, name: &str) -> Option<&Block> {
        self.blocks
            .iter()
            .find(|b| b.block_type == "variable" && b.first_label() == Some(name))
    }
}
