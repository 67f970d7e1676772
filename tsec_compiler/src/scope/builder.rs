use super::Scope;
use crate::grammar::ast::Block;
use crate::log_debug;

/// Pre-scan the (virtual, possibly multi-file) top-level block list and
/// build the `Scope` those blocks are evaluated against (spec.md §3).
///
/// Only top-level blocks contribute bindings; `variable`/`locals`
/// blocks nested inside a `resource` aren't part of this language's
/// supported subset.
pub fn build(blocks: &[Block]) -> Scope {
    let mut scope = Scope::new();

    for block in blocks {
        match block.block_type.as_str() {
            "variable" => {
                let Some(name) = block.first_label() else { continue };
                if let Some(default) = block.attribute("default") {
                    scope
                        .bindings
                        .insert(("var".to_string(), name.to_string()), default.expr.clone());
                }
            }
            "locals" => {
                for attr in &block.attributes {
                    scope
                        .bindings
                        .insert(("local".to_string(), attr.name.clone()), attr.expr.clone());
                }
            }
            "resource" | "data" => {
                if let (Some(ty), Some(name)) = (block.first_label(), block.labels.get(1)) {
                    scope.placeholders.insert((ty.to_string(), name.clone()));
                }
            }
            _ => {}
        }
    }

    log_debug!("scope built",
        "bindings" => scope.bindings.len(),
        "placeholders" => scope.placeholders.len());
    scope
}
