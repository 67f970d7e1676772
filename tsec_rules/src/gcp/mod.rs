mod shielded_nodes;

use tsec_scanner::CheckRegistry;

pub fn register_all(registry: &mut CheckRegistry) {
    registry.register(shielded_nodes::shielded_nodes_disabled());
}
