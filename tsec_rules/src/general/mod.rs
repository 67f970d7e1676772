mod hardcoded_password;

use tsec_scanner::CheckRegistry;

pub fn register_all(registry: &mut CheckRegistry) {
    registry.register(hardcoded_password::hardcoded_password());
}
