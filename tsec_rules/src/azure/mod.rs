mod data_lake_store_encryption;

use tsec_scanner::CheckRegistry;

pub fn register_all(registry: &mut CheckRegistry) {
    registry.register(data_lake_store_encryption::unencrypted_data_lake_store());
}
