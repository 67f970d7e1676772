mod kms_auto_rotate;
mod open_security_group_rules;
mod plain_http;

use tsec_scanner::CheckRegistry;

pub fn register_all(registry: &mut CheckRegistry) {
    registry.register(plain_http::plain_http());
    registry.register(open_security_group_rules::open_ingress());
    registry.register(open_security_group_rules::open_egress());
    registry.register(kms_auto_rotate::no_auto_rotate());
}
