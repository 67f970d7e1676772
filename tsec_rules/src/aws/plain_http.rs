//! `aws_alb_listener` using plain HTTP without a redirect to HTTPS (AWS004).
//!
//! Grounded on tfsec's `aws_http_test.go` (the check source itself isn't
//! in the retrieved source tree, so its behavior is reconstructed from
//! the test table): flag a listener whose `protocol` is `"HTTP"` or
//! unset, UNLESS it has a `default_action { redirect { protocol = "HTTPS" } }`
//! child, that's an explicit upgrade path, not an open listener.

use tsec_scanner::{Check, Context, Finding, Provider, Severity};

const CODE: &str = "AWS004";
const DESCRIPTION: &str = "An ALB listener is using plain HTTP instead of HTTPS.";

fn redirects_to_https(block: &tsec_compiler::grammar::Block, ctx: &Context) -> bool {
    block.children_of_type("default_action").any(|action| {
        action.children_of_type("redirect").any(|redirect| {
            redirect
                .attribute("protocol")
                .map(|attr| ctx.evaluate(attr).equals("HTTPS"))
                .unwrap_or(false)
        })
    })
}

pub fn plain_http() -> Check {
    Check::new(
        CODE,
        DESCRIPTION,
        Provider::Aws,
        vec!["resource"],
        vec!["aws_alb_listener"],
        Box::new(|_check, block, ctx| {
            let is_http = match block.attribute("protocol") {
                Some(attr) => ctx.evaluate(attr).equals("HTTP"),
                None => true,
            };
            if !is_http || redirects_to_https(block, ctx) {
                return vec![];
            }
            vec![Finding::new(
                CODE,
                DESCRIPTION,
                Severity::Error,
                format!("Resource '{}' uses plain HTTP rather than HTTPS.", block.name()),
                block.range,
            )]
        }),
    )
}
