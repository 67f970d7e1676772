//! Grounded on tfsec's `formatters/json.go`: a `{"results": [...]}`
//! envelope, pretty-printed.

use serde::Serialize;
use std::io::{self, Write};
use tsec_scanner::{Finding, Severity};

/// Wire shape fixed by spec.md §6, distinct from `Finding`'s in-memory
/// `Span`-based `range`, which carries byte offsets the CLI contract
/// doesn't expose.
#[derive(Serialize)]
struct Location<'a> {
    filename: Option<&'a str>,
    start_line: u32,
    start_column: u32,
    end_line: u32,
    end_column: u32,
}

#[derive(Serialize)]
struct FindingView<'a> {
    rule_id: &'a str,
    description: &'a str,
    severity: Severity,
    message: &'a str,
    location: Location<'a>,
}

impl<'a> From<&'a Finding> for FindingView<'a> {
    fn from(finding: &'a Finding) -> Self {
        Self {
            rule_id: &finding.rule_id,
            description: &finding.description,
            severity: finding.severity,
            message: &finding.message,
            location: Location {
                filename: finding.filename.as_deref(),
                start_line: finding.range.start.line,
                start_column: finding.range.start.column,
                end_line: finding.range.end.line,
                end_column: finding.range.end.column,
            },
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    results: Vec<FindingView<'a>>,
}

pub fn format_json(out: &mut impl Write, findings: &[Finding]) -> io::Result<()> {
    let payload = JsonOutput {
        results: findings.iter().map(FindingView::from).collect(),
    };
    let text = serde_json::to_string_pretty(&payload).map_err(io::Error::other)?;
    writeln!(out, "{text}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsec_compiler::utils::Span;
    use tsec_scanner::Severity;

    #[test]
    fn envelope_is_a_results_array() {
        let findings = vec![Finding::new("AWS006", "d", Severity::Warning, "m", Span::dummy())];
        let mut buf = Vec::new();
        format_json(&mut buf, &findings).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value["results"].is_array());
        assert_eq!(value["results"][0]["rule_id"], "AWS006");
    }
}
