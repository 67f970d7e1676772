//! Human-readable console output (SPEC_FULL.md §6 supplement). Tfsec's
//! own default formatter colorizes by severity via a terminal-colors
//! crate; `--no-color` disables that here the same way.

use std::io::{self, Write};
use tsec_scanner::{Finding, Severity};

fn severity_label(severity: Severity, color: bool) -> &'static str {
    if !color {
        return match severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        };
    }
    match severity {
        Severity::Error => "\x1b[31mERROR\x1b[0m",
        Severity::Warning => "\x1b[33mWARNING\x1b[0m",
        Severity::Info => "\x1b[36mINFO\x1b[0m",
    }
}

pub fn format_default(out: &mut impl Write, findings: &[Finding], color: bool) -> io::Result<()> {
    if findings.is_empty() {
        return writeln!(out, "No problems detected.");
    }
    for finding in findings {
        let location = finding.filename.as_deref().unwrap_or("<input>");
        writeln!(
            out,
            "{} [{}] {}:{} - {}",
            severity_label(finding.severity, color),
            finding.rule_id,
            location,
            finding.range.start,
            finding.message,
        )?;
    }
    writeln!(out, "\n{} problem(s) detected.", findings.len())
}
