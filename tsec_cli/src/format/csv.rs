//! CSV sibling to the JSON formatter (SPEC_FULL.md §6 supplement),
//! one row per finding, no external CSV crate needed for a fixed,
//! quote-escaped column set this small.

use std::io::{self, Write};
use tsec_scanner::Finding;

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn format_csv(out: &mut impl Write, findings: &[Finding]) -> io::Result<()> {
    writeln!(out, "rule_id,severity,filename,start_line,start_column,message")?;
    for finding in findings {
        writeln!(
            out,
            "{},{:?},{},{},{},{}",
            escape(&finding.rule_id),
            finding.severity,
            escape(finding.filename.as_deref().unwrap_or("")),
            finding.range.start.line,
            finding.range.start.column,
            escape(&finding.message),
        )?;
    }
    Ok(())
}
