//! Output formatters (spec.md §6). `Formatter` mirrors tfsec's
//! `formatters.Formatter` type alias (`formatters/formatter.go`): a
//! plain function from results to a writer, not a trait object per
//! format; there's nothing here that needs dynamic dispatch.

mod csv;
mod default;
mod json;

use std::io::{self, Write};
use tsec_scanner::Finding;

pub use self::csv::format_csv;
pub use default::format_default;
pub use json::format_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Default,
    Json,
    Csv,
}

pub fn write(format: Format, findings: &[Finding], out: &mut impl Write, color: bool) -> io::Result<()> {
    match format {
        Format::Default => format_default(out, findings, color),
        Format::Json => format_json(out, findings),
        Format::Csv => format_csv(out, findings),
    }
}
