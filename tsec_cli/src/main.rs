//! Illustrative CLI front-end over `tsec_scanner`/`tsec_rules` (spec.md
//! §6, explicitly "illustrative; not core"). Grounded on the teacher's
//! `esp_scanner_sdk` binary for overall shape (logging init up front,
//! single/directory dispatch, summary line at the end) but driven by
//! `clap` derive rather than hand-rolled `env::args()` parsing, per the
//! teacher's own declared-but-unused `clap` dependency.

mod format;

use clap::Parser;
use format::Format;
use std::path::PathBuf;
use std::process::ExitCode;
use tsec_compiler::config::ScanOptions;
use tsec_compiler::{log_error, log_info};
use tsec_scanner::Severity;

#[derive(Parser)]
#[command(name = "tsec", about = "Static security scanner for tsec configuration files")]
struct Cli {
    /// Directory (or single file) to scan. Defaults to the current directory.
    path: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Default)]
    format: Format,

    #[arg(long)]
    no_color: bool,

    #[arg(short, long)]
    quiet: bool,

    /// Don't recurse into subdirectories.
    #[arg(long)]
    no_recursive: bool,
}

const PARSE_ERROR_CODE: &str = "PARSE000";
const IO_ERROR_CODE: &str = "IO000";

fn main() -> ExitCode {
    let cli = Cli::parse();
    let target = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));

    if !cli.quiet {
        log_info!(&format!("scanning {}", target.display()));
    }

    let registry = tsec_rules::registry();
    let findings = if target.is_file() {
        tsec_scanner::scan_paths(&[target.clone()], registry)
    } else {
        let options = ScanOptions {
            recursive: !cli.no_recursive,
            ..ScanOptions::default()
        };
        tsec_scanner::scan_directory(&target, &options, registry)
    };

    let mut stdout = std::io::stdout();
    if let Err(err) = format::write(cli.format, &findings, &mut stdout, !cli.no_color) {
        log_error!("CLI001", &format!("failed to write results: {err}"));
        return ExitCode::from(2);
    }

    exit_code(&findings)
}

fn exit_code(findings: &[tsec_scanner::Finding]) -> ExitCode {
    let internal_error = findings.iter().any(|f| f.rule_id == PARSE_ERROR_CODE || f.rule_id == IO_ERROR_CODE);
    if internal_error {
        return ExitCode::from(2);
    }
    let has_finding = findings.iter().any(|f| matches!(f.severity, Severity::Error | Severity::Warning));
    if has_finding {
        ExitCode::from(1)
    } else {
        ExitCode::from(0)
    }
}
