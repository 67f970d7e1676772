//! Accepts source (text or a path set), invokes the parser then the
//! scanner, returns results (spec.md §4.8).

use crate::error::DriverError;
use crate::registry::CheckRegistry;
use crate::results::{Finding, Severity};
use crate::scanner;
use std::path::{Path, PathBuf};
use tsec_compiler::config::ScanOptions;
use tsec_compiler::grammar::Block;
use tsec_compiler::utils::Span;
use tsec_compiler::CompileError;

/// Parse and scan a single in-memory source document.
///
/// Lex/parse errors are non-fatal: they're surfaced as synthetic `Info`
/// findings (spec.md §7) and scanning proceeds over whatever blocks
/// were recovered.
pub fn scan_source(text: &str, registry: &CheckRegistry) -> Vec<Finding> {
    let (blocks, errors) = tsec_compiler::parse_source(text);
    scan_blocks(blocks, errors, registry, None)
}

/// Parse every file in `paths`, merge their top-level blocks into a
/// single virtual document, build one scope across that document (so
/// `var.x` declared in one file is visible from another), then scan.
///
/// A file that can't be read is recorded as a synthetic `Info` finding
/// and skipped; it does not abort the scan of the remaining files
/// (spec.md §7).
pub fn scan_paths(paths: &[PathBuf], registry: &CheckRegistry) -> Vec<Finding> {
    let mut blocks = Vec::new();
    let mut synthetic = Vec::new();

    for path in paths {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let (file_blocks, errors) = tsec_compiler::parse_source(&text);
                let filename = path.display().to_string();
                for err in errors {
                    synthetic.push(compile_error_finding(&err, Some(filename.clone())));
                }
                blocks.extend(file_blocks);
            }
            Err(source) => {
                let err = DriverError::Io { path: path.clone(), source };
                synthetic.push(io_error_finding(&err));
            }
        }
    }

    let scope = tsec_compiler::scope::build(&blocks);
    let mut findings = scanner::scan(&blocks, registry, &scope);
    findings.extend(synthetic);
    findings
}

/// Convenience wrapper over `scan_paths` that walks a directory
/// collecting files matching `options.extensions` first. Directory
/// traversal itself sits outside the core engine (spec.md §1); this
/// exists purely so the CLI has something to call.
pub fn scan_directory(dir: &Path, options: &ScanOptions, registry: &CheckRegistry) -> Vec<Finding> {
    let mut paths = Vec::new();
    let walker = walkdir::WalkDir::new(dir).max_depth(if options.recursive { usize::MAX } else { 1 });
    for entry in walker.into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let matches_ext = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| options.extensions.iter().any(|e| e == ext))
            .unwrap_or(false);
        if matches_ext {
            paths.push(entry.path().to_path_buf());
        }
    }
    scan_paths(&paths, registry)
}

fn scan_blocks(
    blocks: Vec<Block>,
    errors: Vec<CompileError>,
    registry: &CheckRegistry,
    filename: Option<String>,
) -> Vec<Finding> {
    let scope = tsec_compiler::scope::build(&blocks);
    let mut findings = scanner::scan(&blocks, registry, &scope);
    for err in &errors {
        findings.push(compile_error_finding(err, filename.clone()));
    }
    findings
}

fn compile_error_finding(err: &CompileError, filename: Option<String>) -> Finding {
    let mut finding = Finding::new("PARSE000", "source could not be fully parsed", Severity::Info, err.to_string(), Span::dummy());
    if let Some(filename) = filename {
        finding = finding.with_filename(filename);
    }
    finding
}

fn io_error_finding(err: &DriverError) -> Finding {
    Finding::new("IO000", "source file could not be read", Severity::Info, err.to_string(), Span::dummy())
}
