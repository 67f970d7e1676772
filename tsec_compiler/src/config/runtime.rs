//! Runtime options controlling a single scan.

/// Options threaded through `scan_source`/`scan_paths`.
///
/// Mirrors the shape of the teacher's `ReferenceValidationPreferences`:
/// a small struct of booleans the driver consults, constructed once per
/// scan and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Recurse into subdirectories when scanning a path (driver-level;
    /// core scanning itself never touches the filesystem).
    pub recursive: bool,
    /// File extension(s) considered source files when walking a directory.
    pub extensions: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            extensions: vec!["tsec".to_string(), "tf".to_string()],
        }
    }
}
