use std::path::PathBuf;

/// Fatal-for-one-file errors the driver records and continues past
/// (spec.md §7) rather than aborting the whole run.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
