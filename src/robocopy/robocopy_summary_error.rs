use std::path::PathBuf;
use thiserror::Error;

/// Hard failures when parsing a robocopy log summary.
///
/// Missing or malformed header/footer sections are not errors; those degrade
/// to empty fields on the summary instead.
#[derive(Debug, Error)]
pub enum RobocopySummaryError {
    /// The log path does not exist or is not a regular file.
    #[error("robocopy log not found or not a regular file: {}", path.display())]
    InvalidPath { path: PathBuf },

    /// The log file exists but could not be read.
    #[error("failed to read robocopy log {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
