//! Error types for the locator crate.

use std::path::PathBuf;

use slnsync_model::SolutionFormat;

/// Errors that can occur while locating the solution pair.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    /// The directory to scan does not exist.
    #[error("directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The directory does not hold exactly one file of each format.
    #[error(
        "could not find files to sync in {}: found {legacy} .sln and {xml} .slnx file(s), expected exactly one of each",
        .dir.display()
    )]
    NoUniquePair {
        dir: PathBuf,
        legacy: usize,
        xml: usize,
    },

    /// None of the explicit paths is an existing file of the given format.
    #[error("solution file could not be found: no existing .{0} path among the arguments")]
    FileNotFound(SolutionFormat),

    /// Reading the directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for locator results.
pub type LocateResult<T> = Result<T, LocateError>;
