//! Defines application-specific error types.
//!
//! Fatal failures live in the [`Error`] enum. Per-entry failures that never
//! abort a run (an unreadable subdirectory, a file that is not valid UTF-8)
//! are not errors at all; they are recorded as [`crate::core_types::Skip`]
//! entries on the result. Cancellation is likewise not an error but a
//! terminal [`crate::core_types::Outcome`].

use std::path::PathBuf;
use thiserror::Error;

/// A convenient `Result` alias for fallible `codecat` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that abort a run.
#[derive(Error, Debug)]
pub enum Error {
    /// The root directory does not exist or is not a directory.
    #[error("Directory not found: '{0}'")]
    DirectoryNotFound(PathBuf),

    /// The root directory exists but cannot be opened.
    #[error("Directory not readable: '{path}': {source}")]
    NotReadable {
        /// The directory that could not be opened.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The output sink rejected a write. Always fatal; partial output already
    /// written is not rolled back.
    #[error("Failed to write output: {0}")]
    WriteFailure(#[source] std::io::Error),

    /// Generic error related to invalid configuration settings.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// No files matched the selection criteria.
    #[error("No files found matching the specified criteria.")]
    NoFilesFound,
}
