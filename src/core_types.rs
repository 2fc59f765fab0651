//! Defines core data structures used throughout the scan/combine pipeline.

use std::path::PathBuf;

/// A file accepted by the filter policy during the scan phase.
///
/// Values are created and consumed within a single run; there is no cross-run
/// caching. The selection order returned by the walker is lexicographic by
/// `relative_path`, so repeated runs on an unchanged tree produce identical
/// sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// The absolute path to the file on the filesystem.
    pub absolute_path: PathBuf,
    /// The path relative to the scan root, used in output headers.
    pub relative_path: PathBuf,
}

/// Why an entry was skipped without aborting the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry could not be opened due to filesystem permissions.
    PermissionDenied,
    /// The entry could not be read for another I/O reason (e.g. broken link).
    Unreadable,
    /// The file's content is not valid UTF-8 text.
    DecodeError,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::PermissionDenied => write!(f, "permission denied"),
            SkipReason::Unreadable => write!(f, "unreadable"),
            SkipReason::DecodeError => write!(f, "not valid UTF-8"),
        }
    }
}

/// A skipped entry and the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skip {
    /// Path relative to the scan root.
    pub path: PathBuf,
    /// Why the entry was skipped.
    pub reason: SkipReason,
}

/// How a run ended.
///
/// Cancellation is cooperative and lossy-safe: work completed before the
/// token was observed is preserved in the result, so `Cancelled` is a
/// distinct terminal outcome rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation ran to the end of its input.
    Completed,
    /// The cancellation token was observed set; the result is partial.
    Cancelled,
}

impl Outcome {
    /// Returns `true` if the operation was cancelled before finishing.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}

/// The result of the scan phase.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Accepted files, sorted lexicographically by relative path.
    pub files: Vec<SelectedFile>,
    /// Entries that could not be inspected, in discovery order.
    pub skipped: Vec<Skip>,
    /// Whether the scan completed or was cancelled.
    pub outcome: Outcome,
}

/// The result of the combine phase.
#[derive(Debug, Clone)]
pub struct CombineResult {
    /// Number of files whose content was written to the sink.
    pub files_written: usize,
    /// Total characters written (Unicode scalar values, not bytes),
    /// including headers and fences.
    pub total_characters: usize,
    /// Files that were skipped instead of written, in input order.
    pub skipped: Vec<Skip>,
    /// Whether the combine completed or was cancelled.
    pub outcome: Outcome,
}
