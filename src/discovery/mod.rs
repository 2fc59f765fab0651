//! Walks the directory tree, applying the filter policy to prune excluded
//! directories early and select files for inclusion.

use crate::cancellation::CancellationToken;
use crate::core_types::{Outcome, ScanResult, SelectedFile, Skip, SkipReason};
use crate::errors::{Error, Result};
use crate::filtering::{Decision, FilterPolicy};
use crate::progress::ProgressReporter;
use log::{debug, trace, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Walks `root` and returns every file accepted by `policy`.
///
/// The traversal is depth-first with per-directory name ordering, and the
/// returned selection is sorted lexicographically by relative path, so
/// repeated runs on an unchanged tree and policy yield identical sequences.
///
/// Directories the policy decides to prune are skipped without being opened;
/// none of their descendants appear in either the selection or the skip
/// list. A subdirectory that cannot be opened is recorded as skipped
/// (`PermissionDenied` or `Unreadable`) and the walk continues with its
/// siblings.
///
/// `output_guard`, when given, names the output document's own path; it is
/// excluded from the selection explicitly so a document living inside the
/// scanned root can never include itself.
///
/// The token is checked at each directory boundary. When it is observed set,
/// the walk stops and returns everything discovered so far with
/// [`Outcome::Cancelled`].
///
/// # Errors
/// Fails fast with [`Error::DirectoryNotFound`] or [`Error::NotReadable`] if
/// `root` is missing, not a directory, or cannot be opened. No traversal
/// happens in that case.
pub fn walk(
    root: &Path,
    policy: &FilterPolicy,
    token: &CancellationToken,
    output_guard: Option<&Path>,
    progress: Option<&dyn ProgressReporter>,
) -> Result<ScanResult> {
    let root = validate_root(root)?;
    let output_guard = output_guard.map(|p| p.canonicalize().unwrap_or_else(|_| p.to_path_buf()));

    let mut files: Vec<SelectedFile> = Vec::new();
    let mut skipped: Vec<Skip> = Vec::new();
    let mut outcome = Outcome::Completed;

    // Depth-first via an explicit stack. Directories are pushed in reverse
    // name order so they pop in ascending order.
    let mut pending: Vec<PathBuf> = vec![root.clone()];

    while let Some(dir) = pending.pop() {
        if token.is_cancelled() {
            debug!("Cancellation observed at directory boundary, stopping walk.");
            outcome = Outcome::Cancelled;
            break;
        }

        let rel_dir = dir.strip_prefix(&root).unwrap_or(&dir);
        if let Some(p) = progress {
            p.set_message(format!("Scanning {}", rel_dir.display()));
        }
        trace!("Reading directory: {}", dir.display());

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot read directory '{}': {}", dir.display(), e);
                skipped.push(Skip {
                    path: rel_dir.to_path_buf(),
                    reason: skip_reason_for(&e),
                });
                continue;
            }
        };

        let mut children: Vec<fs::DirEntry> = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => children.push(entry),
                Err(e) => {
                    warn!("Error listing '{}': {}", dir.display(), e);
                    skipped.push(Skip {
                        path: rel_dir.to_path_buf(),
                        reason: skip_reason_for(&e),
                    });
                }
            }
        }
        children.sort_by_key(|entry| entry.file_name());

        let mut subdirs: Vec<PathBuf> = Vec::new();
        for entry in children {
            let absolute_path = entry.path();
            let relative_path = match absolute_path.strip_prefix(&root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => {
                    warn!(
                        "Entry '{}' is not under root, skipping.",
                        absolute_path.display()
                    );
                    continue;
                }
            };

            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(e) => {
                    warn!(
                        "Cannot stat entry '{}': {}",
                        absolute_path.display(),
                        e
                    );
                    skipped.push(Skip {
                        path: relative_path,
                        reason: skip_reason_for(&e),
                    });
                    continue;
                }
            };

            if file_type.is_dir() {
                match policy.decide(&relative_path, true) {
                    Decision::PruneDirectory => {
                        debug!("Pruning directory: {}", relative_path.display());
                    }
                    _ => subdirs.push(absolute_path),
                }
            } else {
                if let Some(guard) = &output_guard {
                    if &absolute_path == guard {
                        debug!("Excluding the output document from its own scan.");
                        continue;
                    }
                }
                if policy.decide(&relative_path, false) == Decision::Include {
                    trace!("Selected: {}", relative_path.display());
                    files.push(SelectedFile {
                        absolute_path,
                        relative_path,
                    });
                }
            }
        }

        // Reverse so the stack pops subdirectories in name order.
        pending.extend(subdirs.into_iter().rev());
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    debug!(
        "Scan finished: {} files selected, {} entries skipped, outcome {:?}.",
        files.len(),
        skipped.len(),
        outcome
    );
    Ok(ScanResult {
        files,
        skipped,
        outcome,
    })
}

/// Fails fast if the root is missing, not a directory, or unreadable.
fn validate_root(root: &Path) -> Result<PathBuf> {
    let meta = fs::metadata(root).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::DirectoryNotFound(root.to_path_buf()),
        _ => Error::NotReadable {
            path: root.to_path_buf(),
            source: e,
        },
    })?;
    if !meta.is_dir() {
        return Err(Error::DirectoryNotFound(root.to_path_buf()));
    }
    // Probe readability before any traversal.
    fs::read_dir(root).map_err(|e| Error::NotReadable {
        path: root.to_path_buf(),
        source: e,
    })?;
    root.canonicalize().map_err(|e| Error::NotReadable {
        path: root.to_path_buf(),
        source: e,
    })
}

fn skip_reason_for(e: &std::io::Error) -> SkipReason {
    if e.kind() == ErrorKind::PermissionDenied {
        SkipReason::PermissionDenied
    } else {
        SkipReason::Unreadable
    }
}
