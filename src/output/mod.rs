//! Streams selected files into the output document.
//!
//! The combiner consumes the walker's selection in its given order, reads
//! each file as text, and writes one labeled fenced block per file with a
//! blank separator line between entries. Per-file failures (unreadable,
//! not valid UTF-8) are recorded as skips and never abort the run; sink
//! failures are fatal.

mod file_block;
pub mod language;

pub use file_block::render_file_block;

use crate::cancellation::CancellationToken;
use crate::core_types::{CombineResult, Outcome, SelectedFile, Skip, SkipReason};
use crate::errors::{Error, Result};
use crate::estimator::SizeEstimator;
use crate::progress::ProgressReporter;
use log::{debug, warn};
use std::fs;
use std::io::{ErrorKind, Write};

/// Writes the selected files to `writer` as one combined document.
///
/// Files are processed in the order given. Characters written (headers and
/// fences included) are accumulated into `estimator` as they are produced,
/// so an observing thread can watch the document grow. The token is checked
/// after each file, never mid-file; when it is observed set the partial
/// [`CombineResult`] is returned with [`Outcome::Cancelled`].
///
/// Source files are never modified; the writer is exclusively owned by this
/// call for the duration of the run.
///
/// # Errors
/// Returns [`Error::WriteFailure`] if the sink rejects a write. Everything
/// already written stays written; there is no rollback.
pub fn combine<W: Write>(
    files: &[SelectedFile],
    writer: &mut W,
    estimator: &SizeEstimator,
    token: &CancellationToken,
    progress: Option<&dyn ProgressReporter>,
) -> Result<CombineResult> {
    if let Some(p) = progress {
        p.set_length(files.len() as u64);
    }

    let mut files_written = 0usize;
    let mut total_characters = 0usize;
    let mut skipped: Vec<Skip> = Vec::new();
    let mut outcome = Outcome::Completed;

    for (index, file) in files.iter().enumerate() {
        if let Some(p) = progress {
            p.set_position(index as u64 + 1);
            p.set_message(file.relative_path.display().to_string());
        }

        let bytes = match fs::read(&file.absolute_path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(
                    "Skipping unreadable file '{}': {}",
                    file.relative_path.display(),
                    e
                );
                skipped.push(Skip {
                    path: file.relative_path.clone(),
                    reason: if e.kind() == ErrorKind::PermissionDenied {
                        SkipReason::PermissionDenied
                    } else {
                        SkipReason::Unreadable
                    },
                });
                continue;
            }
        };
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(_) => {
                debug!(
                    "Skipping non-text file '{}'",
                    file.relative_path.display()
                );
                skipped.push(Skip {
                    path: file.relative_path.clone(),
                    reason: SkipReason::DecodeError,
                });
                continue;
            }
        };

        let mut chunk = String::new();
        if files_written > 0 {
            chunk.push('\n'); // blank separator line before every entry but the first
        }
        chunk.push_str(&render_file_block(&file.relative_path, &content));

        writer
            .write_all(chunk.as_bytes())
            .map_err(Error::WriteFailure)?;
        // Totals are in characters, not bytes; they only differ for
        // multibyte content.
        let chunk_characters = chunk.chars().count();
        estimator.accumulate(chunk_characters);
        total_characters += chunk_characters;
        files_written += 1;

        if token.is_cancelled() {
            debug!("Cancellation observed at file boundary, stopping combine.");
            outcome = Outcome::Cancelled;
            break;
        }
    }

    writer.flush().map_err(Error::WriteFailure)?;
    debug!(
        "Combine finished: {} files, {} characters, {} skipped, outcome {:?}.",
        files_written,
        total_characters,
        skipped.len(),
        outcome
    );
    Ok(CombineResult {
        files_written,
        total_characters,
        skipped,
        outcome,
    })
}
