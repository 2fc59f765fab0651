//! `codecat` is a library and command-line tool for selecting source files
//! from a directory tree and concatenating them into a single labeled
//! Markdown document, sized for pasting into an LLM prompt.
//!
//! The library is a three-stage pipeline:
//! 1.  **Scan**: walk the tree, pruning excluded directories early and
//!     selecting files that match the include specs and survive the
//!     gitignore-syntax exclude patterns.
//! 2.  **Estimate**: compute the expected output size so a caller can warn
//!     before writing.
//! 3.  **Combine**: stream each selected file into the output document as a
//!     `## File:` header plus a fenced block.
//!
//! Each stage is usable on its own and runs headlessly; progress reporting
//! and cancellation attach from the outside.
//!
//! # Example
//!
//! ```
//! use codecat::{scan, combine, CancellationToken, ConfigBuilder, SizeEstimator};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp = tempdir().unwrap();
//! fs::write(temp.path().join("main.py"), "print('hi')\n").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .root(temp.path())
//!     .build()
//!     .unwrap();
//! let token = CancellationToken::new();
//!
//! let scanned = scan(&config, &token, None).unwrap();
//! assert_eq!(scanned.files.len(), 1);
//!
//! let mut buffer = Vec::new();
//! let estimator = SizeEstimator::new();
//! let result = combine(&scanned.files, &mut buffer, &estimator, &token, None).unwrap();
//! assert_eq!(result.files_written, 1);
//!
//! let document = String::from_utf8(buffer).unwrap();
//! assert!(document.starts_with("## File: main.py\n```python\n"));
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod estimator;
pub mod filtering;
pub mod matcher;
pub mod output;
pub mod prelude;
pub mod progress;
pub mod signal;

pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder, OutputDestination};
pub use core_types::{CombineResult, Outcome, ScanResult, SelectedFile, Skip, SkipReason};
pub use discovery::walk;
pub use errors::{Error, Result};
pub use estimator::SizeEstimator;
pub use filtering::{Decision, FilterPolicy, IncludeSpecs};
pub use matcher::PatternSet;
pub use output::combine;
pub use progress::ProgressReporter;

use log::debug;
use output::language::language_hint;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The outcome of a full [`run`]: the scan, the combine (absent for dry
/// runs and cancelled scans), and the pre-write size estimate.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The scan phase result, including its skip list.
    pub scan: ScanResult,
    /// The combine phase result; `None` for dry runs and scans that were
    /// cancelled before combining started.
    pub combine: Option<CombineResult>,
    /// The estimated output size in characters, computed after the scan.
    pub estimated_characters: usize,
}

impl RunReport {
    /// Returns `true` if either phase observed the cancellation token.
    pub fn is_cancelled(&self) -> bool {
        self.scan.outcome.is_cancelled()
            || self
                .combine
                .as_ref()
                .is_some_and(|c| c.outcome.is_cancelled())
    }
}

/// Scans the configured root and returns the selected files.
///
/// Builds the immutable [`FilterPolicy`] for this run (include specs,
/// explicit exclude patterns, and the root's `.gitignore` when enabled),
/// then walks the tree. When the output destination is a file, its path is
/// excluded from the selection so the document never includes itself.
pub fn scan(
    config: &Config,
    token: &CancellationToken,
    progress: Option<&dyn ProgressReporter>,
) -> Result<ScanResult> {
    let mut policy = FilterPolicy::new(
        IncludeSpecs::new(&config.include_specs),
        PatternSet::compile(&config.exclude_patterns),
    );
    if config.use_gitignore {
        policy = policy.with_repo_rules(filtering::load_repo_rules(&config.root));
    }

    let guard = match &config.output {
        OutputDestination::File(path) => Some(resolve_output_guard(path)),
        OutputDestination::Stdout => None,
    };

    walk(&config.root, &policy, token, guard.as_deref(), progress)
}

/// Estimates the combined document's size in characters without writing it.
///
/// Sums each file's on-disk size plus the fixed per-file header/fence
/// overhead. The on-disk size is a byte length, so the estimate matches the
/// combined character total exactly for ASCII content and overstates it
/// slightly for multibyte content. Files whose metadata cannot be read
/// contribute zero; estimation is best-effort and read failures are handled
/// properly during combining.
pub fn estimate(files: &[SelectedFile]) -> usize {
    // Per-file frame: "## File: {path}\n```{hint}\n...```\n" plus one
    // separator newline before every entry but the first.
    const FRAME: usize = "## File: \n```\n```\n".len();
    files
        .iter()
        .enumerate()
        .map(|(i, file)| {
            let size = fs::metadata(&file.absolute_path)
                .map(|m| m.len() as usize)
                .unwrap_or(0);
            let rel = file.relative_path.to_string_lossy().replace('\\', "/");
            let hint = language_hint(&file.relative_path);
            size + FRAME + rel.len() + hint.len() + usize::from(i > 0)
        })
        .sum()
}

/// Executes the complete pipeline: scan, estimate, and combine.
///
/// This is the primary entry point mirroring command-line execution. It
/// opens the configured output destination, warns through the log when the
/// estimate exceeds the configured threshold, and handles dry runs. For
/// granular control, or to capture output in memory, call [`scan`] and
/// [`combine`] directly as in the crate-level example.
///
/// # Errors
/// Returns [`Error::NoFilesFound`] when the scan completes with an empty
/// selection. Fatal root and sink errors are propagated; per-entry failures
/// are reported in the skip lists of the returned [`RunReport`].
pub fn run(
    config: &Config,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<RunReport> {
    let progress = progress.as_deref();
    let scan_result = scan(config, token, progress)?;

    if scan_result.outcome.is_cancelled() {
        return Ok(RunReport {
            scan: scan_result,
            combine: None,
            estimated_characters: 0,
        });
    }
    if scan_result.files.is_empty() {
        return Err(Error::NoFilesFound);
    }

    let estimated_characters = estimate(&scan_result.files);
    debug!(
        "Scan selected {} files, estimated {} characters.",
        scan_result.files.len(),
        estimated_characters
    );
    if estimated_characters > config.warn_threshold {
        log::warn!(
            "Estimated output of {} characters exceeds the threshold of {}.",
            estimated_characters,
            config.warn_threshold
        );
    }

    let mut writer = open_writer(&config.output)?;
    let combine_result = if config.dry_run {
        write_dry_run(&mut writer, &scan_result.files)?;
        None
    } else {
        let estimator = SizeEstimator::new();
        Some(combine(
            &scan_result.files,
            &mut writer,
            &estimator,
            token,
            progress,
        )?)
    };

    if let Some(p) = progress {
        p.finish();
    }
    Ok(RunReport {
        scan: scan_result,
        combine: combine_result,
        estimated_characters,
    })
}

fn open_writer(destination: &OutputDestination) -> Result<Box<dyn Write>> {
    match destination {
        OutputDestination::Stdout => Ok(Box::new(std::io::stdout())),
        OutputDestination::File(path) => {
            let file = fs::File::create(path).map_err(Error::WriteFailure)?;
            Ok(Box::new(std::io::BufWriter::new(file)))
        }
    }
}

fn write_dry_run(writer: &mut dyn Write, files: &[SelectedFile]) -> Result<()> {
    writeln!(writer, "--- Dry Run: Files that would be combined ---")
        .map_err(Error::WriteFailure)?;
    for file in files {
        let rel = file.relative_path.to_string_lossy().replace('\\', "/");
        writeln!(writer, "- {}", rel).map_err(Error::WriteFailure)?;
    }
    writeln!(writer, "--- End Dry Run ---").map_err(Error::WriteFailure)?;
    writer.flush().map_err(Error::WriteFailure)
}

/// Resolves the output path to its canonical form so the walker can compare
/// it against entries even before the file exists.
fn resolve_output_guard(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
        let parent = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };
        if let Ok(canonical) = parent.canonicalize() {
            return canonical.join(name);
        }
    }
    path.to_path_buf()
}
