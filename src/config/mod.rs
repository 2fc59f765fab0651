//! Defines the immutable per-run `Config` and its builder.
//!
//! A `Config` is constructed once per run and passed by reference into the
//! core; nothing in the core consults ambient or global settings.

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;

/// Where the combined document is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the given file, which is excluded from its own scan.
    File(PathBuf),
}

/// All settings for one run, validated and immutable.
#[derive(Debug, Clone)]
pub struct Config {
    /// The directory under which selection and traversal occur.
    pub root: PathBuf,
    /// Include specs: `.ext` suffixes and exact filenames.
    pub include_specs: Vec<String>,
    /// Exclude patterns in gitignore syntax, in evaluation order.
    pub exclude_patterns: Vec<String>,
    /// Whether to load `.gitignore` directly under the root.
    pub use_gitignore: bool,
    /// Warn when the estimated output exceeds this many characters.
    pub warn_threshold: usize,
    /// Where the combined document goes.
    pub output: OutputDestination,
    /// List the selection without combining.
    pub dry_run: bool,
}
