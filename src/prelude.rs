//! The `codecat` prelude for convenient library usage.
//!
//! Re-exports the most commonly used types and functions so callers can get
//! started with a single import.
//!
//! # Example
//!
//! ```
//! use codecat::prelude::*;
//! # use tempfile::tempdir;
//! # fn main() -> Result<()> {
//! # let temp = tempdir().unwrap();
//! # std::fs::write(temp.path().join("a.py"), "x = 1\n").unwrap();
//! let config = ConfigBuilder::new().root(temp.path()).build()?;
//! let token = CancellationToken::new();
//! let scanned = scan(&config, &token, None)?;
//! # assert_eq!(scanned.files.len(), 1);
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{Config, ConfigBuilder, OutputDestination};
pub use crate::core_types::{
    CombineResult, Outcome, ScanResult, SelectedFile, Skip, SkipReason,
};
pub use crate::errors::{Error, Result};
pub use crate::estimator::SizeEstimator;
pub use crate::filtering::{Decision, FilterPolicy, IncludeSpecs};
pub use crate::matcher::PatternSet;
pub use crate::progress::{NoOpProgress, ProgressReporter};
pub use crate::{combine, estimate, run, scan, RunReport};
