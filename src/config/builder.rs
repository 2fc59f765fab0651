// src/config/builder.rs

use crate::config::{Config, OutputDestination};
use crate::constants::{DEFAULT_EXCLUDE_PATTERNS, DEFAULT_INCLUDE_SPECS, DEFAULT_WARN_THRESHOLD};
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Builds a [`Config`], starting from the built-in default filter lists.
///
/// Caller-supplied include specs and exclude patterns are appended after the
/// defaults (order matters for exclude patterns: later rules win), unless
/// `use_defaults(false)` starts the lists empty.
///
/// # Examples
///
/// ```
/// use codecat::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .root(".")
///     .include_spec(".proto")
///     .exclude_pattern("fixtures/")
///     .use_gitignore(false)
///     .build()
///     .unwrap();
/// assert!(config.include_specs.iter().any(|s| s == ".proto"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    root: PathBuf,
    include_specs: Vec<String>,
    exclude_patterns: Vec<String>,
    use_defaults: bool,
    use_gitignore: bool,
    warn_threshold: usize,
    output: OutputDestination,
    dry_run: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include_specs: Vec::new(),
            exclude_patterns: Vec::new(),
            use_defaults: true,
            use_gitignore: true,
            warn_threshold: DEFAULT_WARN_THRESHOLD,
            output: OutputDestination::Stdout,
            dry_run: false,
        }
    }
}

impl ConfigBuilder {
    /// Creates a builder with the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory to scan.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Adds one include spec (`.ext` or exact filename).
    pub fn include_spec(mut self, spec: impl Into<String>) -> Self {
        self.include_specs.push(spec.into());
        self
    }

    /// Adds several include specs.
    pub fn include_specs<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_specs.extend(specs.into_iter().map(Into::into));
        self
    }

    /// Adds one exclude pattern (gitignore syntax).
    pub fn exclude_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds several exclude patterns.
    pub fn exclude_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Whether the built-in default filter lists are applied. Defaults to `true`.
    pub fn use_defaults(mut self, yes: bool) -> Self {
        self.use_defaults = yes;
        self
    }

    /// Whether `.gitignore` under the root is consulted. Defaults to `true`.
    pub fn use_gitignore(mut self, yes: bool) -> Self {
        self.use_gitignore = yes;
        self
    }

    /// Sets the warn threshold in characters.
    pub fn warn_threshold(mut self, characters: usize) -> Self {
        self.warn_threshold = characters;
        self
    }

    /// Writes the combined document to a file instead of stdout.
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = OutputDestination::File(path.into());
        self
    }

    /// Lists the selection without combining.
    pub fn dry_run(mut self, yes: bool) -> Self {
        self.dry_run = yes;
        self
    }

    /// Validates the settings and produces an immutable [`Config`].
    pub fn build(self) -> Result<Config> {
        if self.root.as_os_str().is_empty() {
            return Err(Error::ConfigError("root path must not be empty".into()));
        }

        let mut include_specs: Vec<String> = if self.use_defaults {
            DEFAULT_INCLUDE_SPECS.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };
        include_specs.extend(self.include_specs);

        let mut exclude_patterns: Vec<String> = if self.use_defaults {
            DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            Vec::new()
        };
        exclude_patterns.extend(self.exclude_patterns);

        if include_specs.is_empty() {
            return Err(Error::ConfigError(
                "no include specs: nothing could ever be selected".into(),
            ));
        }

        Ok(Config {
            root: self.root,
            include_specs,
            exclude_patterns,
            use_gitignore: self.use_gitignore,
            warn_threshold: self.warn_threshold,
            output: self.output,
            dry_run: self.dry_run,
        })
    }
}
