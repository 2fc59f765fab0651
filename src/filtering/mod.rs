//! Combines include specs and exclude pattern sets into one accept/reject
//! decision per path.
//!
//! A [`FilterPolicy`] is built once per run from caller-supplied
//! configuration and stays immutable for the run's duration; the walker and
//! combiner take it by reference. There is no ambient configuration lookup
//! anywhere in the core.

use crate::constants::REPO_IGNORE_FILENAME;
use crate::matcher::PatternSet;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The outcome of filtering a single walk entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Accept the file, or descend into the directory.
    Include,
    /// Skip this file.
    ExcludeFile,
    /// Skip this directory and its entire subtree without opening it.
    PruneDirectory,
}

/// The explicit include list: extensions and exact filenames.
///
/// A spec of the form `.ext` matches files by lowercased suffix; any spec can
/// also match by exact basename, so entries like `Dockerfile`, `LICENSE` or
/// `.gitignore` (which has no extension component) select by name.
#[derive(Debug, Clone, Default)]
pub struct IncludeSpecs {
    specs: HashSet<String>,
}

impl IncludeSpecs {
    /// Builds the spec set from raw strings. Extension-style entries are
    /// stored lowercased so suffix matching is case-insensitive.
    pub fn new<I, S>(specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let specs = specs
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                if s.starts_with('.') {
                    s.to_lowercase()
                } else {
                    s.to_string()
                }
            })
            .collect();
        Self { specs }
    }

    /// Returns `true` if the file qualifies by extension or exact filename.
    pub fn matches(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if self.specs.contains(&format!(".{}", ext.to_lowercase())) {
                return true;
            }
        }
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.specs.contains(name))
    }

    /// Returns `true` if no specs were provided.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// One accept/reject decision per path, combining the include list with the
/// explicit exclude patterns and (optionally) the repository ignore rules.
///
/// Files and directories are evaluated with identical pattern semantics;
/// only the consequence differs (prune vs. skip). A path is accepted iff it
/// matches an include spec AND no exclude set nets out to excluded AND no
/// ancestor directory was pruned (the walker enforces the ancestor part by
/// never descending into pruned directories).
#[derive(Debug, Clone)]
pub struct FilterPolicy {
    include: IncludeSpecs,
    excludes: PatternSet,
    repo_rules: PatternSet,
}

impl FilterPolicy {
    /// Creates a policy from include specs and explicit exclude patterns,
    /// with no repository ignore rules.
    pub fn new(include: IncludeSpecs, excludes: PatternSet) -> Self {
        Self {
            include,
            excludes,
            repo_rules: PatternSet::default(),
        }
    }

    /// Attaches rules loaded from the repository ignore file.
    pub fn with_repo_rules(mut self, repo_rules: PatternSet) -> Self {
        self.repo_rules = repo_rules;
        self
    }

    /// Decides what to do with one walk entry.
    ///
    /// `relative_path` is relative to the scan root; separators are
    /// normalized to `/` before pattern evaluation.
    pub fn decide(&self, relative_path: &Path, is_dir: bool) -> Decision {
        let rel = relative_path.to_string_lossy().replace('\\', "/");
        let excluded =
            self.excludes.matches(&rel, is_dir) || self.repo_rules.matches(&rel, is_dir);

        if is_dir {
            if excluded {
                Decision::PruneDirectory
            } else {
                Decision::Include
            }
        } else if !self.include.matches(relative_path) || excluded {
            Decision::ExcludeFile
        } else {
            Decision::Include
        }
    }
}

/// Loads the repository ignore file (`.gitignore`) directly under `root`.
///
/// An absent file is not an error; the option is simply a no-op for that run
/// and an empty set is returned. An unreadable file is treated the same way,
/// with a warning, since pattern handling must never abort a run.
pub fn load_repo_rules(root: &Path) -> PatternSet {
    let path = root.join(REPO_IGNORE_FILENAME);
    if !path.is_file() {
        log::debug!("No {} under root, skipping", REPO_IGNORE_FILENAME);
        return PatternSet::default();
    }
    match fs::read_to_string(&path) {
        Ok(content) => {
            let set = PatternSet::compile(content.lines());
            log::debug!(
                "Loaded {} rules from {}",
                set.rules().len(),
                path.display()
            );
            set
        }
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            PatternSet::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn policy(includes: &[&str], excludes: &[&str]) -> FilterPolicy {
        FilterPolicy::new(
            IncludeSpecs::new(includes.iter().copied()),
            PatternSet::compile(excludes.iter().copied()),
        )
    }

    #[test]
    fn test_include_by_extension_suffix() {
        let specs = IncludeSpecs::new([".py", ".rs"]);
        assert!(specs.matches(Path::new("src/main.rs")));
        assert!(specs.matches(Path::new("UPPER.RS"))); // case-insensitive suffix
        assert!(!specs.matches(Path::new("main.go")));
    }

    #[test]
    fn test_include_by_exact_filename() {
        let specs = IncludeSpecs::new(["Dockerfile", ".gitignore", "LICENSE"]);
        assert!(specs.matches(Path::new("Dockerfile")));
        assert!(specs.matches(Path::new("sub/.gitignore")));
        assert!(specs.matches(Path::new("LICENSE")));
        assert!(!specs.matches(Path::new("dockerfile"))); // names are exact
    }

    #[test]
    fn test_file_decisions() {
        let policy = policy(&[".rs"], &["*.log", "target/"]);
        assert_eq!(
            policy.decide(Path::new("src/main.rs"), false),
            Decision::Include
        );
        assert_eq!(
            policy.decide(Path::new("notes.txt"), false),
            Decision::ExcludeFile
        );
    }

    #[test]
    fn test_excluded_file_is_rejected_despite_include_spec() {
        let policy = policy(&[".log"], &["*.log"]);
        assert_eq!(
            policy.decide(Path::new("app.log"), false),
            Decision::ExcludeFile
        );
    }

    #[test]
    fn test_directory_pruning() {
        let policy = policy(&[".rs"], &["target/", "node_modules/"]);
        assert_eq!(
            policy.decide(Path::new("target"), true),
            Decision::PruneDirectory
        );
        assert_eq!(
            policy.decide(Path::new("src"), true),
            Decision::Include
        );
    }

    #[test]
    fn test_negation_re_includes_file() {
        let policy = policy(&[".log"], &["*.log", "!keep.log"]);
        assert_eq!(
            policy.decide(Path::new("keep.log"), false),
            Decision::Include
        );
        assert_eq!(
            policy.decide(Path::new("app.log"), false),
            Decision::ExcludeFile
        );
    }

    #[test]
    fn test_repo_rules_combine_with_explicit_excludes() {
        let policy = policy(&[".rs"], &["*.tmp"])
            .with_repo_rules(PatternSet::compile(["generated.rs"]));
        assert_eq!(
            policy.decide(Path::new("generated.rs"), false),
            Decision::ExcludeFile
        );
        assert_eq!(
            policy.decide(Path::new("main.rs"), false),
            Decision::Include
        );
    }

    #[test]
    fn test_load_repo_rules_missing_file_is_noop() {
        let temp = tempdir().unwrap();
        let set = load_repo_rules(temp.path());
        assert!(set.is_empty());
    }

    #[test]
    fn test_load_repo_rules_reads_gitignore() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(".gitignore"), "*.log\n# comment\n\ntarget/\n").unwrap();
        let set = load_repo_rules(temp.path());
        assert_eq!(set.rules().len(), 2);
        assert!(set.matches("app.log", false));
        assert!(set.matches(PathBuf::from("target").to_str().unwrap(), true));
    }
}
